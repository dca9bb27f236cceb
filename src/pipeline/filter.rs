// src/pipeline/filter.rs

//! Include/exclude evaluation over upstream records.
//!
//! Each of the four criteria (ids, url patterns, categories, providers)
//! evaluates to `Some(true)`, `Some(false)`, or `None` when not specified.
//!
//! - `include`: a record is dropped if any specified criterion is `false`.
//!   Specified criteria therefore combine as AND, and an include table with
//!   no criteria keeps everything.
//! - `exclude`: a record is dropped if any specified criterion is `true`.
//! - neither: every record is kept.
//!
//! A criterion given as an empty list is specified and evaluates to `false`.

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{FilterRules, FilterSpec, PageRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Include,
    Exclude,
}

/// Criteria with URL patterns compiled once.
#[derive(Debug, Clone)]
struct CompiledRules {
    ids: Option<Vec<String>>,
    urls: Option<Vec<Regex>>,
    categories: Option<Vec<String>>,
    providers: Option<Vec<String>>,
}

impl CompiledRules {
    fn new(rules: &FilterRules) -> Result<Self> {
        let urls = rules
            .urls
            .as_ref()
            .map(|patterns| {
                patterns
                    .iter()
                    .map(|p| Regex::new(p).map_err(|e| AppError::pattern(p, e)))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        Ok(Self {
            ids: rules.ids.clone(),
            urls,
            categories: rules.categories.clone(),
            providers: rules.providers.clone(),
        })
    }

    fn evaluate(&self, record: &PageRecord) -> [Option<bool>; 4] {
        [
            self.ids
                .as_ref()
                .map(|ids| ids.iter().any(|id| *id == record.identifier)),
            self.urls
                .as_ref()
                .map(|urls| urls.iter().any(|re| re.is_match(&record.seo_title))),
            self.categories.as_ref().map(|wanted| {
                wanted.iter().any(|category| {
                    record
                        .categories
                        .as_ref()
                        .is_some_and(|have| have.contains(category))
                })
            }),
            self.providers.as_ref().map(|providers| {
                providers
                    .iter()
                    .any(|provider| record.provider.as_deref() == Some(provider.as_str()))
            }),
        ]
    }
}

/// A [`FilterSpec`] ready to be applied to many records.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    rules: Option<(Mode, CompiledRules)>,
}

impl CompiledFilter {
    /// Compile `spec`. Fails on an invalid URL pattern or when both modes are set.
    pub fn new(spec: &FilterSpec) -> Result<Self> {
        spec.validate()?;

        let rules = match (&spec.include, &spec.exclude) {
            (Some(rules), _) => Some((Mode::Include, CompiledRules::new(rules)?)),
            (None, Some(rules)) => Some((Mode::Exclude, CompiledRules::new(rules)?)),
            (None, None) => None,
        };
        Ok(Self { rules })
    }

    /// Whether `record` survives the filter.
    pub fn accepts(&self, record: &PageRecord) -> bool {
        let Some((mode, rules)) = &self.rules else {
            return true;
        };

        let predicates = rules.evaluate(record);
        match mode {
            Mode::Include => !predicates.contains(&Some(false)),
            Mode::Exclude => !predicates.contains(&Some(true)),
        }
    }

    /// Keep the accepted records, in their original order.
    pub fn apply<'a>(&self, records: &'a [PageRecord]) -> Vec<&'a PageRecord> {
        records.iter().filter(|r| self.accepts(r)).collect()
    }
}
