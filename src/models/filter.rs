//! Include/exclude filter rules.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Filter applied to upstream records before they become sitemap pages.
///
/// At most one of `include` / `exclude` may be set. With neither, every
/// record passes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<FilterRules>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilterRules>,
}

/// The four criteria a filter mode can specify. `None` means "not specified".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FilterRules {
    /// Exact identifier matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,

    /// Regular expressions searched in `seo_title`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,

    /// Any-match against the record's categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    /// Exact provider matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<String>>,
}

impl FilterSpec {
    /// A filter that keeps only records matching `rules`.
    pub fn include(rules: FilterRules) -> Self {
        Self {
            include: Some(rules),
            exclude: None,
        }
    }

    /// A filter that drops records matching `rules`.
    pub fn exclude(rules: FilterRules) -> Self {
        Self {
            include: None,
            exclude: Some(rules),
        }
    }

    /// Reject specs that set both modes.
    pub fn validate(&self) -> Result<()> {
        if self.include.is_some() && self.exclude.is_some() {
            return Err(AppError::config(
                "filter must set either `include` or `exclude`, not both",
            ));
        }
        Ok(())
    }
}

impl FilterRules {
    pub fn ids<I: IntoIterator<Item = S>, S: Into<String>>(mut self, ids: I) -> Self {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn urls<I: IntoIterator<Item = S>, S: Into<String>>(mut self, urls: I) -> Self {
        self.urls = Some(urls.into_iter().map(Into::into).collect());
        self
    }

    pub fn categories<I: IntoIterator<Item = S>, S: Into<String>>(mut self, categories: I) -> Self {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn providers<I: IntoIterator<Item = S>, S: Into<String>>(mut self, providers: I) -> Self {
        self.providers = Some(providers.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_parses_to_no_filter() {
        let spec: FilterSpec = toml::from_str("").unwrap();
        assert_eq!(spec, FilterSpec::default());
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_parse_exclude_table() {
        let spec: FilterSpec = toml::from_str(
            r#"
            [exclude]
            providers = ["acme"]
            urls = ["^demo-"]
            "#,
        )
        .unwrap();

        let rules = spec.exclude.as_ref().unwrap();
        assert_eq!(rules.providers, Some(vec!["acme".to_string()]));
        assert_eq!(rules.urls, Some(vec!["^demo-".to_string()]));
        assert!(rules.ids.is_none());
        assert!(spec.include.is_none());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<FilterSpec>("[includes]\nids = [\"a\"]\n").is_err());
        assert!(toml::from_str::<FilterSpec>("[exclude]\nprovider = [\"acme\"]\n").is_err());
    }

    #[test]
    fn test_both_modes_rejected() {
        let spec = FilterSpec {
            include: Some(FilterRules::default().ids(["a"])),
            exclude: Some(FilterRules::default().ids(["b"])),
        };
        assert!(matches!(spec.validate(), Err(AppError::Config(_))));
    }
}
