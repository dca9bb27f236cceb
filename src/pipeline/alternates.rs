// src/pipeline/alternates.rs

//! Cross-locale alternate links.

use std::collections::HashSet;

use crate::models::{Alternate, Locale, LocalePages, PAGE_FREQ, PAGE_PRIORITY, PageDescriptor};

/// Paths that survived filtering for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePaths {
    pub locale: Locale,
    pub paths: Vec<String>,
}

/// Turn per-locale path lists into sitemap descriptors.
///
/// For every path of every locale, each other locale (in input order) that
/// lists the identical path becomes an alternate. Paths with no match get an
/// empty list. Output order follows the input exactly.
pub fn build_locale_pages(by_locale: &[LocalePaths]) -> Vec<LocalePages> {
    let lookups: Vec<HashSet<&str>> = by_locale
        .iter()
        .map(|entry| entry.paths.iter().map(String::as_str).collect())
        .collect();

    by_locale
        .iter()
        .map(|entry| LocalePages {
            locale: entry.locale.clone(),
            pages: entry
                .paths
                .iter()
                .map(|path| PageDescriptor {
                    path: path.clone(),
                    lang: entry.locale.clone(),
                    priority: PAGE_PRIORITY,
                    freq: PAGE_FREQ,
                    alternates: by_locale
                        .iter()
                        .zip(&lookups)
                        .filter(|(other, paths)| {
                            other.locale != entry.locale && paths.contains(path.as_str())
                        })
                        .map(|(other, _)| Alternate {
                            lang: other.locale.clone(),
                            path: path.clone(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
