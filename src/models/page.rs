//! Upstream listing data structures.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One entry of an upstream listing page.
///
/// Only the fields used for filtering and path building are typed; the rest
/// (pricing, volatility, device metadata, ...) is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageRecord {
    /// Unique identifier of the content item
    pub identifier: String,

    /// SEO slug used to build the public path
    pub seo_title: String,

    /// Display title
    #[serde(default)]
    pub title: Option<String>,

    /// Categories the item belongs to
    #[serde(default)]
    pub categories: Option<Vec<String>>,

    /// Content provider
    #[serde(default)]
    pub provider: Option<String>,

    /// Everything else the upstream sends
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl PageRecord {
    /// Create a record with only the typed fields populated.
    pub fn new(identifier: impl Into<String>, seo_title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            seo_title: seo_title.into(),
            title: None,
            categories: None,
            provider: None,
            extra: HashMap::new(),
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

/// Pagination cursor reported by the upstream after each page.
///
/// Traversal stops exactly when `next_page` is `None`. The key itself is
/// required; only an explicit `null` ends the listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    #[serde(deserialize_with = "required_nullable")]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub prev_page: Option<u32>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_count: u64,
}

// A plain `Option` field would read a missing key as `None`.
fn required_nullable<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer)
}

/// Records of one fetched page plus where to go next.
#[derive(Debug, Clone, Default)]
pub struct PageBatch {
    pub records: Vec<PageRecord>,
    pub next_page: Option<u32>,
}
