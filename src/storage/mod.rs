//! Storage abstractions for sitemap page snapshots.
//!
//! The snapshot is the hand-off point to the sitemap writer:
//!
//! ```text
//! {root}/
//! └── pages.json   # updated_at, page_count, per-locale descriptor lists
//! ```

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::LocalePages;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Descriptors written across all locales
    pub page_count: usize,
    /// Number of locales in the snapshot
    pub locale_count: usize,
    /// Where the snapshot landed
    pub location: String,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Contents of `pages.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesSnapshot {
    /// ISO 8601 timestamp of the fetch
    pub updated_at: DateTime<Utc>,
    /// Total descriptor count across locales
    pub page_count: usize,
    /// Per-locale descriptors, in request order
    pub locales: Vec<LocalePages>,
}

impl PagesSnapshot {
    pub fn new(locales: Vec<LocalePages>) -> Self {
        Self {
            updated_at: Utc::now(),
            page_count: locales.iter().map(|l| l.pages.len()).sum(),
            locales,
        }
    }
}

/// Trait for snapshot storage backends.
#[async_trait]
pub trait SitemapStorage: Send + Sync {
    /// Replace the stored snapshot.
    async fn write_pages(&self, snapshot: &PagesSnapshot) -> Result<WriteMetadata>;

    /// Load the stored snapshot, if any.
    async fn load_pages(&self) -> Result<Option<PagesSnapshot>>;
}
