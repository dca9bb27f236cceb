//! Service layer for the sitemap page builder.
//!
//! This module contains the upstream-facing logic:
//! - The `PageSource` adapter contract and its games implementation (`GamesApi`)
//! - Sequential page traversal with retry (`Paginator`)
//! - API type dispatch (`select_source`)

mod games;
mod pagination;
mod selector;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{PageBatch, PageRecord};

pub use games::GamesApi;
pub use pagination::Paginator;
pub use selector::{ApiType, select_source};

/// One upstream listing API, reduced to `{records, next cursor}`.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fetch a single listing page.
    async fn fetch_page(&self, page: u32) -> Result<PageBatch>;

    /// Sitemap path of a record.
    fn path_for(&self, record: &PageRecord) -> String;
}
