// src/services/pagination.rs

//! Sequential page traversal with per-page retry.

use std::time::Duration;

use crate::error::Result;
use crate::models::{FetchOptions, PageRecord};
use crate::services::PageSource;
use crate::utils::retry;

/// First page requested from every upstream.
const FIRST_PAGE: u32 = 1;

/// Walks a listing page by page until the upstream reports no next page.
///
/// Each request is preceded by `request_delay` (the first one too) and wrapped
/// in a retry with `max_retries` extra attempts. A page that still fails
/// aborts the whole traversal; nothing partial is returned.
#[derive(Debug, Clone)]
pub struct Paginator {
    request_delay: Duration,
    max_retries: u32,
}

impl Paginator {
    pub fn new(request_delay: Duration, max_retries: u32) -> Self {
        Self {
            request_delay,
            max_retries,
        }
    }

    pub fn from_options(options: &FetchOptions) -> Self {
        Self::new(options.request_delay, options.max_retries)
    }

    /// Fetch every page of `source`, in server order.
    ///
    /// An upstream that never returns a null `next_page` keeps this running.
    pub async fn fetch_all(&self, source: &dyn PageSource) -> Result<Vec<PageRecord>> {
        log::info!("Getting pages from {} API...", source.name());

        let mut records = Vec::new();
        let mut cursor = Some(FIRST_PAGE);

        while let Some(page) = cursor {
            log::debug!("Fetching {} page {}", source.name(), page);
            if !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }

            let batch = retry(self.max_retries, || source.fetch_page(page)).await?;
            log::debug!("Page {} returned {} records", page, batch.records.len());

            records.extend(batch.records);
            cursor = batch.next_page;
        }

        log::info!("Fetched {} records from {} API", records.len(), source.name());
        Ok(records)
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::from_options(&FetchOptions::default())
    }
}
