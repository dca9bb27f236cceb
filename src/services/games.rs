// src/services/games.rs

//! Games listing API adapter.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{FetchOptions, PageBatch, PageRecord, Pagination};
use crate::services::PageSource;
use crate::utils::http::{ApiRequest, Method, Transport};

/// Path prefix for every games page.
const PATH_PREFIX: &str = "game/";

/// Request body for one listing page.
#[derive(Debug, Serialize)]
struct GamesQuery<'a> {
    device: &'a str,
    page: u32,
    without_territorial_restrictions: bool,
    sort: SortOrder,
    page_size: u32,
}

#[derive(Debug, Serialize)]
struct SortOrder {
    direction: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Successful listing response.
#[derive(Debug, Deserialize)]
struct GamesListing {
    data: Vec<PageRecord>,
    pagination: Pagination,
}

/// Page source for the games listing API.
pub struct GamesApi {
    url: String,
    transport: Arc<dyn Transport>,
    device: String,
    page_size: u32,
    user_agent: String,
}

impl GamesApi {
    pub fn new(url: impl Into<String>, transport: Arc<dyn Transport>, options: &FetchOptions) -> Self {
        Self {
            url: url.into(),
            transport,
            device: options.device.clone(),
            page_size: options.page_size,
            user_agent: options.user_agent.clone(),
        }
    }

    fn request(&self, page: u32) -> Result<ApiRequest> {
        let query = GamesQuery {
            device: &self.device,
            page,
            without_territorial_restrictions: true,
            sort: SortOrder {
                direction: "ASC",
                kind: "global",
            },
            page_size: self.page_size,
        };

        Ok(ApiRequest::new(Method::POST)
            .header("user-agent", self.user_agent.as_str())
            .header("content-type", "application/json")
            .header("accept", "application/vnd.s.v2+json")
            .header("pragma", "no-cache")
            .header("priority", "u=1, i")
            .body(serde_json::to_string(&query)?))
    }
}

#[async_trait]
impl PageSource for GamesApi {
    fn name(&self) -> &'static str {
        "Games"
    }

    async fn fetch_page(&self, page: u32) -> Result<PageBatch> {
        let response = self
            .transport
            .send(&self.url, self.request(page)?)
            .await
            .map_err(|e| AppError::transport(self.name(), page, e))?;

        if !response.is_success() {
            return Err(AppError::Upstream {
                api: self.name(),
                status: response.status,
                page,
                body: response.text().to_string(),
            });
        }

        let listing: GamesListing = response.json().map_err(|e| AppError::malformed(page, e))?;
        Ok(PageBatch {
            records: listing.data,
            next_page: listing.pagination.next_page,
        })
    }

    fn path_for(&self, record: &PageRecord) -> String {
        format!("{PATH_PREFIX}{}", record.seo_title)
    }
}
