// src/services/selector.rs

//! Maps a configured API type tag to its page source.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::FetchOptions;
use crate::services::{GamesApi, PageSource};
use crate::utils::http::Transport;

/// Known upstream listing APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiType {
    Games,
}

impl ApiType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiType::Games => "games",
        }
    }
}

impl FromStr for ApiType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "games" => Ok(ApiType::Games),
            _ => Err(AppError::UnsupportedApi(s.to_string())),
        }
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the page source for `api_type`.
pub fn select_source(
    api_type: ApiType,
    url: &str,
    transport: Arc<dyn Transport>,
    options: &FetchOptions,
) -> Box<dyn PageSource> {
    match api_type {
        ApiType::Games => Box::new(GamesApi::new(url, transport, options)),
    }
}
