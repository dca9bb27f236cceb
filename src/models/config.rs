//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{FilterSpec, Locale};
use crate::pipeline::CompiledFilter;
use crate::services::ApiType;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream listing API
    #[serde(default)]
    pub api: ApiConfig,

    /// Pagination, retry and request settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Locales to produce page sets for
    #[serde(default = "defaults::locales")]
    pub locales: Vec<Locale>,

    /// Include/exclude rules
    #[serde(default)]
    pub filter: FilterSpec,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        self.api.kind.parse::<ApiType>()?;
        if self.api.url.trim().is_empty() {
            return Err(AppError::validation("api.url is empty"));
        }
        url::Url::parse(&self.api.url)?;
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::validation("fetch.timeout_secs must be > 0"));
        }
        if self.fetch.page_size == 0 {
            return Err(AppError::validation("fetch.page_size must be > 0"));
        }
        if self.locales.is_empty() {
            return Err(AppError::validation("No locales defined"));
        }
        CompiledFilter::new(&self.filter)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            fetch: FetchConfig::default(),
            locales: defaults::locales(),
            filter: FilterSpec::default(),
        }
    }
}

/// Upstream listing API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API type tag (e.g. "games")
    #[serde(rename = "type", default = "defaults::api_type")]
    pub kind: String,

    /// Listing endpoint
    #[serde(default)]
    pub url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            kind: defaults::api_type(),
            url: String::new(),
        }
    }
}

/// Pagination and HTTP settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Pause before every page request, in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// Extra attempts per page after the first failure
    #[serde(default = "defaults::max_retries")]
    pub max_retries: u32,

    /// Records requested per page
    #[serde(default = "defaults::page_size")]
    pub page_size: u32,

    /// Device class sent to the upstream
    #[serde(default = "defaults::device")]
    pub device: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Transport-level request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl FetchConfig {
    /// Runtime options handed to the paginator and adapters.
    pub fn options(&self) -> FetchOptions {
        FetchOptions {
            request_delay: Duration::from_millis(self.request_delay_ms),
            max_retries: self.max_retries,
            page_size: self.page_size,
            device: self.device.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: defaults::request_delay(),
            max_retries: defaults::max_retries(),
            page_size: defaults::page_size(),
            device: defaults::device(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Explicit pagination settings, passed in at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Wait before each request, including the first
    pub request_delay: Duration,
    /// Retries per page after the first attempt
    pub max_retries: u32,
    pub page_size: u32,
    pub device: String,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchConfig::default().options()
    }
}

mod defaults {
    use crate::models::Locale;

    pub fn api_type() -> String {
        "games".into()
    }
    pub fn locales() -> Vec<Locale> {
        vec![Locale::new("en")]
    }

    // Fetch defaults
    pub fn request_delay() -> u64 {
        1000
    }
    pub fn max_retries() -> u32 {
        5
    }
    pub fn page_size() -> u32 {
        100
    }
    pub fn device() -> String {
        "desktop".into()
    }
    pub fn user_agent() -> String {
        "sitemap-generator-games".into()
    }
    pub fn timeout() -> u64 {
        30
    }
}
