// src/error.rs

//! Unified error handling for the sitemap page builder.

use std::fmt;

use thiserror::Error;

/// Result type alias for sitemap page operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// URL filter pattern failed to compile
    #[error("Invalid URL pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown pages-list API type
    #[error("Unsupported pages-list API type: {0}")]
    UnsupportedApi(String),

    /// Upstream answered outside the 2xx range
    #[error("{api} Pages API responded with NOT OK: {status} (page: {page}) {body}")]
    Upstream {
        api: &'static str,
        status: u16,
        page: u32,
        body: String,
    },

    /// Request for a page never produced a response
    #[error("{api} Pages API request failed (page: {page}): {source}")]
    Transport {
        api: &'static str,
        page: u32,
        #[source]
        source: Box<AppError>,
    },

    /// Upstream answered 2xx with a body that does not match the listing shape
    #[error("Malformed response for page {page}: {message}")]
    MalformedResponse { page: u32, message: String },
}

impl AppError {
    /// Create a URL pattern compilation error.
    pub fn pattern(pattern: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Attach the page being fetched to a transport-level failure.
    pub fn transport(api: &'static str, page: u32, source: AppError) -> Self {
        Self::Transport {
            api,
            page,
            source: Box::new(source),
        }
    }

    /// Create a malformed response error for a page.
    pub fn malformed(page: u32, message: impl fmt::Display) -> Self {
        Self::MalformedResponse {
            page,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_carries_page_and_body() {
        let err = AppError::Upstream {
            api: "Games",
            status: 503,
            page: 4,
            body: "maintenance".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Games Pages API responded with NOT OK: 503 (page: 4) maintenance"
        );
    }

    #[test]
    fn test_transport_message_carries_page() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let err = AppError::transport("Games", 2, io.into());
        assert_eq!(
            err.to_string(),
            "Games Pages API request failed (page: 2): I/O error: connection reset"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unsupported_api_message() {
        let err = AppError::UnsupportedApi("ss".to_string());
        assert_eq!(err.to_string(), "Unsupported pages-list API type: ss");
    }
}
