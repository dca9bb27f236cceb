// src/utils/http.rs

//! HTTP transport abstraction and the reqwest-backed implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub use reqwest::Method;

use crate::error::Result;
use crate::models::FetchConfig;

/// Method, headers and body of one upstream request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Look up a header value by case-insensitive name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status code and raw body of an upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 200..=299.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

/// Performs a single request. Never retries or interprets the status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, request: ApiRequest) -> Result<ApiResponse>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &FetchConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// [`Transport`] over a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        Ok(Self::new(create_async_client(config)?))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &str, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self.client.request(request.method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted transport for tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use tokio::time::Instant;

    use super::*;
    use crate::error::AppError;

    /// One queued outcome: a response or a transport failure message.
    pub type Scripted = std::result::Result<ApiResponse, String>;

    /// A request the mock received, with the (possibly paused) clock reading.
    #[derive(Debug, Clone)]
    pub struct Recorded {
        pub url: String,
        pub request: ApiRequest,
        pub at: Instant,
    }

    #[derive(Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<Scripted>>,
        requests: Mutex<Vec<Recorded>>,
    }

    impl MockTransport {
        pub fn new<I: IntoIterator<Item = Scripted>>(responses: I) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<Recorded> {
            self.requests.lock().unwrap().clone()
        }

        /// JSON bodies of all received requests.
        pub fn bodies(&self) -> Vec<serde_json::Value> {
            self.requests()
                .iter()
                .map(|r| serde_json::from_str(r.request.body.as_deref().unwrap_or("null")).unwrap())
                .collect()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, url: &str, request: ApiRequest) -> Result<ApiResponse> {
            self.requests.lock().unwrap().push(Recorded {
                url: url.to_string(),
                request,
                at: Instant::now(),
            });

            let next = self.responses.lock().unwrap().pop_front();
            match next {
                Some(Ok(response)) => Ok(response),
                Some(Err(message)) => Err(AppError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    message,
                ))),
                None => Err(AppError::Io(std::io::Error::other(
                    "mock transport ran out of responses",
                ))),
            }
        }
    }
}
