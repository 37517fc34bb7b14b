//! Outbound HTTP Infrastructure
//!
//! Shared `reqwest` client construction and response status handling.

use std::time::Duration;

use reqwest::{Client, Response};
use thiserror::Error;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of characters of an error body kept for logging
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Outbound HTTP errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// Client could not be constructed (TLS backend, invalid settings)
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection, timeout or body read failure
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote answered with a non-2xx status
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl HttpError {
    /// Whether the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Transport(e) | HttpError::ClientBuild(e) if e.is_timeout())
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total request timeout
    pub timeout: Duration,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
    /// User-Agent sent with every request
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpClientConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            connect_timeout: timeout.min(DEFAULT_CONNECT_TIMEOUT),
            ..Default::default()
        }
    }
}

/// Build a `reqwest::Client` with explicit bounded timeouts
pub fn build_client(config: &HttpClientConfig) -> Result<Client, HttpError> {
    Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(HttpError::ClientBuild)
}

/// Pass through a 2xx response, otherwise turn it into `HttpError::UnexpectedStatus`
///
/// The error body is read (best effort) and truncated so it can be logged.
pub async fn ensure_success(response: Response) -> Result<Response, HttpError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(HttpError::UnexpectedStatus {
        status: status.as_u16(),
        body: truncate_chars(&body, MAX_ERROR_BODY_CHARS),
    })
}

/// Truncate on a char boundary, marking the cut with an ellipsis
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}
