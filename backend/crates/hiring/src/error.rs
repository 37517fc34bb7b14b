//! Hiring Error Types
//!
//! Errors raised by the registration, selection and submission stages.
//! None of them leave the process: the workflow turns every failure into a
//! logged outcome.

use platform::config::ConfigError;
use platform::http::HttpError;
use thiserror::Error;

/// Hiring-specific result type alias
pub type HiringResult<T> = Result<T, HiringError>;

/// Hiring-specific error variants
#[derive(Debug, Error)]
pub enum HiringError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport failure or non-2xx response
    #[error("{0}")]
    Http(#[from] HttpError),

    /// Response body is not the expected JSON shape
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Registration response lacks a required field
    #[error("Registration response is missing field `{0}`")]
    MissingField(&'static str),

    /// Access token cannot be sent as an HTTP header value
    #[error("Access token is not a valid header value")]
    InvalidAccessToken,

    /// Registration number suffix is not an integer
    #[error("Registration number suffix {suffix:?} is not numeric")]
    InvalidRegistrationNumber { suffix: String },
}

impl HiringError {
    /// Short machine-readable label, used as a log field
    pub fn label(&self) -> &'static str {
        match self {
            HiringError::Config(_) => "config",
            HiringError::Http(HttpError::UnexpectedStatus { .. }) => "http_status",
            HiringError::Http(e) if e.is_timeout() => "http_timeout",
            HiringError::Http(_) => "http_transport",
            HiringError::Decode(_) => "decode",
            HiringError::MissingField(_) => "missing_field",
            HiringError::InvalidAccessToken => "invalid_access_token",
            HiringError::InvalidRegistrationNumber { .. } => "invalid_registration_number",
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self, context: &str) {
        match self {
            HiringError::Http(HttpError::UnexpectedStatus { status, body }) => {
                tracing::error!(
                    kind = self.label(),
                    status = *status,
                    body = %body,
                    "{context}"
                );
            }
            HiringError::MissingField(field) => {
                tracing::error!(kind = self.label(), field = *field, "{context}");
            }
            _ => {
                tracing::error!(kind = self.label(), error = %self, "{context}");
            }
        }
    }
}

impl From<reqwest::Error> for HiringError {
    fn from(err: reqwest::Error) -> Self {
        HiringError::Http(HttpError::Transport(err))
    }
}
