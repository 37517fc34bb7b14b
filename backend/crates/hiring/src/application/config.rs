//! Application Configuration
//!
//! Candidate identity and hiring API settings, loaded from the environment.

use std::time::Duration;

use platform::config::{ConfigError, ConfigSource, Env};
use platform::http::{DEFAULT_TIMEOUT, HttpClientConfig};

use crate::domain::entities::{AnswerSheet, CandidateIdentity};
use crate::domain::services::same_query;
use crate::domain::value_objects::AuthScheme;

/// Fixed registration endpoint of the hiring API
pub const DEFAULT_REGISTRATION_URL: &str =
    "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook/JAVA";

pub const ENV_CANDIDATE_NAME: &str = "CANDIDATE_NAME";
pub const ENV_CANDIDATE_REG_NO: &str = "CANDIDATE_REG_NO";
pub const ENV_CANDIDATE_EMAIL: &str = "CANDIDATE_EMAIL";
pub const ENV_REGISTRATION_URL: &str = "HIRING_REGISTRATION_URL";
pub const ENV_TIMEOUT_SECS: &str = "HIRING_TIMEOUT_SECS";
pub const ENV_AUTH_SCHEME: &str = "HIRING_AUTH_SCHEME";
pub const ENV_ODD_ANSWER_SQL: &str = "HIRING_ODD_ANSWER_SQL";

/// Hiring API configuration
#[derive(Debug, Clone)]
pub struct HiringConfig {
    /// Registration endpoint
    pub registration_url: String,
    /// Per-request timeout for both calls
    pub request_timeout: Duration,
    /// Authorization header format on submission
    pub auth_scheme: AuthScheme,
    /// Canned answers
    pub answers: AnswerSheet,
}

impl Default for HiringConfig {
    fn default() -> Self {
        Self {
            registration_url: DEFAULT_REGISTRATION_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            auth_scheme: AuthScheme::Raw,
            answers: AnswerSheet::default(),
        }
    }
}

impl HiringConfig {
    /// Load from environment, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&Env)
    }

    pub fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let auth_scheme = match source.optional(ENV_AUTH_SCHEME) {
            Some(raw) => raw
                .parse::<AuthScheme>()
                .map_err(|reason| ConfigError::invalid(ENV_AUTH_SCHEME, reason))?,
            None => defaults.auth_scheme,
        };

        let answers = match source.optional(ENV_ODD_ANSWER_SQL) {
            // Odd registration numbers must never receive the even answer
            Some(odd) if same_query(&odd, &defaults.answers.even) => {
                return Err(ConfigError::invalid(
                    ENV_ODD_ANSWER_SQL,
                    "must differ from the even-branch answer",
                ));
            }
            Some(odd) => AnswerSheet::with_odd(odd),
            None => defaults.answers,
        };

        Ok(Self {
            registration_url: source
                .optional(ENV_REGISTRATION_URL)
                .unwrap_or(defaults.registration_url),
            request_timeout: source
                .duration_secs(ENV_TIMEOUT_SECS)?
                .unwrap_or(defaults.request_timeout),
            auth_scheme,
            answers,
        })
    }

    /// HTTP client settings derived from this configuration
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig::with_timeout(self.request_timeout)
    }
}

impl CandidateIdentity {
    /// Load the candidate identity; all three variables are required
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&Env)
    }

    pub fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self::new(
            source.required(ENV_CANDIDATE_NAME)?,
            source.required(ENV_CANDIDATE_REG_NO)?,
            source.required(ENV_CANDIDATE_EMAIL)?,
        ))
    }
}
