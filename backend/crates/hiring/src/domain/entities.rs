//! Domain Entities
//!
//! Transient data shapes owned by a single workflow run.

use crate::domain::value_objects::AccessToken;

/// Candidate identity, supplied by configuration and immutable for the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIdentity {
    pub name: String,
    pub registration_number: String,
    pub email: String,
}

impl CandidateIdentity {
    pub fn new(
        name: impl Into<String>,
        registration_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            registration_number: registration_number.into(),
            email: email.into(),
        }
    }
}

/// Result of a successful webhook registration
///
/// Both fields are required; construction goes through the wire response
/// validation in `infra::dto`.
#[derive(Debug)]
pub struct WebhookRegistration {
    pub webhook_url: String,
    pub access_token: AccessToken,
}

impl WebhookRegistration {
    pub fn new(webhook_url: impl Into<String>, access_token: AccessToken) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            access_token,
        }
    }
}

/// Body submitted to the webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub final_query: String,
}

impl SubmissionPayload {
    pub fn new(final_query: impl Into<String>) -> Self {
        Self {
            final_query: final_query.into(),
        }
    }
}

/// The two canned answers, indexed by question parity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    pub even: String,
    pub odd: String,
}
