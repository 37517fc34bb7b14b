//! Gateway Trait
//!
//! Interface to the remote hiring API. Implementation is in infrastructure layer.

use crate::domain::entities::{CandidateIdentity, SubmissionPayload, WebhookRegistration};
use crate::domain::value_objects::AccessToken;
use crate::error::HiringResult;

/// Hiring API gateway trait
#[trait_variant::make(HiringGateway: Send)]
pub trait LocalHiringGateway {
    /// Register the candidate and obtain a webhook URL and access token
    async fn generate_webhook(
        &self,
        candidate: &CandidateIdentity,
    ) -> HiringResult<WebhookRegistration>;

    /// Post the final answer to the webhook, returning the raw response body
    async fn submit_solution(
        &self,
        webhook_url: &str,
        access_token: &AccessToken,
        payload: &SubmissionPayload,
    ) -> HiringResult<String>;
}
