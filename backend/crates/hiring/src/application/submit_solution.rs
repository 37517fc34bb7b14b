//! Submit Solution Use Case
//!
//! Failures are logged and reported as a status, never propagated.

use std::sync::Arc;

use crate::domain::entities::{SubmissionPayload, WebhookRegistration};
use crate::domain::gateway::HiringGateway;
use crate::error::HiringError;

/// Outcome of the submission call
#[derive(Debug)]
pub enum SubmissionStatus {
    /// Webhook answered 2xx; body kept for observability only
    Accepted { response: String },
    /// Transport failure or non-2xx status, already logged
    Failed { error: HiringError },
}

impl SubmissionStatus {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionStatus::Accepted { .. })
    }
}

/// Submit Solution Use Case
pub struct SubmitSolutionUseCase<G>
where
    G: HiringGateway,
{
    gateway: Arc<G>,
}

impl<G> SubmitSolutionUseCase<G>
where
    G: HiringGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        registration: &WebhookRegistration,
        final_query: &str,
    ) -> SubmissionStatus {
        let payload = SubmissionPayload::new(final_query);

        tracing::info!(webhook = %registration.webhook_url, "Submitting solution");

        match self
            .gateway
            .submit_solution(
                &registration.webhook_url,
                &registration.access_token,
                &payload,
            )
            .await
        {
            Ok(response) => {
                tracing::info!(response = %response, "Submission response received");
                SubmissionStatus::Accepted { response }
            }
            Err(error) => {
                error.log("Failed to submit the solution to webhook");
                SubmissionStatus::Failed { error }
            }
        }
    }
}
