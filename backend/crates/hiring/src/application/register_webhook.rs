//! Register Webhook Use Case

use std::sync::Arc;

use crate::domain::entities::{CandidateIdentity, WebhookRegistration};
use crate::domain::gateway::HiringGateway;
use crate::error::HiringResult;

/// Register Webhook Use Case
pub struct RegisterWebhookUseCase<G>
where
    G: HiringGateway,
{
    gateway: Arc<G>,
}

impl<G> RegisterWebhookUseCase<G>
where
    G: HiringGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Single attempt, no retries
    pub async fn execute(&self, candidate: &CandidateIdentity) -> HiringResult<WebhookRegistration> {
        tracing::info!("Registering webhook");

        let registration = self.gateway.generate_webhook(candidate).await?;

        tracing::info!(webhook = %registration.webhook_url, "Webhook registered");
        tracing::info!("Access token obtained");

        Ok(registration)
    }
}
