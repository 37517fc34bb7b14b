//! Wire DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CandidateIdentity, SubmissionPayload, WebhookRegistration};
use crate::domain::value_objects::AccessToken;
use crate::error::{HiringError, HiringResult};

/// Request for POST /hiring/generateWebhook/JAVA
#[derive(Debug, Clone, Serialize)]
pub struct GenerateWebhookRequest<'a> {
    pub name: &'a str,
    #[serde(rename = "regNo")]
    pub reg_no: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a CandidateIdentity> for GenerateWebhookRequest<'a> {
    fn from(candidate: &'a CandidateIdentity) -> Self {
        Self {
            name: &candidate.name,
            reg_no: &candidate.registration_number,
            email: &candidate.email,
        }
    }
}

/// Response for POST /hiring/generateWebhook/JAVA
///
/// Fields are optional on the wire; presence is checked on conversion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWebhookResponse {
    #[serde(default)]
    pub webhook: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl TryFrom<GenerateWebhookResponse> for WebhookRegistration {
    type Error = HiringError;

    fn try_from(response: GenerateWebhookResponse) -> HiringResult<Self> {
        let webhook = non_blank(response.webhook).ok_or(HiringError::MissingField("webhook"))?;
        let access_token =
            non_blank(response.access_token).ok_or(HiringError::MissingField("accessToken"))?;
        Ok(WebhookRegistration::new(webhook, AccessToken::new(access_token)))
    }
}

/// Request body posted to the webhook
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSolutionRequest<'a> {
    pub final_query: &'a str,
}

impl<'a> From<&'a SubmissionPayload> for SubmitSolutionRequest<'a> {
    fn from(payload: &'a SubmissionPayload) -> Self {
        Self {
            final_query: &payload.final_query,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
