//! HTTP Gateway Implementation
//!
//! `HiringGateway` over a shared `reqwest::Client`. Non-2xx responses are
//! errors, matching the behavior of the hiring API's reference client.

use platform::http::{HttpError, ensure_success};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use zeroize::Zeroizing;

use crate::application::config::HiringConfig;
use crate::domain::entities::{CandidateIdentity, SubmissionPayload, WebhookRegistration};
use crate::domain::gateway::HiringGateway;
use crate::domain::value_objects::{AccessToken, AuthScheme};
use crate::error::{HiringError, HiringResult};
use crate::infra::dto::{GenerateWebhookRequest, GenerateWebhookResponse, SubmitSolutionRequest};

/// reqwest-backed hiring API gateway
#[derive(Clone)]
pub struct HttpHiringGateway {
    client: Client,
    registration_url: String,
    auth_scheme: AuthScheme,
}

impl HttpHiringGateway {
    pub fn new(client: Client, config: &HiringConfig) -> Self {
        Self {
            client,
            registration_url: config.registration_url.clone(),
            auth_scheme: config.auth_scheme,
        }
    }

    /// Build the client from the configuration's timeout settings
    pub fn from_config(config: &HiringConfig) -> Result<Self, HttpError> {
        let client = platform::http::build_client(&config.http_client_config())?;
        Ok(Self::new(client, config))
    }
}

impl HiringGateway for HttpHiringGateway {
    async fn generate_webhook(
        &self,
        candidate: &CandidateIdentity,
    ) -> HiringResult<WebhookRegistration> {
        let request = GenerateWebhookRequest::from(candidate);

        tracing::debug!(url = %self.registration_url, "POST generateWebhook");
        let response = self
            .client
            .post(&self.registration_url)
            .json(&request)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        // Decoded from text so a wrong Content-Type does not matter.
        // The body carries the access token.
        let body = Zeroizing::new(response.text().await?);
        let parsed: GenerateWebhookResponse = serde_json::from_str(&body)?;
        WebhookRegistration::try_from(parsed)
    }

    async fn submit_solution(
        &self,
        webhook_url: &str,
        access_token: &AccessToken,
        payload: &SubmissionPayload,
    ) -> HiringResult<String> {
        let request = SubmitSolutionRequest::from(payload);

        let header = self.auth_scheme.header_value(access_token);
        let mut authorization =
            HeaderValue::from_str(&header).map_err(|_| HiringError::InvalidAccessToken)?;
        authorization.set_sensitive(true);

        tracing::debug!(url = %webhook_url, scheme = ?self.auth_scheme, "POST webhook");
        let response = self
            .client
            .post(webhook_url)
            .header(AUTHORIZATION, authorization)
            .json(&request)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn gateway_for(server: &Server, auth_scheme: AuthScheme) -> HttpHiringGateway {
        let config = HiringConfig {
            registration_url: format!("{}/hiring/generateWebhook/JAVA", server.url()),
            auth_scheme,
            ..Default::default()
        };
        HttpHiringGateway::from_config(&config).unwrap()
    }

    fn candidate() -> CandidateIdentity {
        CandidateIdentity::new("John Doe", "REG12347", "john@example.com")
    }

    #[tokio::test]
    async fn test_generate_webhook_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/hiring/generateWebhook/JAVA")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "name": "John Doe",
                "regNo": "REG12347",
                "email": "john@example.com"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"webhook": "https://example.com/testWebhook/JAVA", "accessToken": "jwt-token"}"#)
            .create_async()
            .await;

        let gateway = gateway_for(&server, AuthScheme::Raw);
        let registration = gateway.generate_webhook(&candidate()).await.unwrap();

        assert_eq!(registration.webhook_url, "https://example.com/testWebhook/JAVA");
        assert_eq!(registration.access_token.expose(), "jwt-token");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_webhook_partial_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/hiring/generateWebhook/JAVA")
            .with_status(200)
            .with_body(r#"{"webhook": "https://example.com/testWebhook/JAVA"}"#)
            .create_async()
            .await;

        let gateway = gateway_for(&server, AuthScheme::Raw);
        let result = gateway.generate_webhook(&candidate()).await;
        assert!(matches!(result, Err(HiringError::MissingField("accessToken"))));
    }

    #[tokio::test]
    async fn test_generate_webhook_error_status() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/hiring/generateWebhook/JAVA")
            .with_status(400)
            .with_body("bad request")
            .create_async()
            .await;

        let gateway = gateway_for(&server, AuthScheme::Raw);
        let result = gateway.generate_webhook(&candidate()).await;
        assert!(matches!(
            result,
            Err(HiringError::Http(HttpError::UnexpectedStatus { status: 400, .. }))
        ));
    }

    #[tokio::test]
    async fn test_generate_webhook_malformed_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/hiring/generateWebhook/JAVA")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let gateway = gateway_for(&server, AuthScheme::Raw);
        let result = gateway.generate_webhook(&candidate()).await;
        assert!(matches!(result, Err(HiringError::Decode(_))));
    }

    #[tokio::test]
    async fn test_submit_solution_raw_authorization() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/testWebhook/JAVA")
            .match_header("authorization", "jwt-token")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"finalQuery": "SELECT 1"})))
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let gateway = gateway_for(&server, AuthScheme::Raw);
        let response = gateway
            .submit_solution(
                &format!("{}/testWebhook/JAVA", server.url()),
                &AccessToken::new("jwt-token"),
                &SubmissionPayload::new("SELECT 1"),
            )
            .await
            .unwrap();

        assert_eq!(response, r#"{"success": true}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_submit_solution_bearer_authorization() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/testWebhook/JAVA")
            .match_header("authorization", "Bearer jwt-token")
            .with_status(200)
            .create_async()
            .await;

        let gateway = gateway_for(&server, AuthScheme::Bearer);
        let result = gateway
            .submit_solution(
                &format!("{}/testWebhook/JAVA", server.url()),
                &AccessToken::new("jwt-token"),
                &SubmissionPayload::new("SELECT 1"),
            )
            .await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_submit_solution_unauthorized() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/testWebhook/JAVA")
            .with_status(401)
            .create_async()
            .await;

        let gateway = gateway_for(&server, AuthScheme::Raw);
        let result = gateway
            .submit_solution(
                &format!("{}/testWebhook/JAVA", server.url()),
                &AccessToken::new("expired"),
                &SubmissionPayload::new("SELECT 1"),
            )
            .await;

        assert!(matches!(
            result,
            Err(HiringError::Http(HttpError::UnexpectedStatus { status: 401, .. }))
        ));
    }

    #[tokio::test]
    async fn test_submit_solution_rejects_token_unfit_for_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/testWebhook/JAVA")
            .expect(0)
            .create_async()
            .await;

        let gateway = gateway_for(&server, AuthScheme::Raw);
        let result = gateway
            .submit_solution(
                &format!("{}/testWebhook/JAVA", server.url()),
                &AccessToken::new("jwt\ntoken"),
                &SubmissionPayload::new("SELECT 1"),
            )
            .await;

        assert!(matches!(result, Err(HiringError::InvalidAccessToken)));
        mock.assert_async().await;
    }
}
