//! Qualifier Entry Point
//!
//! One-shot startup task: registers the candidate with the hiring API,
//! selects the SQL answer and submits it. Uses `anyhow` for bootstrap
//! errors only; workflow errors are `hiring::HiringError` and end up in
//! the logged outcome.
//!
//! The process always exits 0: every failure is visible in the logs only.

use std::sync::Arc;

use anyhow::Context;
use hiring::{CandidateIdentity, HiringConfig, HttpHiringGateway, RunWorkflowUseCase};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qualifier=info,hiring=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (workflow, candidate) = match bootstrap() {
        Ok(parts) => parts,
        Err(e) => {
            let error = format!("{e:#}");
            tracing::error!(error = %error, "Hiring workflow bootstrap failed");
            return Ok(());
        }
    };

    // Spawned so a panic inside the workflow is caught as a JoinError
    let run = tokio::spawn(async move { workflow.execute(&candidate).await });

    match run.await {
        Ok(outcome) => outcome.log(),
        Err(e) => tracing::error!(error = %e, "Hiring workflow aborted"),
    }

    Ok(())
}

/// Load configuration and wire the gateway into the workflow
fn bootstrap() -> anyhow::Result<(RunWorkflowUseCase<HttpHiringGateway>, CandidateIdentity)> {
    let candidate = CandidateIdentity::from_env().context("Failed to load candidate identity")?;
    let config = HiringConfig::from_env().context("Failed to load hiring configuration")?;

    tracing::info!(
        registration_url = %config.registration_url,
        timeout_secs = config.request_timeout.as_secs(),
        auth_scheme = ?config.auth_scheme,
        "Configuration loaded"
    );

    let gateway =
        HttpHiringGateway::from_config(&config).context("Failed to create HTTP client")?;

    Ok((
        RunWorkflowUseCase::new(Arc::new(gateway), Arc::new(config)),
        candidate,
    ))
}
