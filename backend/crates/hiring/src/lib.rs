//! Hiring Qualifier Workflow
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, answer selection, gateway trait
//! - `application/` - Use cases (register, submit, run workflow) and configuration
//! - `infra/` - Wire DTOs and the reqwest gateway
//!
//! ## Workflow
//! 1. Register the candidate and receive a webhook URL and access token
//! 2. Select one of two canned SQL answers from the registration number parity
//! 3. Submit the answer to the webhook with the token in `Authorization`
//!
//! A run never propagates an error: every failure ends up in a logged
//! [`WorkflowOutcome`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::HiringConfig;
pub use application::run_workflow::{RunWorkflowUseCase, WorkflowOutcome, WorkflowStage};
pub use application::submit_solution::SubmissionStatus;
pub use domain::entities::{AnswerSheet, CandidateIdentity, WebhookRegistration};
pub use domain::gateway::HiringGateway;
pub use error::{HiringError, HiringResult};
pub use infra::http::HttpHiringGateway;
