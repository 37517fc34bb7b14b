//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and the hiring API gateway.

pub mod config;
pub mod register_webhook;
pub mod run_workflow;
pub mod submit_solution;

// Re-exports
pub use config::HiringConfig;
pub use register_webhook::RegisterWebhookUseCase;
pub use run_workflow::{RunWorkflowUseCase, WorkflowOutcome, WorkflowStage};
pub use submit_solution::{SubmissionStatus, SubmitSolutionUseCase};
