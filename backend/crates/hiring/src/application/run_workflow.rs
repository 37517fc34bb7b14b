//! Run Workflow Use Case
//!
//! Drives the single run: register, select the answer, submit.
//!
//! ```text
//! Start --register--> Registered --select--> AnswerComputed --submit--> Submitted
//!   |                     |
//!   +-------> Failed <----+
//! ```
//!
//! `execute` is infallible. Submission failures do not fail the run.

use std::fmt;
use std::sync::Arc;

use crate::application::config::HiringConfig;
use crate::application::register_webhook::RegisterWebhookUseCase;
use crate::application::submit_solution::{SubmissionStatus, SubmitSolutionUseCase};
use crate::domain::entities::CandidateIdentity;
use crate::domain::gateway::HiringGateway;
use crate::domain::services::select_answer;
use crate::error::HiringError;

/// Workflow states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Start,
    Registered,
    AnswerComputed,
    Submitted,
    Failed,
}

impl WorkflowStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStage::Start => "start",
            WorkflowStage::Registered => "registered",
            WorkflowStage::AnswerComputed => "answer_computed",
            WorkflowStage::Submitted => "submitted",
            WorkflowStage::Failed => "failed",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of a run
#[derive(Debug)]
pub enum WorkflowOutcome {
    /// Submission was attempted; `submission` says whether the webhook accepted it
    Submitted {
        final_query: String,
        submission: SubmissionStatus,
    },
    /// Run halted before submission; `stage` is the last state reached
    Failed {
        stage: WorkflowStage,
        error: HiringError,
    },
}

impl WorkflowOutcome {
    /// Terminal state of the run
    pub fn stage(&self) -> WorkflowStage {
        match self {
            WorkflowOutcome::Submitted { .. } => WorkflowStage::Submitted,
            WorkflowOutcome::Failed { .. } => WorkflowStage::Failed,
        }
    }

    /// Top-level log of the run result
    pub fn log(&self) {
        match self {
            WorkflowOutcome::Submitted { submission, .. } => {
                tracing::info!(
                    accepted = submission.is_accepted(),
                    "Submission completed"
                );
            }
            WorkflowOutcome::Failed { stage, error } => {
                error.log(&format!("Hiring workflow failed after stage `{stage}`"));
            }
        }
    }
}

/// Run Workflow Use Case
pub struct RunWorkflowUseCase<G>
where
    G: HiringGateway,
{
    register: RegisterWebhookUseCase<G>,
    submit: SubmitSolutionUseCase<G>,
    config: Arc<HiringConfig>,
}

impl<G> RunWorkflowUseCase<G>
where
    G: HiringGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<HiringConfig>) -> Self {
        Self {
            register: RegisterWebhookUseCase::new(gateway.clone()),
            submit: SubmitSolutionUseCase::new(gateway),
            config,
        }
    }

    pub async fn execute(&self, candidate: &CandidateIdentity) -> WorkflowOutcome {
        tracing::info!("Starting hiring workflow");

        let mut stage = WorkflowStage::Start;

        let registration = match self.register.execute(candidate).await {
            Ok(registration) => registration,
            Err(error) => return WorkflowOutcome::Failed { stage, error },
        };
        stage = WorkflowStage::Registered;
        tracing::debug!(stage = %stage, "Workflow transition");

        let final_query =
            match select_answer(&candidate.registration_number, &self.config.answers) {
                Ok(query) => query.to_string(),
                Err(error) => return WorkflowOutcome::Failed { stage, error },
            };
        stage = WorkflowStage::AnswerComputed;
        tracing::debug!(stage = %stage, "Workflow transition");
        tracing::info!(final_query = %final_query, "Computed SQL query");

        let submission = self.submit.execute(&registration, &final_query).await;
        tracing::debug!(stage = %WorkflowStage::Submitted, "Workflow transition");

        WorkflowOutcome::Submitted {
            final_query,
            submission,
        }
    }
}
