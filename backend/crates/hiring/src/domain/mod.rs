//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (CandidateIdentity, WebhookRegistration, SubmissionPayload)
//! - Domain value objects (AccessToken, QuestionParity)
//! - Domain services (answer selection)
//! - Gateway trait (remote hiring API interface)

pub mod entities;
pub mod gateway;
pub mod services;
pub mod value_objects;
