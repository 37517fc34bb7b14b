//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Outbound HTTP client construction with bounded timeouts
//! - Response status handling
//! - Environment configuration helpers

pub mod config;
pub mod http;
