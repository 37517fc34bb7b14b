//! Infrastructure Layer
//!
//! Wire DTOs and the reqwest-backed hiring API gateway.

pub mod dto;
pub mod http;
