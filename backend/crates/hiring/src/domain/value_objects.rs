//! Domain Value Objects
//!
//! Immutable value types for the hiring domain.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Opaque credential returned alongside the webhook
///
/// ## Security
/// - Zeroized on drop, as are the response body and header string it is
///   read from and written to
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted, so the token never reaches the logs
///
/// The HTTP client keeps its own copy inside the outgoing request headers
/// (marked sensitive); that buffer is outside this type's control.
#[derive(Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw token value, for building the `Authorization` header only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// Parity of the registration number suffix, which decides the question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionParity {
    Even,
    Odd,
}

impl QuestionParity {
    pub fn of(value: i64) -> Self {
        if value % 2 == 0 {
            QuestionParity::Even
        } else {
            QuestionParity::Odd
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionParity::Even => "even",
            QuestionParity::Odd => "odd",
        }
    }
}

impl fmt::Display for QuestionParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the access token is placed in the `Authorization` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// Raw token value, no scheme prefix
    #[default]
    Raw,
    /// `Bearer <token>`
    Bearer,
}

impl AuthScheme {
    pub fn header_value(&self, token: &AccessToken) -> Zeroizing<String> {
        Zeroizing::new(match self {
            AuthScheme::Raw => token.expose().to_string(),
            AuthScheme::Bearer => format!("Bearer {}", token.expose()),
        })
    }
}

impl std::str::FromStr for AuthScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" | "none" => Ok(AuthScheme::Raw),
            "bearer" => Ok(AuthScheme::Bearer),
            other => Err(format!("unknown auth scheme `{other}` (expected raw or bearer)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_debug_redaction() {
        let token = AccessToken::new("eyJhbGciOi.secret");
        let debug_output = format!("{:?}", token);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
        assert_eq!(token.expose(), "eyJhbGciOi.secret");
    }

    #[test]
    fn test_parity_negative_values() {
        assert_eq!(QuestionParity::of(-4), QuestionParity::Even);
        assert_eq!(QuestionParity::of(-5), QuestionParity::Odd);
        assert_eq!(QuestionParity::of(0), QuestionParity::Even);
    }

    #[test]
    fn test_auth_scheme_header_value() {
        let token = AccessToken::new("tok123");
        assert_eq!(AuthScheme::Raw.header_value(&token).as_str(), "tok123");
        assert_eq!(
            AuthScheme::Bearer.header_value(&token).as_str(),
            "Bearer tok123"
        );
        assert_eq!(AuthScheme::default(), AuthScheme::Raw);
    }

    #[test]
    fn test_auth_scheme_from_str() {
        assert_eq!("RAW".parse::<AuthScheme>(), Ok(AuthScheme::Raw));
        assert_eq!(" bearer ".parse::<AuthScheme>(), Ok(AuthScheme::Bearer));
        assert!("basic".parse::<AuthScheme>().is_err());
    }
}
