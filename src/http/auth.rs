//! Bearer header selection.

use serde::Deserialize;

use crate::model::{Role, SessionUser};

/// Literal token the backend accepts for anonymous, read-only access.
pub const GUEST_TOKEN: &str = "guest";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Credential attached to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthHeader {
    Guest,
    Bearer(SecureString),
}

impl AuthHeader {
    /// Pick the credential for the current session.
    ///
    /// Guests always get the literal guest token, whatever token may still
    /// be cached on the session. No session, or a session without a token,
    /// falls back to guest as well.
    pub fn for_session(user: Option<&SessionUser>) -> Self {
        match user {
            Some(user) if user.role != Role::Guest => match &user.access_token {
                Some(token) if !token.expose().is_empty() => AuthHeader::Bearer(token.clone()),
                _ => AuthHeader::Guest,
            },
            _ => AuthHeader::Guest,
        }
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        match self {
            AuthHeader::Guest => format!("Bearer {}", GUEST_TOKEN),
            AuthHeader::Bearer(token) => format!("Bearer {}", token.expose()),
        }
    }
}
