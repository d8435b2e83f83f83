//! HTTP client adapter for the REST backend.
//!
//! Joins resource paths onto the configured base URL, attaches the bearer
//! header chosen from the session, and folds transport failures, error
//! responses and expired sessions into one [`ApiError`].

mod auth;
mod client;
mod error;
pub mod routes;

pub use auth::{AuthHeader, SecureString, GUEST_TOKEN};
pub use client::{ApiClient, UnauthorizedHook};
pub(crate) use client::decode_body;
pub use error::{
    normalize_error_body, ApiError, DECODE_ERROR, NETWORK_ERROR, UNAUTHORIZED_MESSAGE,
};
