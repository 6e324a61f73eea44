//! # Common Error Types
//!
//! Consolidated error handling for the desktop client.
//!
//! Every remote call resolves to a single [`ApiError`] so call sites handle
//! failures uniformly; the variant records *why* the call failed:
//!
//! - **Auth**: the server rejected the credential (HTTP 401). By the time a
//!   caller sees this, the gateway has already reset the session.
//! - **Domain**: business-rule rejection signalled through the response
//!   envelope (`success: false`), e.g. "Email already taken". Can arrive on
//!   a 2xx transport status.
//! - **Request**: network failure, undecodable response, or any other
//!   non-401 HTTP error.
//!
//! `Display` renders the bare human-readable message with no variant prefix,
//! so a rejection like "Tweet too long" reaches the user verbatim in toasts
//! and inline form errors.

use thiserror::Error;

/// Unified error for every remote call issued by the client.
///
/// `Clone + PartialEq` so results can ride inside [`crate::app::AppEvent`]
/// payloads and be asserted in tests.
///
/// # Example
///
/// ```rust
/// use desktop::core::error::ApiError;
///
/// let err = ApiError::Domain("Tweet too long".to_string());
/// assert_eq!(err.message(), "Tweet too long");
/// assert_eq!(err.to_string(), "Tweet too long");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP 401. The session has already been reset by the gateway.
    #[error("{0}")]
    Auth(String),

    /// Envelope `success: false` - business-rule rejection; session untouched.
    #[error("{0}")]
    Domain(String),

    /// Transport failure, parse failure, or non-401 HTTP error.
    #[error("{0}")]
    Request(String),
}

impl ApiError {
    /// The human-readable message, regardless of category.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Auth(msg) | ApiError::Domain(msg) | ApiError::Request(msg) => msg,
        }
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
