//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: The unified remote-call error (`ApiError`, `Result<T>`)
//! - **[`service`]**: The API service trait the app depends on (`ApiService`)
//!
//! ## Error Handling
//!
//! Every remote call resolves to a single [`ApiError`] value:
//!
//! ```rust
//! use desktop::core::error::ApiError;
//!
//! let err = ApiError::Domain("Tweet too long".to_string());
//! assert_eq!(err.to_string(), "Tweet too long");
//! ```
//!
//! ## Dependency Injection
//!
//! The app is constructed against `Arc<dyn ApiService>` rather than the
//! concrete client, so tests substitute a mock:
//!
//! ```rust,ignore
//! // In production
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(base_url, session.clone()));
//!
//! // In tests
//! let api: Arc<dyn ApiService> = Arc::new(MockApi::default());
//! ```

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{ApiError, Result};
pub use service::ApiService;
