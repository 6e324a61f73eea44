//! # Utility Functions
//!
//! Shared utility functions used across the desktop application.
//!
//! ## Modules
//!
//! - **[`validation`]**: Form input validation (email, passwords, tweet body)
//! - **[`runtime`]**: The Tokio runtime the UI thread enters at startup
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate display helpers (initials, timestamps)
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
