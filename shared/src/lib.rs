//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the MiniTweet desktop client
//! and the backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and identity DTOs
//!   - **[`dto::tweets`]**: Tweet, feed, and toggle DTOs
//!   - **[`dto::response`]**: The optional response envelope
//! - **[`utils`]**: Shared display helpers (author initials, timestamps)
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and on the wire, with one
//!   exception: the like/retweet toggle payloads use camelCase count keys
//!   (`likesCount`, `retweetsCount`) and are mapped with
//!   `#[serde(rename_all = "camelCase")]`.
//! - Optional envelope fields are omitted from JSON when `None`
//!   (`#[serde(skip_serializing_if = "Option::is_none")]`).
//! - Timestamps are RFC 3339 strings, parsed into `chrono::DateTime<Utc>`.
//!
//! ## Usage in the client
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, AuthResponse};
//!
//! let request = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: AuthResponse = client
//!     .post("http://localhost:8000/api/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
