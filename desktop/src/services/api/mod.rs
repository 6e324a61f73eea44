//! # Backend API Client Module
//!
//! HTTP client for the MiniTweet REST API. Handles authentication, the feed,
//! and tweet mutations, normalizing every outcome into
//! [`crate::core::error::ApiError`].
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and the single dispatch path
//! ├── auth.rs     - Authentication endpoints (login, register, logout, current user)
//! └── tweets.rs   - Feed and tweet mutation endpoints
//! ```
//!
//! ## Dispatch Path
//!
//! Every request flows through [`client::ApiClient`]'s dispatch: the bearer
//! credential is attached when the injected session holds one, transport and
//! HTTP failures are classified (a 401 resets the session before the caller
//! sees the error), and 2xx payloads are decoded through an explicit
//! bare-value / envelope variant decided once at this boundary.

pub mod auth;
pub mod client;
pub mod tweets;

pub use client::ApiClient;
