//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! [`ApiService`] is the seam between the app and the network: production code
//! injects the real [`crate::services::api::ApiClient`], tests inject a mock
//! with canned responses. The trait covers the full REST surface the client
//! consumes (see [`crate::services::api`]).

use async_trait::async_trait;
use shared::dto::auth::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use shared::dto::tweets::{LikeToggle, RetweetToggle, Tweet};

use super::error::Result;

/// Trait for API service operations.
///
/// This trait allows for dependency injection and mocking in tests. All
/// methods resolve to [`crate::core::error::ApiError`] on failure; the
/// credential is attached internally by the implementation, callers never
/// pass tokens.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Exchange email + password for an identity and bearer token
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse>;

    /// Create an account and exchange credentials in one step
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse>;

    /// Invalidate the server-side session (best-effort)
    async fn logout(&self) -> Result<()>;

    /// Fetch the current identity if the session is valid; `None` when the
    /// server no longer recognizes the session
    async fn current_user(&self) -> Result<Option<UserInfo>>;

    /// Fetch the feed list in server order
    async fn feed(&self) -> Result<Vec<Tweet>>;

    /// Create a tweet; the server assigns id and timestamps
    async fn create_tweet(&self, body: String) -> Result<Tweet>;

    /// Replace a tweet's body (author only)
    async fn update_tweet(&self, id: i64, body: String) -> Result<Tweet>;

    /// Delete a tweet (author only)
    async fn delete_tweet(&self, id: i64) -> Result<()>;

    /// Toggle the viewer's like; returns the authoritative count
    async fn toggle_like(&self, id: i64) -> Result<LikeToggle>;

    /// Toggle the viewer's retweet; returns the authoritative count
    async fn toggle_retweet(&self, id: i64) -> Result<RetweetToggle>;
}
