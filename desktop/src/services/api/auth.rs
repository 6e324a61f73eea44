//! # Authentication Endpoints
//!
//! Login, registration, logout, and the current-user probe.

use shared::dto::auth::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};

use super::client::ApiClient;
use crate::core::error::Result;

/// Exchange email + password for an identity and bearer token.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let result: Result<AuthResponse> = client
        .dispatch(client.http.post(client.url("/login")).json(&request))
        .await;

    match &result {
        Ok(response) => tracing::info!(
            user_id = response.user.id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Login successful"
        ),
        Err(e) => tracing::warn!(error = %e, "Login failed"),
    }
    result
}

/// Create an account and exchange credentials in one step.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: RegisterRequest) -> Result<AuthResponse> {
    let result: Result<AuthResponse> = client
        .dispatch(client.http.post(client.url("/register")).json(&request))
        .await;

    if let Err(e) = &result {
        tracing::warn!(error = %e, "Registration failed");
    }
    result
}

/// Invalidate the server-side session. Best-effort: the caller clears local
/// state regardless of this call's outcome.
pub async fn logout(client: &ApiClient) -> Result<()> {
    client
        .dispatch_unit(client.http.post(client.url("/logout")))
        .await
}

/// Probe the current identity. Resolves to `None` when the server answers
/// with an empty body, meaning it no longer recognizes the session.
pub async fn current_user(client: &ApiClient) -> Result<Option<UserInfo>> {
    client
        .dispatch(client.http.get(client.url("/user")))
        .await
}
