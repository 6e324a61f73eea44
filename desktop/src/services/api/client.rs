//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! All requests flow through one dispatch path so credential attachment,
//! error classification, and payload decoding happen in exactly one place:
//!
//! 1. Attach `Authorization: Bearer <credential>` when the injected
//!    [`SessionStore`] holds one; requests without a credential go out
//!    unauthenticated.
//! 2. Transport failures become [`ApiError::Request`].
//! 3. Non-2xx statuses are classified: a 401 resets the session as a side
//!    effect and becomes [`ApiError::Auth`]; anything else becomes
//!    [`ApiError::Request`] carrying the most specific server-provided text.
//! 4. 2xx bodies decode through [`ApiPayload`], an explicit tagged variant
//!    covering the two shapes the server produces: a bare value, or the
//!    `{success, issue?, message?, data?}` envelope. An envelope with
//!    `success: false` becomes [`ApiError::Domain`] even on a 2xx status.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared::dto::response::Envelope;

use crate::core::error::{ApiError, Result};
use crate::core::service::ApiService;
use crate::session::SessionStore;

/// HTTP client for communicating with the backend API server.
///
/// Holds a connection pool, the configured base URL, and the injected
/// session handle it reads credentials from (and resets on a 401).
pub struct ApiClient {
    pub(crate) http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a new API client against `base_url`.
    ///
    /// The client is configured with a 10 second timeout to prevent freezing.
    pub fn new(base_url: String, session: SessionStore) -> Self {
        // Create client with 10 second timeout to prevent freezing
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url,
            session,
        }
    }

    /// Full URL for an API path, e.g. `url("/tweets")`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send a request and decode its payload as `T`.
    pub(crate) async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.send_checked(request).await?;
        decode_payload(&body)
    }

    /// Send a request whose endpoint declares no payload (logout, delete).
    ///
    /// A 2xx body is ignored except for an envelope's success flag, which is
    /// still honored when one is present.
    pub(crate) async fn dispatch_unit(&self, request: RequestBuilder) -> Result<()> {
        let body = self.send_checked(request).await?;
        if let Ok(envelope) = serde_json::from_slice::<Envelope<serde_json::Value>>(&body) {
            if !envelope.success {
                return Err(ApiError::Domain(
                    envelope.reason().unwrap_or("Something went wrong").to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Attach the bearer credential, send, and surface non-2xx as errors.
    async fn send_checked(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Network error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .bytes()
                .await
                .ok()
                .and_then(|bytes| serde_json::from_slice::<ErrorBody>(&bytes).ok());
            return Err(self.classify_failure(status, body));
        }

        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| ApiError::Request(format!("Network error: {}", e)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.credential() {
            Some(credential) => request.header("Authorization", format!("Bearer {}", credential)),
            None => request,
        }
    }

    /// Map a non-2xx status to the error taxonomy.
    ///
    /// A 401 from *any* call clears the session before the failure reaches
    /// the caller, so an expired token cannot keep a stale identity alive.
    fn classify_failure(&self, status: StatusCode, body: Option<ErrorBody>) -> ApiError {
        let reason = body.and_then(|b| b.issue.or(b.message));

        if status == StatusCode::UNAUTHORIZED {
            tracing::info!("Received 401, clearing session");
            self.session.reset();
            ApiError::Auth(reason.unwrap_or_else(|| "Unauthenticated".to_string()))
        } else {
            tracing::warn!(status = status.as_u16(), "Request failed");
            ApiError::Request(
                reason.unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
            )
        }
    }
}

/// The two payload shapes a 2xx response can carry, decided once here rather
/// than by per-call-site shape sniffing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiPayload<T> {
    Enveloped(Envelope<T>),
    Raw(T),
}

/// Lenient failure-body shape: non-2xx responses may carry the envelope
/// fields or a plain `{message}` object.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    issue: Option<String>,
    message: Option<String>,
}

/// Decode a 2xx body as `T`.
///
/// An empty body decodes as JSON `null`, so `Option<T>` targets resolve to
/// `None` (the current-user probe returns an empty body for a dead session).
pub(crate) fn decode_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let body = if body.iter().all(|b| b.is_ascii_whitespace()) {
        b"null" as &[u8]
    } else {
        body
    };

    match serde_json::from_slice::<ApiPayload<T>>(body) {
        Ok(ApiPayload::Enveloped(envelope)) => {
            if envelope.success {
                envelope
                    .data
                    .ok_or_else(|| ApiError::Request("Response envelope missing data".to_string()))
            } else {
                Err(ApiError::Domain(
                    envelope.reason().unwrap_or("Something went wrong").to_string(),
                ))
            }
        }
        Ok(ApiPayload::Raw(value)) => Ok(value),
        Err(e) => Err(ApiError::Request(format!("Failed to parse response: {}", e))),
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(
        &self,
        request: shared::dto::auth::LoginRequest,
    ) -> Result<shared::dto::auth::AuthResponse> {
        super::auth::login(self, request).await
    }

    async fn register(
        &self,
        request: shared::dto::auth::RegisterRequest,
    ) -> Result<shared::dto::auth::AuthResponse> {
        super::auth::register(self, request).await
    }

    async fn logout(&self) -> Result<()> {
        super::auth::logout(self).await
    }

    async fn current_user(&self) -> Result<Option<shared::dto::auth::UserInfo>> {
        super::auth::current_user(self).await
    }

    async fn feed(&self) -> Result<Vec<shared::dto::tweets::Tweet>> {
        super::tweets::feed(self).await
    }

    async fn create_tweet(&self, body: String) -> Result<shared::dto::tweets::Tweet> {
        super::tweets::create_tweet(self, body).await
    }

    async fn update_tweet(&self, id: i64, body: String) -> Result<shared::dto::tweets::Tweet> {
        super::tweets::update_tweet(self, id, body).await
    }

    async fn delete_tweet(&self, id: i64) -> Result<()> {
        super::tweets::delete_tweet(self, id).await
    }

    async fn toggle_like(&self, id: i64) -> Result<shared::dto::tweets::LikeToggle> {
        super::tweets::toggle_like(self, id).await
    }

    async fn toggle_retweet(&self, id: i64) -> Result<shared::dto::tweets::RetweetToggle> {
        super::tweets::toggle_retweet(self, id).await
    }
}
