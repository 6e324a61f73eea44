//! Events flowing from spawned API tasks back to the frame loop.
//!
//! Tasks run on the Tokio runtime and must not touch the state lock or the
//! UI. They send one of these over the app channel instead, and
//! [`crate::app::App::on_tick`] drains the channel at the start of each
//! frame and applies the outcome.

use shared::dto::auth::{AuthResponse, UserInfo};
use shared::dto::tweets::{LikeToggle, RetweetToggle, Tweet};

use crate::core::ApiError;

/// Completed async work, tagged with enough context to apply it.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Startup (or post-login) identity probe finished. `Ok(None)` means
    /// the server answered but no longer recognizes the credential.
    SessionProbed(Result<Option<UserInfo>, ApiError>),
    LoginResult(Result<AuthResponse, ApiError>),
    RegisterResult(Result<AuthResponse, ApiError>),
    /// Logout round trip done. Carries no result: the local session is
    /// discarded whether or not the server call succeeded.
    LogoutFinished,

    FeedResult(Result<Vec<Tweet>, ApiError>),
    /// The created/updated tweet is not carried: those flows refetch the
    /// feed instead of patching it, so only success or failure matters.
    TweetCreated(Result<(), ApiError>),
    TweetUpdated(Result<(), ApiError>),
    TweetDeleted {
        id: i64,
        result: Result<(), ApiError>,
    },
    LikeToggled {
        id: i64,
        result: Result<LikeToggle, ApiError>,
    },
    RetweetToggled {
        id: i64,
        result: Result<RetweetToggle, ApiError>,
    },
}
