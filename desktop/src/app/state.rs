//! Central application state shared between the frame loop, the input
//! handlers, and the async task results.
//!
//! Everything lives behind one `Arc<RwLock<AppState>>` owned by
//! [`crate::app::App`]. Handlers take short write locks to record intent,
//! spawned tasks never touch the lock at all (they send events instead),
//! and the frame tick applies those events back under the same lock.

use std::collections::HashSet;

use shared::dto::auth::UserInfo;
use shared::dto::tweets::Tweet;

use crate::app::cache::Resource;
use crate::utils::validation::MAX_TWEET_LEN;

/// Top-level screens the window can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Feed,
}

impl Screen {
    /// Screens that must never render without an authenticated session.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::Feed)
    }

    /// Screens that make no sense once a session exists.
    pub fn auth_only(&self) -> bool {
        matches!(self, Screen::Login | Screen::Register)
    }
}

/// Sign-in form buffer.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Inline error shown above the submit button.
    pub error: Option<String>,
    pub submitting: bool,
}

/// Registration form buffer.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub error: Option<String>,
    pub submitting: bool,
}

/// Compose box at the top of the feed.
#[derive(Debug, Clone, Default)]
pub struct ComposeForm {
    pub body: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl ComposeForm {
    /// Characters left before the cap, negative once over it. Counts the
    /// trimmed body, which is what actually gets submitted.
    pub fn remaining(&self) -> i64 {
        MAX_TWEET_LEN as i64 - self.body.trim().chars().count() as i64
    }
}

/// Edit dialog for one of the viewer's own tweets.
#[derive(Debug, Clone)]
pub struct EditForm {
    pub tweet_id: i64,
    pub body: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl EditForm {
    pub fn new(tweet: &Tweet) -> Self {
        Self {
            tweet_id: tweet.id,
            body: tweet.body.clone(),
            error: None,
            submitting: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient toast queued for the notification widget to pick up.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Everything the frame needs to render and the handlers need to mutate.
///
/// Cloned once per frame into a render snapshot so no lock is held while
/// widgets draw or call back into handlers.
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    /// False until the startup session probe has reported back. The window
    /// renders a neutral loading frame instead of guessing a screen.
    pub session_resolved: bool,

    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    pub compose_form: ComposeForm,
    /// Present while the edit dialog is open.
    pub editor: Option<EditForm>,
    /// Tweet id awaiting the delete confirmation dialog.
    pub confirm_delete: Option<i64>,

    pub feed: Resource<Vec<Tweet>>,
    /// Resolved viewer identity. `Some(None)` is a settled answer meaning
    /// the server no longer recognizes the stored credential.
    pub current_user: Resource<Option<UserInfo>>,

    /// Tweet ids with a like toggle in flight. Guards double-fires.
    pub pending_likes: HashSet<i64>,
    pub pending_retweets: HashSet<i64>,
    pub pending_deletes: HashSet<i64>,

    /// Toasts queued this tick, drained by the notification widget.
    pub pending_notices: Vec<Notice>,
    pub logging_out: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_screen: Screen::Login,
            session_resolved: false,
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            compose_form: ComposeForm::default(),
            editor: None,
            confirm_delete: None,
            feed: Resource::default(),
            current_user: Resource::default(),
            pending_likes: HashSet::new(),
            pending_retweets: HashSet::new(),
            pending_deletes: HashSet::new(),
            pending_notices: Vec::new(),
            logging_out: false,
        }
    }
}

impl AppState {
    /// Take the queued toasts, leaving the queue empty.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending_notices)
    }

    /// Drop everything scoped to the signed-in viewer. The feed carries
    /// per-viewer liked/retweeted flags, so none of it may survive into
    /// another session. Runs on logout and again when a new session is
    /// established, because a 401 ends a session without a logout.
    pub fn reset_viewer_data(&mut self) {
        self.feed.clear();
        self.current_user.clear();
        self.compose_form = ComposeForm::default();
        self.editor = None;
        self.confirm_delete = None;
        self.pending_likes.clear();
        self.pending_retweets.clear();
        self.pending_deletes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_auth_classification() {
        assert!(Screen::Feed.requires_auth());
        assert!(!Screen::Login.requires_auth());
        assert!(Screen::Login.auth_only());
        assert!(Screen::Register.auth_only());
        assert!(!Screen::Feed.auth_only());
    }

    #[test]
    fn test_compose_remaining_counts_chars_not_bytes() {
        let mut form = ComposeForm::default();
        assert_eq!(form.remaining(), 280);

        form.body = "é".repeat(280);
        assert_eq!(form.remaining(), 0);

        form.body.push('x');
        assert_eq!(form.remaining(), -1);
    }

    #[test]
    fn test_compose_remaining_ignores_surrounding_whitespace() {
        let form = ComposeForm {
            body: format!("  {}  ", "a".repeat(280)),
            ..Default::default()
        };
        assert_eq!(form.remaining(), 0);
    }

    #[test]
    fn test_default_state_starts_unresolved_on_login() {
        let state = AppState::default();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.session_resolved);
        assert!(state.feed.data().is_none());
        assert!(state.pending_likes.is_empty());
    }

    #[test]
    fn test_drain_notices_empties_queue() {
        let mut state = AppState::default();
        state.pending_notices.push(Notice::success("Tweet posted"));
        state.pending_notices.push(Notice::error("Network error"));

        let drained = state.drain_notices();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "Tweet posted");
        assert!(state.pending_notices.is_empty());
    }

    #[test]
    fn test_reset_viewer_data_drops_cache_forms_and_dialogs() {
        let mut state = AppState::default();
        assert!(state.feed.begin_fetch());
        state.feed.resolve(Ok(Vec::new()));
        state.compose_form.body = "draft".to_string();
        state.confirm_delete = Some(4);
        state.pending_likes.insert(4);

        state.reset_viewer_data();

        assert!(state.feed.data().is_none());
        assert!(state.feed.needs_fetch());
        assert!(state.compose_form.body.is_empty());
        assert!(state.confirm_delete.is_none());
        assert!(state.pending_likes.is_empty());
    }
}
