//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async task
//! handlers, the session store, and application state.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                  Main Thread (egui)                    │
//! │  App (orchestrator)                                    │
//! │  - on_tick() - drains events, gates route, schedules   │
//! │    stale fetches; called every frame                   │
//! │  - handle_*_click() - user action handlers             │
//! │                                                        │
//! │  State: Arc<RwLock<AppState>>  Session: SessionStore   │
//! └──────────────────────┬─────────────────────────────────┘
//!                        │ async_channel (unbounded)
//! ┌──────────────────────▼─────────────────────────────────┐
//! │               Async Tasks (Tokio)                      │
//! │  tasks::feed::fetch_feed, tasks::session::probe,       │
//! │  spawned API calls from handlers                       │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks never lock state. They send an [`AppEvent`] and the next frame's
//! `on_tick()` applies it under a short write lock, so every state change
//! lands between frames and results apply in arrival order.

mod cache;
mod event_handler;
mod events;
mod handlers;
mod navigation;
mod state;
mod tasks;

pub use cache::Resource;
pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::ApiService;
use crate::session::SessionStore;

/// Main application orchestrator.
///
/// Owns the shared state, the session store, the API service handle, and
/// both ends of the event channel. The window loop calls [`App::on_tick`]
/// once per frame and the action handlers in response to clicks; everything
/// else happens on the Tokio runtime.
pub struct App {
    /// Thread-safe shared application state. The UI takes short read locks
    /// to render; handlers and the event loop take short write locks.
    pub state: Arc<RwLock<AppState>>,

    /// Persistent session (viewer identity plus bearer credential). Shared
    /// with the API gateway, which clears it when the server answers 401.
    pub session: SessionStore,

    /// Backend endpoints behind a trait so tests can swap in a mock.
    api: Arc<dyn ApiService>,

    /// Receives async task results, polled non-blocking in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into spawned tasks for sending results back.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application around an API service and a loaded session.
    ///
    /// With no stored credential there is nothing to probe and the session
    /// is immediately resolved as signed-out. With one, the screen stays on
    /// a loading frame until the first probe round trip settles it.
    pub fn new(api: Arc<dyn ApiService>, session: SessionStore) -> Self {
        let (event_tx, event_rx) = unbounded();

        let mut state = AppState::default();
        state.session_resolved = session.credential().is_none();
        state.current_screen = navigation::entry_screen(session.is_authenticated());

        tracing::info!(
            resumed_session = session.credential().is_some(),
            "App initialized, event channel created"
        );

        App {
            state: Arc::new(RwLock::new(state)),
            session,
            api,
            event_rx,
            event_tx,
        }
    }

    /// Called every frame to process async results and schedule work.
    ///
    /// 1. Drains the event channel (non-blocking) and applies each result.
    /// 2. Re-resolves the current screen against the session, catching
    ///    sessions that died mid-flight (a 401 on any request).
    /// 3. Schedules fetches for stale resources. Claiming is idempotent,
    ///    so calling this every frame costs nothing while data is current.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        self.enforce_gate();
        self.schedule_fetches();
    }

    /// Apply one async result. Delegates to the event_handler module.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Keep the visible screen legal for the current session.
    ///
    /// Skipped while the startup probe is still unresolved: the window is
    /// showing the loading frame and no screen decision has been made yet.
    fn enforce_gate(&mut self) {
        let authenticated = self.session.is_authenticated();
        let mut state = self.state.write();
        if !state.session_resolved {
            return;
        }

        let resolved = navigation::resolve(state.current_screen, authenticated);
        if resolved != state.current_screen {
            tracing::info!(
                from = ?state.current_screen,
                to = ?resolved,
                "Route gate redirect"
            );
            state.current_screen = resolved;
        }
    }

    /// Fire fetch tasks for whatever is stale this frame.
    fn schedule_fetches(&self) {
        let (probe_wanted, feed_wanted) = {
            let state = self.state.read();
            let probe = self.session.credential().is_some() && state.current_user.needs_fetch();
            let feed = state.session_resolved
                && state.current_screen == Screen::Feed
                && self.session.is_authenticated()
                && state.feed.needs_fetch();
            (probe, feed)
        };

        if probe_wanted {
            tasks::session::probe_session(
                self.state.clone(),
                self.api.clone(),
                self.event_tx.clone(),
            );
        }
        if feed_wanted {
            tasks::feed::fetch_feed(self.state.clone(), self.api.clone(), self.event_tx.clone());
        }
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle login button click.
    pub fn handle_login_click(&mut self) {
        handlers::auth::handle_login_click(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
        );
    }

    /// Handle register button click.
    pub fn handle_register_click(&mut self) {
        handlers::auth::handle_register_click(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
        );
    }

    /// Handle logout button click.
    pub fn handle_logout_click(&mut self) {
        handlers::auth::handle_logout_click(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
        );
    }

    /// Handle a screen change request from the nav bar or auth links.
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), &self.session, screen);
    }

    /// Handle compose submit.
    pub fn handle_compose_submit(&mut self) {
        handlers::feed::handle_compose_submit(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
        );
    }

    /// Handle like button click on a tweet.
    pub fn handle_like_click(&mut self, tweet_id: i64) {
        handlers::feed::handle_like_click(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
            tweet_id,
        );
    }

    /// Handle retweet button click on a tweet.
    pub fn handle_retweet_click(&mut self, tweet_id: i64) {
        handlers::feed::handle_retweet_click(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
            tweet_id,
        );
    }

    /// Open the edit dialog for a tweet.
    pub fn handle_edit_open(&mut self, tweet_id: i64) {
        handlers::feed::handle_edit_open(self.state.clone(), tweet_id);
    }

    /// Close the edit dialog without saving.
    pub fn handle_edit_cancel(&mut self) {
        handlers::feed::handle_edit_cancel(self.state.clone());
    }

    /// Submit the edit dialog.
    pub fn handle_edit_submit(&mut self) {
        handlers::feed::handle_edit_submit(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
        );
    }

    /// Ask for delete confirmation on a tweet.
    pub fn handle_delete_request(&mut self, tweet_id: i64) {
        handlers::feed::handle_delete_request(self.state.clone(), tweet_id);
    }

    /// Dismiss the delete confirmation dialog.
    pub fn handle_delete_cancel(&mut self) {
        handlers::feed::handle_delete_cancel(self.state.clone());
    }

    /// Confirm the pending delete.
    pub fn handle_delete_confirm(&mut self) {
        handlers::feed::handle_delete_confirm(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
        );
    }

    /// Handle manual feed refresh.
    pub fn handle_refresh_click(&mut self) {
        handlers::feed::handle_refresh_click(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::mock::{sample_tweet, sample_user, MockApi};
    use shared::dto::auth::AuthResponse;
    use shared::dto::tweets::LikeToggle;
    use tempfile::TempDir;

    fn app_with(api: MockApi) -> (App, Arc<MockApi>, TempDir) {
        let dir = TempDir::new().unwrap();
        let session = SessionStore::load(dir.path().join("session.json"));
        let api = Arc::new(api);
        let app = App::new(api.clone(), session);
        (app, api, dir)
    }

    /// Authenticated app with a settled probe, parked on the feed screen.
    fn signed_in_app(api: MockApi) -> (App, Arc<MockApi>, TempDir) {
        let (app, api, dir) = app_with(api);
        let user = sample_user(1);
        app.session.set_auth(user.clone(), "token-1".to_string());
        {
            let mut state = app.state.write();
            state.session_resolved = true;
            state.current_screen = Screen::Feed;
            assert!(state.current_user.begin_fetch());
            state.current_user.resolve(Ok(Some(user)));
        }
        (app, api, dir)
    }

    // ========== Startup ==========

    #[tokio::test]
    async fn test_fresh_start_resolves_signed_out_without_probe() {
        let (mut app, api, _dir) = app_with(MockApi::default());

        {
            let state = app.state.read();
            assert!(state.session_resolved);
            assert_eq!(state.current_screen, Screen::Login);
        }

        app.on_tick();
        tokio::task::yield_now().await;

        // No credential, so nothing was probed.
        assert_eq!(api.calls_to("current_user"), 0);
        assert!(!app.state.read().current_user.is_fetching());
    }

    #[tokio::test]
    async fn test_resumed_session_probes_and_lands_on_feed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        // A previous run saved a session.
        SessionStore::load(&path).set_auth(sample_user(5), "saved-token".to_string());

        let api = MockApi {
            current_user: Ok(Some(sample_user(5))),
            ..Default::default()
        };
        let mut app = App::new(Arc::new(api), SessionStore::load(&path));

        // Until the probe answers, the screen decision is deferred.
        assert!(!app.state.read().session_resolved);

        app.on_tick();
        assert!(app.state.read().current_user.is_fetching());

        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        let state = app.state.read();
        assert!(state.session_resolved);
        assert_eq!(state.current_screen, Screen::Feed);
        assert!(app.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_resumed_session_rejected_by_server_lands_on_login() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        SessionStore::load(&path).set_auth(sample_user(5), "stale-token".to_string());

        let api = MockApi {
            current_user: Ok(None),
            ..Default::default()
        };
        let mut app = App::new(Arc::new(api), SessionStore::load(&path));

        app.on_tick();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        assert!(!app.session.is_authenticated());
        assert!(app.session.credential().is_none());
        assert_eq!(app.state.read().current_screen, Screen::Login);
    }

    // ========== Login flow ==========

    #[tokio::test]
    async fn test_login_flow_round_trip() {
        let api = MockApi {
            login: Ok(AuthResponse {
                user: sample_user(1),
                token: "fresh".to_string(),
            }),
            ..Default::default()
        };
        let (mut app, _api, _dir) = app_with(api);
        {
            let mut state = app.state.write();
            state.login_form.email = "jo@example.com".to_string();
            state.login_form.password = "password".to_string();
        }

        app.handle_login_click();
        assert!(app.state.read().login_form.submitting);

        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        assert!(app.session.is_authenticated());
        assert_eq!(app.session.credential().as_deref(), Some("fresh"));
        assert_eq!(app.state.read().current_screen, Screen::Feed);
    }

    #[tokio::test]
    async fn test_login_validation_failure_sends_nothing() {
        let (mut app, api, _dir) = app_with(MockApi::default());
        {
            let mut state = app.state.write();
            state.login_form.email = "not-an-email".to_string();
            state.login_form.password = "password".to_string();
        }

        app.handle_login_click();
        tokio::task::yield_now().await;

        let state = app.state.read();
        assert_eq!(
            state.login_form.error.as_deref(),
            Some("Please enter a valid email")
        );
        assert!(!state.login_form.submitting);
        assert_eq!(api.calls_to("login"), 0);
    }

    // ========== Feed scheduling ==========

    #[tokio::test]
    async fn test_feed_fetched_once_then_cached() {
        let user = sample_user(1);
        let api = MockApi {
            feed: Ok(vec![sample_tweet(1, &user), sample_tweet(2, &user)]),
            ..Default::default()
        };
        let (mut app, api, _dir) = signed_in_app(api);

        // Several frames pass before the response arrives.
        app.on_tick();
        app.on_tick();
        app.on_tick();

        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        assert_eq!(app.state.read().feed.data().unwrap().len(), 2);
        assert_eq!(api.calls_to("feed"), 1);

        // Settled data schedules nothing further.
        app.on_tick();
        tokio::task::yield_now().await;
        assert_eq!(api.calls_to("feed"), 1);
    }

    #[tokio::test]
    async fn test_posting_refetches_feed() {
        let user = sample_user(1);
        let api = MockApi {
            feed: Ok(vec![sample_tweet(1, &user)]),
            create_tweet: Ok(sample_tweet(9, &user)),
            ..Default::default()
        };
        let (mut app, api, _dir) = signed_in_app(api);

        // First load.
        app.on_tick();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);
        assert_eq!(api.calls_to("feed"), 1);

        // Post a tweet.
        app.state.write().compose_form.body = "fresh tweet".to_string();
        app.handle_compose_submit();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        // The creation marked the feed stale; the next frame refetches.
        app.on_tick();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);
        assert_eq!(api.calls_to("feed"), 2);
    }

    #[tokio::test]
    async fn test_whitespace_compose_validation_sends_nothing() {
        let (mut app, api, _dir) = signed_in_app(MockApi::default());
        app.state.write().compose_form.body = "   \n\t  ".to_string();

        app.handle_compose_submit();
        tokio::task::yield_now().await;

        let state = app.state.read();
        assert_eq!(
            state.compose_form.error.as_deref(),
            Some("Tweet cannot be empty")
        );
        assert!(!state.compose_form.submitting);
        assert_eq!(api.calls_to("create_tweet"), 0);
    }

    // ========== Reactions ==========

    #[tokio::test]
    async fn test_like_click_round_trip_patches_cache() {
        let user = sample_user(1);
        let api = MockApi {
            feed: Ok(vec![sample_tweet(1, &user)]),
            toggle_like: Ok(LikeToggle {
                liked: true,
                likes_count: 4,
            }),
            ..Default::default()
        };
        let (mut app, api, _dir) = signed_in_app(api);

        app.on_tick();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        app.handle_like_click(1);
        assert!(app.state.read().pending_likes.contains(&1));

        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        let state = app.state.read();
        let tweet = &state.feed.data().unwrap()[0];
        assert!(tweet.liked);
        assert_eq!(tweet.likes_count, 4);
        assert!(state.pending_likes.is_empty());
        // The patch did not schedule a refetch.
        assert!(!state.feed.needs_fetch());
        assert_eq!(api.calls_to("feed"), 1);
    }

    #[tokio::test]
    async fn test_double_like_click_fires_single_request() {
        let user = sample_user(1);
        let api = MockApi {
            feed: Ok(vec![sample_tweet(1, &user)]),
            toggle_like: Ok(LikeToggle {
                liked: true,
                likes_count: 1,
            }),
            ..Default::default()
        };
        let (mut app, api, _dir) = signed_in_app(api);

        app.on_tick();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        app.handle_like_click(1);
        app.handle_like_click(1);

        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);
        tokio::task::yield_now().await;

        assert_eq!(api.calls_to("toggle_like"), 1);
        assert!(app.state.read().pending_likes.is_empty());
    }

    // ========== Gate enforcement ==========

    #[tokio::test]
    async fn test_session_death_redirects_to_login_next_frame() {
        let (mut app, _api, _dir) = signed_in_app(MockApi::default());
        assert_eq!(app.state.read().current_screen, Screen::Feed);

        // The gateway resets the session when any request answers 401.
        app.session.reset();
        app.on_tick();

        assert_eq!(app.state.read().current_screen, Screen::Login);
    }

    #[tokio::test]
    async fn test_relogin_after_session_death_refetches_feed() {
        let viewer_a = sample_user(1);
        let api = MockApi {
            feed: Ok(vec![sample_tweet(1, &viewer_a)]),
            login: Ok(AuthResponse {
                user: sample_user(2),
                token: "second-session".to_string(),
            }),
            current_user: Ok(Some(sample_user(2))),
            ..Default::default()
        };
        let (mut app, api, _dir) = signed_in_app(api);

        // Viewer 1's feed settles.
        app.on_tick();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);
        assert_eq!(api.calls_to("feed"), 1);

        // A 401 kills the session without a logout; the gate bounces the
        // window to Login with viewer 1's feed still in the cache.
        app.session.reset();
        app.on_tick();
        assert_eq!(app.state.read().current_screen, Screen::Login);

        // Viewer 2 signs in.
        {
            let mut state = app.state.write();
            state.login_form.email = "viewer2@example.com".to_string();
            state.login_form.password = "password".to_string();
        }
        app.handle_login_click();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        // Viewer 1's list is gone before anything renders for viewer 2.
        assert!(app.state.read().feed.data().is_none());

        // The next frame re-probes the identity and refetches the feed.
        app.on_tick();
        for _ in 0..2 {
            let event = app.event_rx.recv().await.unwrap();
            app.handle_event(event);
        }
        assert_eq!(api.calls_to("feed"), 2);
        assert!(app.state.read().feed.data().is_some());
    }

    #[tokio::test]
    async fn test_logout_flow_round_trip() {
        let api = MockApi {
            logout: Ok(()),
            ..Default::default()
        };
        let (mut app, _api, _dir) = signed_in_app(api);

        app.handle_logout_click();
        assert!(app.state.read().logging_out);

        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        assert!(!app.session.is_authenticated());
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.logging_out);
        assert!(state.feed.data().is_none());
    }

    #[tokio::test]
    async fn test_screen_change_respects_gate() {
        let (mut app, _api, _dir) = app_with(MockApi::default());

        app.handle_screen_change(Screen::Feed);
        assert_eq!(app.state.read().current_screen, Screen::Login);

        app.handle_screen_change(Screen::Register);
        assert_eq!(app.state.read().current_screen, Screen::Register);
    }
}
