//! # Event Handler
//!
//! Applies async task results back onto application state.
//!
//! This module processes [`AppEvent`] messages received from spawned tasks
//! (login attempts, feed fetches, tweet mutations) and updates the session
//! and the state cache accordingly. It is the single place where mutation
//! outcomes decide between patching the cached feed in place and marking it
//! stale for a refetch.

use shared::dto::auth::{AuthResponse, UserInfo};
use shared::dto::tweets::{LikeToggle, RetweetToggle, Tweet};

use crate::app::cache::dedup_by_id;
use crate::app::state::{ComposeForm, LoginForm, Notice, RegisterForm, Screen};
use crate::app::{navigation, App, AppEvent};
use crate::core::ApiError;

/// Trait for event handling implementation.
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Apply one async result.
    ///
    /// Acquires the write lock per-event for minimal duration.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SessionProbed(result) => {
                self.handle_session_probed(result);
            }
            AppEvent::LoginResult(result) => {
                self.handle_login_result(result);
            }
            AppEvent::RegisterResult(result) => {
                self.handle_register_result(result);
            }
            AppEvent::LogoutFinished => {
                self.handle_logout_finished();
            }
            AppEvent::FeedResult(result) => {
                self.handle_feed_result(result);
            }
            AppEvent::TweetCreated(result) => {
                self.handle_tweet_created(result);
            }
            AppEvent::TweetUpdated(result) => {
                self.handle_tweet_updated(result);
            }
            AppEvent::TweetDeleted { id, result } => {
                self.handle_tweet_deleted(id, result);
            }
            AppEvent::LikeToggled { id, result } => {
                self.handle_like_toggled(id, result);
            }
            AppEvent::RetweetToggled { id, result } => {
                self.handle_retweet_toggled(id, result);
            }
        }
    }
}

impl App {
    fn handle_session_probed(&mut self, result: Result<Option<UserInfo>, ApiError>) {
        match result {
            Ok(user) => {
                match &user {
                    Some(identity) => {
                        tracing::info!(user_id = identity.id, "Stored session confirmed");
                        self.session.set_user(Some(identity.clone()));
                    }
                    None => {
                        // A settled "nobody" answer means the server no
                        // longer recognizes the credential. Purge it so the
                        // app does not keep retrying a dead token.
                        if self.session.credential().is_some() {
                            tracing::info!("Stored session rejected by server, clearing it");
                            self.session.reset();
                        }
                    }
                }
                self.state.write().current_user.resolve(Ok(user));
            }
            Err(error) => {
                // Auth failures already reset the session inside the API
                // gateway. Anything else (server down, no network) leaves
                // the stored session alone so it can be retried later.
                tracing::warn!(error = %error, "Session probe failed");
                self.state
                    .write()
                    .current_user
                    .resolve(Err(error.message().to_string()));
            }
        }

        let authenticated = self.session.is_authenticated();
        let mut state = self.state.write();
        state.session_resolved = true;
        state.current_screen = navigation::resolve(state.current_screen, authenticated);
    }

    fn handle_login_result(&mut self, result: Result<AuthResponse, ApiError>) {
        tracing::info!(success = result.is_ok(), "Processing login result");
        match result {
            Ok(auth) => {
                self.session.set_auth(auth.user, auth.token);
                let mut state = self.state.write();
                state.login_form = LoginForm::default();
                // The previous session may have ended with a 401 rather
                // than a logout, leaving the old viewer's feed (and their
                // liked/retweeted flags) settled in the cache. Start this
                // viewer from nothing; both resources refetch on the next
                // tick.
                state.reset_viewer_data();
                state.session_resolved = true;
                state.current_screen = Screen::Feed;
            }
            Err(error) => {
                let mut state = self.state.write();
                state.login_form.submitting = false;
                state.login_form.error = Some(error.message().to_string());
            }
        }
    }

    fn handle_register_result(&mut self, result: Result<AuthResponse, ApiError>) {
        tracing::info!(success = result.is_ok(), "Processing register result");
        match result {
            Ok(auth) => {
                self.session.set_auth(auth.user, auth.token);
                let mut state = self.state.write();
                state.register_form = RegisterForm::default();
                // Same as login: a 401-ended session can leave another
                // viewer's feed behind.
                state.reset_viewer_data();
                state.session_resolved = true;
                state.current_screen = Screen::Feed;
            }
            Err(error) => {
                let mut state = self.state.write();
                state.register_form.submitting = false;
                state.register_form.error = Some(error.message().to_string());
            }
        }
    }

    fn handle_logout_finished(&mut self) {
        tracing::info!("Logout finished, clearing session and cached data");
        self.session.reset();

        let mut state = self.state.write();
        state.logging_out = false;
        state.reset_viewer_data();
        state.current_screen = Screen::Login;
    }

    fn handle_feed_result(&mut self, result: Result<Vec<Tweet>, ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(tweets) => {
                let tweets = dedup_by_id(tweets);
                tracing::debug!(count = tweets.len(), "Feed installed");
                state.feed.resolve(Ok(tweets));
            }
            Err(error) => {
                state.feed.resolve(Err(error.message().to_string()));
            }
        }
    }

    fn handle_tweet_created(&mut self, result: Result<(), ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(()) => {
                tracing::info!("Tweet created, refetching feed");
                state.compose_form = ComposeForm::default();
                state.feed.invalidate();
                state.pending_notices.push(Notice::success("Tweet posted"));
            }
            Err(error) => {
                tracing::warn!(error = %error, "Tweet create failed");
                // Keep the draft so the viewer can retry.
                state.compose_form.submitting = false;
                state
                    .pending_notices
                    .push(Notice::error(error.message().to_string()));
            }
        }
    }

    fn handle_tweet_updated(&mut self, result: Result<(), ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(()) => {
                tracing::info!("Tweet updated, refetching feed");
                state.editor = None;
                state.feed.invalidate();
                state.pending_notices.push(Notice::success("Tweet updated"));
            }
            Err(error) => {
                tracing::warn!(error = %error, "Tweet update failed");
                if let Some(editor) = state.editor.as_mut() {
                    editor.submitting = false;
                    editor.error = Some(error.message().to_string());
                }
            }
        }
    }

    fn handle_tweet_deleted(&mut self, id: i64, result: Result<(), ApiError>) {
        let mut state = self.state.write();
        state.pending_deletes.remove(&id);
        match result {
            Ok(()) => {
                tracing::info!(tweet_id = id, "Tweet deleted, refetching feed");
                state.feed.invalidate();
                state.pending_notices.push(Notice::success("Tweet deleted"));
            }
            Err(error) => {
                tracing::warn!(tweet_id = id, error = %error, "Tweet delete failed");
                state
                    .pending_notices
                    .push(Notice::error(error.message().to_string()));
            }
        }
    }

    fn handle_like_toggled(&mut self, id: i64, result: Result<LikeToggle, ApiError>) {
        let mut state = self.state.write();
        state.pending_likes.remove(&id);
        match result {
            Ok(toggle) => {
                tracing::debug!(tweet_id = id, liked = toggle.liked, "Like patched");
                // Patch only the toggled tweet with the server's counts.
                // No refetch: the rest of the feed is untouched.
                state.feed.patch(|tweets| {
                    if let Some(tweet) = tweets.iter_mut().find(|t| t.id == id) {
                        tweet.liked = toggle.liked;
                        tweet.likes_count = toggle.likes_count;
                    }
                });
            }
            Err(error) => {
                tracing::warn!(tweet_id = id, error = %error, "Like toggle failed");
                state
                    .pending_notices
                    .push(Notice::error(error.message().to_string()));
            }
        }
    }

    fn handle_retweet_toggled(&mut self, id: i64, result: Result<RetweetToggle, ApiError>) {
        let mut state = self.state.write();
        state.pending_retweets.remove(&id);
        match result {
            Ok(toggle) => {
                tracing::debug!(tweet_id = id, retweeted = toggle.retweeted, "Retweet patched");
                state.feed.patch(|tweets| {
                    if let Some(tweet) = tweets.iter_mut().find(|t| t.id == id) {
                        tweet.retweeted = toggle.retweeted;
                        tweet.retweets_count = toggle.retweets_count;
                    }
                });
            }
            Err(error) => {
                tracing::warn!(tweet_id = id, error = %error, "Retweet toggle failed");
                state
                    .pending_notices
                    .push(Notice::error(error.message().to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::NoticeLevel;
    use crate::core::service::mock::{sample_tweet, sample_user, MockApi};
    use crate::session::SessionStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn test_app() -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let session = SessionStore::load(dir.path().join("session.json"));
        let app = App::new(Arc::new(MockApi::default()), session);
        (app, dir)
    }

    fn authed_app() -> (App, TempDir) {
        let (app, dir) = test_app();
        app.session
            .set_auth(sample_user(1), "token-1".to_string());
        app.state.write().session_resolved = true;
        app.state.write().current_screen = Screen::Feed;
        (app, dir)
    }

    fn install_feed(app: &mut App, tweets: Vec<Tweet>) {
        let mut state = app.state.write();
        assert!(state.feed.begin_fetch());
        state.feed.resolve(Ok(tweets));
    }

    // ========== Session probe ==========

    #[test]
    fn test_probe_confirms_identity_and_lands_on_feed() {
        let (mut app, _dir) = test_app();
        app.session.set_auth(sample_user(1), "token-1".to_string());
        app.state.write().session_resolved = false;

        app.handle_event_impl(AppEvent::SessionProbed(Ok(Some(sample_user(1)))));

        let state = app.state.read();
        assert!(state.session_resolved);
        assert_eq!(state.current_screen, Screen::Feed);
        assert!(app.session.is_authenticated());
    }

    #[test]
    fn test_probe_none_purges_stored_session() {
        let (mut app, _dir) = test_app();
        app.session.set_auth(sample_user(1), "stale".to_string());
        app.state.write().session_resolved = false;
        app.state.write().current_screen = Screen::Feed;

        app.handle_event_impl(AppEvent::SessionProbed(Ok(None)));

        assert!(app.session.credential().is_none());
        assert!(app.session.current_user().is_none());
        let state = app.state.read();
        assert!(state.session_resolved);
        assert_eq!(state.current_screen, Screen::Login);
    }

    #[test]
    fn test_probe_transport_error_keeps_stored_session() {
        let (mut app, _dir) = test_app();
        app.session.set_auth(sample_user(1), "token-1".to_string());
        app.state.write().session_resolved = false;

        app.handle_event_impl(AppEvent::SessionProbed(Err(ApiError::Request(
            "Network error: timeout".to_string(),
        ))));

        // The credential survives an unreachable server.
        assert!(app.session.credential().is_some());
        let state = app.state.read();
        assert!(state.session_resolved);
        assert_eq!(
            state.current_user.error(),
            Some("Network error: timeout")
        );
    }

    // ========== Login and registration ==========

    #[test]
    fn test_login_success_stores_session_and_clears_form() {
        let (mut app, _dir) = test_app();
        {
            let mut state = app.state.write();
            state.login_form.email = "jo@example.com".to_string();
            state.login_form.password = "secret".to_string();
            state.login_form.submitting = true;
            // Settle the viewer resource so the post-login invalidation
            // is observable below.
            assert!(state.current_user.begin_fetch());
            state.current_user.resolve(Ok(None));
        }

        let auth = AuthResponse {
            user: sample_user(7),
            token: "fresh-token".to_string(),
        };
        app.handle_event_impl(AppEvent::LoginResult(Ok(auth)));

        assert!(app.session.is_authenticated());
        assert_eq!(app.session.credential().as_deref(), Some("fresh-token"));
        assert_eq!(app.session.current_user().unwrap().id, 7);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Feed);
        assert!(state.login_form.email.is_empty());
        assert!(!state.login_form.submitting);
        assert!(state.current_user.needs_fetch());
    }

    #[test]
    fn test_login_failure_shows_inline_error_and_keeps_form() {
        let (mut app, _dir) = test_app();
        {
            let mut state = app.state.write();
            state.login_form.email = "jo@example.com".to_string();
            state.login_form.submitting = true;
        }

        app.handle_event_impl(AppEvent::LoginResult(Err(ApiError::Auth(
            "Invalid credentials".to_string(),
        ))));

        assert!(!app.session.is_authenticated());
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert_eq!(state.login_form.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(state.login_form.email, "jo@example.com");
        assert!(!state.login_form.submitting);
    }

    #[test]
    fn test_register_success_authenticates_immediately() {
        let (mut app, _dir) = test_app();
        app.state.write().current_screen = Screen::Register;

        let auth = AuthResponse {
            user: sample_user(3),
            token: "new-account".to_string(),
        };
        app.handle_event_impl(AppEvent::RegisterResult(Ok(auth)));

        assert!(app.session.is_authenticated());
        assert_eq!(app.state.read().current_screen, Screen::Feed);
    }

    #[test]
    fn test_login_after_auth_reset_drops_previous_viewers_feed() {
        let (mut app, _dir) = authed_app();
        let viewer_a = sample_user(1);
        let mut tweet = sample_tweet(1, &viewer_a);
        tweet.liked = true;
        tweet.likes_count = 3;
        install_feed(&mut app, vec![tweet]);
        app.state.write().compose_form.body = "viewer one draft".to_string();

        // A 401 resets the session inside the API gateway without any
        // logout event, so the old feed is still installed here.
        app.session.reset();
        app.handle_event_impl(AppEvent::LoginResult(Ok(AuthResponse {
            user: sample_user(2),
            token: "second-viewer".to_string(),
        })));

        let state = app.state.read();
        // Nothing of viewer 1 may render for viewer 2, not even briefly.
        assert!(state.feed.data().is_none());
        assert!(state.feed.needs_fetch());
        assert!(state.compose_form.body.is_empty());
        assert_eq!(state.current_screen, Screen::Feed);
    }

    #[test]
    fn test_register_after_auth_reset_drops_previous_viewers_feed() {
        let (mut app, _dir) = authed_app();
        let viewer_a = sample_user(1);
        install_feed(&mut app, vec![sample_tweet(1, &viewer_a)]);
        app.session.reset();

        app.handle_event_impl(AppEvent::RegisterResult(Ok(AuthResponse {
            user: sample_user(2),
            token: "second-viewer".to_string(),
        })));

        let state = app.state.read();
        assert!(state.feed.data().is_none());
        assert!(state.feed.needs_fetch());
    }

    // ========== Logout ==========

    #[test]
    fn test_logout_clears_session_and_viewer_scoped_cache() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        install_feed(&mut app, vec![sample_tweet(1, &user)]);
        {
            let mut state = app.state.write();
            state.compose_form.body = "draft".to_string();
            state.pending_likes.insert(1);
            state.logging_out = true;
        }

        app.handle_event_impl(AppEvent::LogoutFinished);

        assert!(!app.session.is_authenticated());
        assert!(app.session.credential().is_none());

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.logging_out);
        // The feed holds per-viewer like flags, so it must be dropped.
        assert!(state.feed.data().is_none());
        assert!(state.current_user.data().is_none());
        assert!(state.compose_form.body.is_empty());
        assert!(state.pending_likes.is_empty());
    }

    // ========== Feed installs ==========

    #[test]
    fn test_feed_result_installs_deduplicated_list() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        assert!(app.state.write().feed.begin_fetch());

        app.handle_event_impl(AppEvent::FeedResult(Ok(vec![
            sample_tweet(2, &user),
            sample_tweet(1, &user),
            sample_tweet(2, &user),
        ])));

        let state = app.state.read();
        let ids: Vec<i64> = state.feed.data().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_feed_error_keeps_previous_tweets() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        install_feed(&mut app, vec![sample_tweet(1, &user)]);

        {
            let mut state = app.state.write();
            state.feed.invalidate();
            assert!(state.feed.begin_fetch());
        }
        app.handle_event_impl(AppEvent::FeedResult(Err(ApiError::Request(
            "Network error: connection refused".to_string(),
        ))));

        let state = app.state.read();
        assert_eq!(state.feed.data().unwrap().len(), 1);
        assert!(state.feed.error().is_some());
    }

    // ========== Create, update, delete ==========

    #[test]
    fn test_tweet_created_clears_compose_and_refetches() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        install_feed(&mut app, vec![sample_tweet(1, &user)]);
        {
            let mut state = app.state.write();
            state.compose_form.body = "hello world".to_string();
            state.compose_form.submitting = true;
        }

        app.handle_event_impl(AppEvent::TweetCreated(Ok(())));

        let state = app.state.read();
        assert!(state.compose_form.body.is_empty());
        assert!(!state.compose_form.submitting);
        // Creation refetches rather than guessing where the tweet lands.
        assert!(state.feed.needs_fetch());
        assert_eq!(state.pending_notices.len(), 1);
        assert_eq!(state.pending_notices[0].message, "Tweet posted");
        assert_eq!(state.pending_notices[0].level, NoticeLevel::Success);
    }

    #[test]
    fn test_tweet_create_failure_preserves_draft() {
        let (mut app, _dir) = authed_app();
        {
            let mut state = app.state.write();
            state.compose_form.body = "my draft".to_string();
            state.compose_form.submitting = true;
        }

        app.handle_event_impl(AppEvent::TweetCreated(Err(ApiError::Domain(
            "Tweet too long".to_string(),
        ))));

        let state = app.state.read();
        assert_eq!(state.compose_form.body, "my draft");
        assert!(!state.compose_form.submitting);
        // The bare server message, no prefix wrapping.
        assert_eq!(state.pending_notices[0].message, "Tweet too long");
        assert_eq!(state.pending_notices[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_tweet_updated_closes_editor_and_refetches() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        let tweet = sample_tweet(1, &user);
        install_feed(&mut app, vec![tweet.clone()]);
        app.state.write().editor = Some(crate::app::state::EditForm::new(&tweet));

        app.handle_event_impl(AppEvent::TweetUpdated(Ok(())));

        let state = app.state.read();
        assert!(state.editor.is_none());
        assert!(state.feed.needs_fetch());
        assert_eq!(state.pending_notices[0].message, "Tweet updated");
    }

    #[test]
    fn test_tweet_update_failure_keeps_editor_open() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        let tweet = sample_tweet(1, &user);
        install_feed(&mut app, vec![tweet.clone()]);
        {
            let mut state = app.state.write();
            let mut editor = crate::app::state::EditForm::new(&tweet);
            editor.submitting = true;
            state.editor = Some(editor);
        }

        app.handle_event_impl(AppEvent::TweetUpdated(Err(ApiError::Domain(
            "Tweet cannot be empty".to_string(),
        ))));

        let state = app.state.read();
        let editor = state.editor.as_ref().unwrap();
        assert!(!editor.submitting);
        assert_eq!(editor.error.as_deref(), Some("Tweet cannot be empty"));
        assert!(!state.feed.needs_fetch());
    }

    #[test]
    fn test_tweet_deleted_refetches_and_clears_pending() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        install_feed(&mut app, vec![sample_tweet(1, &user)]);
        app.state.write().pending_deletes.insert(1);

        app.handle_event_impl(AppEvent::TweetDeleted {
            id: 1,
            result: Ok(()),
        });

        let state = app.state.read();
        assert!(state.pending_deletes.is_empty());
        assert!(state.feed.needs_fetch());
        assert_eq!(state.pending_notices[0].message, "Tweet deleted");
    }

    // ========== Like and retweet patches ==========

    #[test]
    fn test_like_toggle_patches_only_target_tweet() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        install_feed(&mut app, vec![sample_tweet(1, &user), sample_tweet(2, &user)]);
        app.state.write().pending_likes.insert(2);

        app.handle_event_impl(AppEvent::LikeToggled {
            id: 2,
            result: Ok(LikeToggle {
                liked: true,
                likes_count: 5,
            }),
        });

        let state = app.state.read();
        let tweets = state.feed.data().unwrap();
        let target = tweets.iter().find(|t| t.id == 2).unwrap();
        assert!(target.liked);
        assert_eq!(target.likes_count, 5);

        // The untouched neighbor keeps its counts.
        let other = tweets.iter().find(|t| t.id == 1).unwrap();
        assert!(!other.liked);
        assert_eq!(other.likes_count, 0);

        // A patch is not an invalidation.
        assert!(!state.feed.needs_fetch());
        assert!(state.pending_likes.is_empty());
    }

    #[test]
    fn test_like_applies_server_count_not_local_increment() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        install_feed(&mut app, vec![sample_tweet(1, &user)]);

        // Server says 12 even though the local count was 0. Someone else
        // liked in the meantime and the server total wins.
        app.handle_event_impl(AppEvent::LikeToggled {
            id: 1,
            result: Ok(LikeToggle {
                liked: true,
                likes_count: 12,
            }),
        });

        let state = app.state.read();
        assert_eq!(state.feed.data().unwrap()[0].likes_count, 12);
    }

    #[test]
    fn test_like_failure_leaves_cache_untouched() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        install_feed(&mut app, vec![sample_tweet(1, &user)]);
        app.state.write().pending_likes.insert(1);

        app.handle_event_impl(AppEvent::LikeToggled {
            id: 1,
            result: Err(ApiError::Request("Network error: timeout".to_string())),
        });

        let state = app.state.read();
        let tweet = &state.feed.data().unwrap()[0];
        assert!(!tweet.liked);
        assert_eq!(tweet.likes_count, 0);
        assert!(state.pending_likes.is_empty());
        assert_eq!(state.pending_notices[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_retweet_toggle_patches_retweet_fields() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        install_feed(&mut app, vec![sample_tweet(4, &user)]);

        app.handle_event_impl(AppEvent::RetweetToggled {
            id: 4,
            result: Ok(RetweetToggle {
                retweeted: true,
                retweets_count: 3,
            }),
        });

        let state = app.state.read();
        let tweet = &state.feed.data().unwrap()[0];
        assert!(tweet.retweeted);
        assert_eq!(tweet.retweets_count, 3);
        assert!(!tweet.liked);
    }

    #[test]
    fn test_toggle_for_vanished_tweet_is_ignored() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        install_feed(&mut app, vec![sample_tweet(1, &user)]);

        // Tweet 9 was deleted out from under the toggle.
        app.handle_event_impl(AppEvent::LikeToggled {
            id: 9,
            result: Ok(LikeToggle {
                liked: true,
                likes_count: 1,
            }),
        });

        let state = app.state.read();
        assert_eq!(state.feed.data().unwrap().len(), 1);
        assert!(!state.feed.data().unwrap()[0].liked);
    }

    // ========== Last response wins ==========

    #[test]
    fn test_rapid_toggle_responses_apply_in_arrival_order() {
        let (mut app, _dir) = authed_app();
        let user = sample_user(1);
        install_feed(&mut app, vec![sample_tweet(1, &user)]);

        app.handle_event_impl(AppEvent::LikeToggled {
            id: 1,
            result: Ok(LikeToggle {
                liked: true,
                likes_count: 1,
            }),
        });
        app.handle_event_impl(AppEvent::LikeToggled {
            id: 1,
            result: Ok(LikeToggle {
                liked: false,
                likes_count: 0,
            }),
        });

        let state = app.state.read();
        let tweet = &state.feed.data().unwrap()[0];
        assert!(!tweet.liked);
        assert_eq!(tweet.likes_count, 0);
    }
}
