//! # Feed Handlers
//!
//! Handlers for composing, editing, deleting, and reacting to tweets.
//!
//! The like and retweet handlers guard against double-fires with per-tweet
//! pending sets: a second click on the same button while its request is in
//! flight is dropped, so the server sees at most one toggle at a time and
//! the last response to arrive is the one that sticks in the cache.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, EditForm};
use crate::core::ApiService;
use crate::utils::validation::validate_tweet_body;

/// Handle compose submit (button or Ctrl+Enter).
///
/// Internal handler function - use [`crate::app::App::handle_compose_submit`] instead.
pub(crate) fn handle_compose_submit(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
) {
    let body = {
        let mut state = state.write();
        if state.compose_form.submitting {
            return;
        }

        let check = validate_tweet_body(&state.compose_form.body);
        if !check.is_valid {
            state.compose_form.error = check.error;
            return;
        }

        state.compose_form.error = None;
        state.compose_form.submitting = true;
        state.compose_form.body.trim().to_string()
    };

    tokio::spawn(async move {
        let result = api.create_tweet(body).await.map(|_| ());
        let _ = event_tx.send(AppEvent::TweetCreated(result)).await;
    });
}

/// Handle a click on a tweet's like button.
///
/// Internal handler function - use [`crate::app::App::handle_like_click`] instead.
pub(crate) fn handle_like_click(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    tweet_id: i64,
) {
    {
        let mut state = state.write();
        if !state.pending_likes.insert(tweet_id) {
            return;
        }
    }

    tokio::spawn(async move {
        let result = api.toggle_like(tweet_id).await;
        let _ = event_tx
            .send(AppEvent::LikeToggled {
                id: tweet_id,
                result,
            })
            .await;
    });
}

/// Handle a click on a tweet's retweet button.
///
/// Internal handler function - use [`crate::app::App::handle_retweet_click`] instead.
pub(crate) fn handle_retweet_click(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    tweet_id: i64,
) {
    {
        let mut state = state.write();
        if !state.pending_retweets.insert(tweet_id) {
            return;
        }
    }

    tokio::spawn(async move {
        let result = api.toggle_retweet(tweet_id).await;
        let _ = event_tx
            .send(AppEvent::RetweetToggled {
                id: tweet_id,
                result,
            })
            .await;
    });
}

/// Open the edit dialog for one of the viewer's tweets.
///
/// Internal handler function - use [`crate::app::App::handle_edit_open`] instead.
pub(crate) fn handle_edit_open(state: Arc<RwLock<AppState>>, tweet_id: i64) {
    let mut state = state.write();
    let tweet = state
        .feed
        .data()
        .and_then(|tweets| tweets.iter().find(|t| t.id == tweet_id))
        .cloned();

    // The tweet can vanish between render and click (refetch dropped it).
    if let Some(tweet) = tweet {
        state.editor = Some(EditForm::new(&tweet));
    }
}

/// Close the edit dialog without saving.
///
/// Internal handler function - use [`crate::app::App::handle_edit_cancel`] instead.
pub(crate) fn handle_edit_cancel(state: Arc<RwLock<AppState>>) {
    state.write().editor = None;
}

/// Submit the edit dialog.
///
/// Internal handler function - use [`crate::app::App::handle_edit_submit`] instead.
pub(crate) fn handle_edit_submit(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
) {
    let request = {
        let mut state = state.write();
        let Some(editor) = state.editor.as_mut() else {
            return;
        };
        if editor.submitting {
            return;
        }

        let check = validate_tweet_body(&editor.body);
        if !check.is_valid {
            editor.error = check.error;
            return;
        }

        editor.error = None;
        editor.submitting = true;
        (editor.tweet_id, editor.body.trim().to_string())
    };

    tokio::spawn(async move {
        let (id, body) = request;
        let result = api.update_tweet(id, body).await.map(|_| ());
        let _ = event_tx.send(AppEvent::TweetUpdated(result)).await;
    });
}

/// Ask for confirmation before deleting a tweet.
///
/// Internal handler function - use [`crate::app::App::handle_delete_request`] instead.
pub(crate) fn handle_delete_request(state: Arc<RwLock<AppState>>, tweet_id: i64) {
    state.write().confirm_delete = Some(tweet_id);
}

/// Dismiss the delete confirmation dialog.
///
/// Internal handler function - use [`crate::app::App::handle_delete_cancel`] instead.
pub(crate) fn handle_delete_cancel(state: Arc<RwLock<AppState>>) {
    state.write().confirm_delete = None;
}

/// Confirm the pending delete and fire the request.
///
/// Internal handler function - use [`crate::app::App::handle_delete_confirm`] instead.
pub(crate) fn handle_delete_confirm(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
) {
    let tweet_id = {
        let mut state = state.write();
        let Some(tweet_id) = state.confirm_delete.take() else {
            return;
        };
        if !state.pending_deletes.insert(tweet_id) {
            return;
        }
        tweet_id
    };

    tokio::spawn(async move {
        let result = api.delete_tweet(tweet_id).await;
        let _ = event_tx
            .send(AppEvent::TweetDeleted {
                id: tweet_id,
                result,
            })
            .await;
    });
}

/// Mark the feed stale so the next frame refetches it.
///
/// Internal handler function - use [`crate::app::App::handle_refresh_click`] instead.
pub(crate) fn handle_refresh_click(state: Arc<RwLock<AppState>>) {
    state.write().feed.invalidate();
}
