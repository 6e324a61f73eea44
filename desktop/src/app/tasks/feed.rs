//! # Feed Tasks
//!
//! Async task for fetching the home timeline.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use tokio::spawn;
use tracing::{debug, warn};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::ApiService;

/// Fetch the home feed if it is stale.
///
/// Claims the feed's in-flight slot first; returns without spawning when a
/// fetch is already running or the cached list is current.
///
/// Internal task function - spawns async task to fetch the feed and send the
/// result via the event channel.
pub(crate) fn fetch_feed(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
) {
    if !state.write().feed.begin_fetch() {
        return;
    }

    spawn(async move {
        let start = std::time::Instant::now();
        let result = api.feed().await;

        match &result {
            Ok(tweets) => {
                debug!(
                    count = tweets.len(),
                    duration_ms = start.elapsed().as_millis(),
                    "Feed fetched"
                );
            }
            Err(error) => {
                warn!(
                    error = %error,
                    duration_ms = start.elapsed().as_millis(),
                    "Feed fetch failed"
                );
            }
        }

        let _ = event_tx.send(AppEvent::FeedResult(result)).await;
    });
}
