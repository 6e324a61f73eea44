//! # Session Tasks
//!
//! Async task for validating the stored session against the server.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use tokio::spawn;
use tracing::debug;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::ApiService;

/// Probe the server for the viewer behind the stored credential.
///
/// Claims the current-user resource's in-flight slot first, so the probe
/// fires once no matter how many frames observe an unresolved session.
///
/// Internal task function - spawns async task to fetch the viewer identity
/// and send the result via the event channel.
pub(crate) fn probe_session(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
) {
    if !state.write().current_user.begin_fetch() {
        return;
    }

    spawn(async move {
        debug!("Probing stored session");
        let result = api.current_user().await;
        let _ = event_tx.send(AppEvent::SessionProbed(result)).await;
    });
}
