//! # Navigation Handlers
//!
//! Handlers for screen changes, all funneled through the route gate.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::navigation;
use crate::app::state::{AppState, LoginForm, RegisterForm, Screen};
use crate::session::SessionStore;

/// Handle a screen change request from the UI.
///
/// The request passes through [`navigation::resolve`], so asking for a
/// protected screen without a session lands on Login (and vice versa).
/// Arriving at an auth screen resets its form, dropping stale input and
/// errors from a previous visit.
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    session: &SessionStore,
    requested: Screen,
) {
    let resolved = navigation::resolve(requested, session.is_authenticated());
    if resolved != requested {
        tracing::info!(?requested, ?resolved, "Screen request redirected");
    }

    let mut state = state.write();
    if state.current_screen == resolved {
        return;
    }

    match resolved {
        Screen::Login => state.login_form = LoginForm::default(),
        Screen::Register => state.register_form = RegisterForm::default(),
        Screen::Feed => {}
    }
    state.current_screen = resolved;
}
