//! # Authentication Handlers
//!
//! Handlers for login, registration, and logout actions.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::auth::{LoginRequest, RegisterRequest};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::ApiService;
use crate::utils::validation::{
    validate_email, validate_login_password, validate_name, validate_password_confirmation,
    validate_register_password,
};

/// Handle login button click.
///
/// Validates the form synchronously. A failed check sets the inline error
/// and sends nothing over the wire; a passing form flips `submitting` and
/// spawns the request.
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
) {
    let request = {
        let mut state = state.write();
        if state.login_form.submitting {
            return;
        }

        let email = state.login_form.email.trim().to_string();
        let password = state.login_form.password.clone();

        let check = validate_email(&email);
        if !check.is_valid {
            state.login_form.error = check.error;
            return;
        }
        let check = validate_login_password(&password);
        if !check.is_valid {
            state.login_form.error = check.error;
            return;
        }

        state.login_form.error = None;
        state.login_form.submitting = true;
        LoginRequest { email, password }
    };

    tokio::spawn(async move {
        let result = api.login(request).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Handle register button click.
///
/// Internal handler function - use [`crate::app::App::handle_register_click`] instead.
pub(crate) fn handle_register_click(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
) {
    let request = {
        let mut state = state.write();
        if state.register_form.submitting {
            return;
        }

        let name = state.register_form.name.trim().to_string();
        let email = state.register_form.email.trim().to_string();
        let password = state.register_form.password.clone();
        let password_confirmation = state.register_form.password_confirmation.clone();

        let check = validate_name(&name);
        if !check.is_valid {
            state.register_form.error = check.error;
            return;
        }
        let check = validate_email(&email);
        if !check.is_valid {
            state.register_form.error = check.error;
            return;
        }
        let check = validate_register_password(&password);
        if !check.is_valid {
            state.register_form.error = check.error;
            return;
        }
        let check = validate_password_confirmation(&password, &password_confirmation);
        if !check.is_valid {
            state.register_form.error = check.error;
            return;
        }

        state.register_form.error = None;
        state.register_form.submitting = true;
        RegisterRequest {
            name,
            email,
            password,
            password_confirmation,
        }
    };

    tokio::spawn(async move {
        let result = api.register(request).await;
        let _ = event_tx.send(AppEvent::RegisterResult(result)).await;
    });
}

/// Handle logout button click.
///
/// The server call is best effort. The local session is discarded when
/// [`AppEvent::LogoutFinished`] comes back, whether or not the server
/// accepted the request.
///
/// Internal handler function - use [`crate::app::App::handle_logout_click`] instead.
pub(crate) fn handle_logout_click(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
) {
    {
        let mut state = state.write();
        if state.logging_out {
            return;
        }
        state.logging_out = true;
    }

    tokio::spawn(async move {
        if let Err(error) = api.logout().await {
            tracing::debug!(error = %error, "Logout request failed, discarding session anyway");
        }
        let _ = event_tx.send(AppEvent::LogoutFinished).await;
    });
}
