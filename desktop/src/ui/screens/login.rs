//! # Login Screen
//!
//! Sign-in form using egui widgets.

use egui;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the login screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(
            egui::RichText::new("MiniTweet")
                .size(32.0)
                .strong()
                .color(theme.accent),
        );
        ui.add_space(30.0);

        render_login_form(ui, state, app, theme);
    });
}

fn render_login_form(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, "Sign in", theme);

    // Local copies for the text inputs, written back below.
    let mut email_input = state.login_form.email.clone();
    let mut password_input = state.login_form.password.clone();
    let mut submit = false;

    forms::render_text_input(
        ui,
        "Email",
        &mut email_input,
        "you@example.com",
        false,
        [280.0, 30.0],
    );
    ui.add_space(10.0);

    let password_response = forms::render_text_input(
        ui,
        "Password",
        &mut password_input,
        "Password",
        true,
        [280.0, 30.0],
    );
    if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }

    {
        let mut state = app.state.write();
        state.login_form.email = email_input;
        state.login_form.password = password_input;
    }

    ui.add_space(15.0);

    if let Some(error) = state.login_form.error.as_deref() {
        forms::render_error(ui, error, theme);
    }

    let label = if state.login_form.submitting {
        "Signing in..."
    } else {
        "Sign in"
    };
    let button = ui.add_enabled_ui(!state.login_form.submitting, |ui| {
        forms::render_button(ui, label, theme, Some(egui::vec2(280.0, 35.0)))
    });
    if button.inner.clicked() || (submit && !state.login_form.submitting) {
        app.handle_login_click();
    }

    ui.add_space(8.0);
    forms::render_hint(ui, "Press Enter to sign in", theme);

    ui.add_space(15.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("New here?").color(theme.dim));
        if ui.link("Create an account").clicked() {
            app.handle_screen_change(Screen::Register);
        }
    });
}
