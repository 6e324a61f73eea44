//! # Registration Screen
//!
//! Account creation form using egui widgets.

use egui;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the registration screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(
            egui::RichText::new("MiniTweet")
                .size(32.0)
                .strong()
                .color(theme.accent),
        );
        ui.add_space(30.0);

        render_register_form(ui, state, app, theme);
    });
}

fn render_register_form(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, "Create account", theme);

    // Local copies for the text inputs, written back below.
    let mut name_input = state.register_form.name.clone();
    let mut email_input = state.register_form.email.clone();
    let mut password_input = state.register_form.password.clone();
    let mut confirmation_input = state.register_form.password_confirmation.clone();
    let mut submit = false;

    forms::render_text_input(ui, "Name", &mut name_input, "Your name", false, [280.0, 30.0]);
    ui.add_space(10.0);

    forms::render_text_input(
        ui,
        "Email",
        &mut email_input,
        "you@example.com",
        false,
        [280.0, 30.0],
    );
    ui.add_space(10.0);

    forms::render_text_input(
        ui,
        "Password",
        &mut password_input,
        "At least 8 characters",
        true,
        [280.0, 30.0],
    );
    ui.add_space(10.0);

    let confirmation_response = forms::render_text_input(
        ui,
        "Confirm password",
        &mut confirmation_input,
        "Repeat password",
        true,
        [280.0, 30.0],
    );
    if confirmation_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }

    {
        let mut state = app.state.write();
        state.register_form.name = name_input;
        state.register_form.email = email_input;
        state.register_form.password = password_input;
        state.register_form.password_confirmation = confirmation_input;
    }

    ui.add_space(15.0);

    if let Some(error) = state.register_form.error.as_deref() {
        forms::render_error(ui, error, theme);
    }

    let label = if state.register_form.submitting {
        "Creating account..."
    } else {
        "Create account"
    };
    let button = ui.add_enabled_ui(!state.register_form.submitting, |ui| {
        forms::render_button(ui, label, theme, Some(egui::vec2(280.0, 35.0)))
    });
    if button.inner.clicked() || (submit && !state.register_form.submitting) {
        app.handle_register_click();
    }

    ui.add_space(8.0);
    forms::render_hint(ui, "Press Enter to submit", theme);

    ui.add_space(15.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Already have an account?").color(theme.dim));
        if ui.link("Sign in").clicked() {
            app.handle_screen_change(Screen::Login);
        }
    });
}
