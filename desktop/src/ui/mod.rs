//! # GUI Rendering
//!
//! Orchestrates the per-frame rendering pipeline using egui widgets.
//!
//! Rendering never holds the state lock: each frame clones a snapshot,
//! draws from it, and routes clicks to the [`App`] handlers, which take
//! their own short locks. Screen output therefore lags a mutation by at
//! most one frame.

pub mod screens;
pub mod theme;
pub mod widgets;

use egui;

use crate::app::{App, AppState, Screen};
use theme::Theme;
use widgets::notifications::NotificationManager;

/// Main render function, called every frame.
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    let theme = Theme::default();

    // Hand queued mutation outcomes to the toast system.
    {
        let notices = app.state.write().drain_notices();
        notifications.absorb(notices);
    }

    // Snapshot state for rendering.
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => {
            // Lock is held elsewhere, skip this frame.
            return;
        }
    };

    // One session view for the whole frame, so the gate, the nav bar, and
    // the ownership checks cannot disagree mid-draw.
    let viewer = app.session.snapshot();

    // Until the startup probe settles, show a neutral frame rather than
    // guessing between Login and Feed.
    if !state.session_resolved {
        render_loading_frame(ctx, &theme);
        notifications.show(ctx);
        return;
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        let current_screen = state.current_screen;
        let authenticated = viewer.is_authenticated();

        // The tick-level gate catches this too, but never let a protected
        // screen render for a signed-out viewer, not even for one frame.
        if current_screen.requires_auth() && !authenticated {
            app.handle_screen_change(Screen::Login);
            screens::login::render(ui, &state, app, &theme);
            return;
        }

        if authenticated {
            widgets::nav_bar::render_nav_bar(ui, &state, &viewer, app, &theme);
            ui.add_space(5.0);
            ui.separator();
            ui.add_space(5.0);
        }

        match current_screen {
            Screen::Login => screens::login::render(ui, &state, app, &theme),
            Screen::Register => screens::register::render(ui, &state, app, &theme),
            Screen::Feed => screens::feed::render(ui, &state, &viewer, app, &theme),
        }
    });

    // Popups rendered on top of the central panel.
    render_edit_window(ctx, &state, app, &theme);
    render_delete_dialog(ctx, &state, app, &theme);

    notifications.show(ctx);
}

/// Neutral frame shown while the stored session is being validated.
fn render_loading_frame(ctx: &egui::Context, theme: &Theme) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.4);
            ui.spinner();
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Loading...").color(theme.dim));
        });
    });
}

/// Modal-style window for editing one of the viewer's tweets.
fn render_edit_window(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(editor) = state.editor.as_ref() else {
        return;
    };

    // Local copy for the text input, written back below.
    let mut body_input = editor.body.clone();
    let mut open = true;

    egui::Window::new("Edit tweet")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_width(420.0);

            ui.add(
                egui::TextEdit::multiline(&mut body_input)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            {
                let mut state = app.state.write();
                if let Some(editor) = state.editor.as_mut() {
                    editor.body = body_input.clone();
                }
            }

            if let Some(error) = editor.error.as_deref() {
                ui.label(egui::RichText::new(error).size(13.0).color(theme.error));
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let remaining = crate::utils::validation::MAX_TWEET_LEN as i64
                    - body_input.trim().chars().count() as i64;
                let counter_color = if remaining < 0 { theme.error } else { theme.dim };
                ui.label(egui::RichText::new(remaining.to_string()).color(counter_color));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let can_save = !editor.submitting && remaining >= 0;
                    let label = if editor.submitting { "Saving..." } else { "Save" };
                    let save = egui::Button::new(
                        egui::RichText::new(label).color(egui::Color32::WHITE),
                    )
                    .fill(theme.accent);
                    if ui.add_enabled(can_save, save).clicked() {
                        app.handle_edit_submit();
                    }

                    if ui.button("Cancel").clicked() {
                        app.handle_edit_cancel();
                    }
                });
            });
        });

    if !open {
        app.handle_edit_cancel();
    }
}

/// Confirmation dialog before a tweet is deleted.
fn render_delete_dialog(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    if state.confirm_delete.is_none() {
        return;
    }

    egui::Window::new("Delete tweet?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("This action cannot be undone.");
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    app.handle_delete_cancel();
                }
                let delete = egui::Button::new(
                    egui::RichText::new("Delete").color(egui::Color32::WHITE),
                )
                .fill(theme.error);
                if ui.add(delete).clicked() {
                    app.handle_delete_confirm();
                }
            });
        });
}
