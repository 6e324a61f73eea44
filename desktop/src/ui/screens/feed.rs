//! # Feed Screen
//!
//! The home timeline: compose box on top, tweet cards below.
//!
//! Rendering follows the cache's stale-while-revalidate states. A first
//! load shows skeleton placeholders, a background refresh keeps the cards
//! visible with a small indicator, and a failed fetch shows the error next
//! to whatever data is still cached.

use egui;

use crate::app::{App, AppState};
use crate::session::SessionState;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tweet_card};

const COLUMN_WIDTH: f32 = 600.0;

/// Render the feed screen.
///
/// `viewer` is the frame's session snapshot; edit/delete buttons only show
/// on tweets whose author id matches it.
pub fn render(
    ui: &mut egui::Ui,
    state: &AppState,
    viewer: &SessionState,
    app: &mut App,
    theme: &Theme,
) {
    let viewer_id = viewer.user.as_ref().map(|u| u.id);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(COLUMN_WIDTH);

                ui.add_space(10.0);
                render_compose_box(ui, state, app, theme);
                ui.add_space(10.0);

                if let Some(error) = state.feed.error() {
                    render_feed_error(ui, error, app, theme);
                    ui.add_space(8.0);
                }

                if state.feed.is_fetching() && state.feed.data().is_some() {
                    ui.label(egui::RichText::new("Refreshing...").size(12.0).color(theme.dim));
                    ui.add_space(4.0);
                }

                if state.feed.is_loading() {
                    render_skeletons(ui, theme);
                } else if let Some(tweets) = state.feed.data() {
                    if tweets.is_empty() {
                        ui.add_space(40.0);
                        ui.label(
                            egui::RichText::new("No tweets yet. Be the first to post!")
                                .size(16.0)
                                .color(theme.dim),
                        );
                    } else {
                        for tweet in tweets {
                            tweet_card::render_tweet_card(ui, state, tweet, viewer_id, app, theme);
                            ui.add_space(6.0);
                        }
                    }
                }

                ui.add_space(20.0);
            });
        });
}

fn render_compose_box(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());

        // Local copy for the text input, written back below.
        let mut body_input = state.compose_form.body.clone();
        let mut submit = false;

        let response = ui.add(
            egui::TextEdit::multiline(&mut body_input)
                .hint_text("What's happening?")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        if response.has_focus()
            && ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter))
        {
            submit = true;
        }

        {
            let mut state = app.state.write();
            state.compose_form.body = body_input;
        }

        if let Some(error) = state.compose_form.error.as_deref() {
            ui.label(egui::RichText::new(error).size(13.0).color(theme.error));
        }

        ui.horizontal(|ui| {
            let remaining = state.compose_form.remaining();
            let counter_color = if remaining < 0 {
                theme.error
            } else if remaining < 40 {
                theme.warning
            } else {
                theme.dim
            };
            ui.label(egui::RichText::new(remaining.to_string()).color(counter_color));
            forms::render_hint(ui, "Ctrl+Enter to post", theme);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let can_submit = !state.compose_form.submitting && remaining >= 0;
                let label = if state.compose_form.submitting {
                    "Posting..."
                } else {
                    "Tweet"
                };
                let button = egui::Button::new(
                    egui::RichText::new(label).color(egui::Color32::WHITE),
                )
                .fill(theme.accent);
                if ui.add_enabled(can_submit, button).clicked() || (submit && can_submit) {
                    app.handle_compose_submit();
                }
            });
        });
    });
}

fn render_feed_error(ui: &mut egui::Ui, error: &str, app: &mut App, theme: &Theme) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(error).color(theme.error));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Retry").clicked() {
                    app.handle_refresh_click();
                }
            });
        });
    });
}

/// Gray placeholder cards shown during the first load.
fn render_skeletons(ui: &mut egui::Ui, theme: &Theme) {
    for _ in 0..3 {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(36.0, 36.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, theme.border);

                ui.vertical(|ui| {
                    for width in [120.0, 320.0, 220.0] {
                        let (rect, _) = ui
                            .allocate_exact_size(egui::vec2(width, 12.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 4.0, theme.border);
                        ui.add_space(4.0);
                    }
                });
            });
        });
        ui.add_space(6.0);
    }
}
