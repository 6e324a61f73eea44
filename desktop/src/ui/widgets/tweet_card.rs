//! # Tweet Card Widget
//!
//! One feed entry: author line, body, and the reaction row.

use egui;
use shared::dto::tweets::Tweet;
use shared::utils::{author_initial, format_timestamp};

use crate::app::{App, AppState};
use crate::ui::theme::Theme;

/// Render a single tweet card.
///
/// `viewer_id` decides whether the author-only Edit/Delete actions show.
/// Reaction buttons disable while their request is in flight, so a second
/// click cannot race the first.
pub fn render_tweet_card(
    ui: &mut egui::Ui,
    state: &AppState,
    tweet: &Tweet,
    viewer_id: Option<i64>,
    app: &mut App,
    theme: &Theme,
) {
    let is_author = viewer_id == Some(tweet.user.id);

    ui.group(|ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            render_avatar(ui, &tweet.user.name, theme);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&tweet.user.name).strong());
                    ui.label(
                        egui::RichText::new(format_timestamp(&tweet.created_at))
                            .size(12.0)
                            .color(theme.dim),
                    );
                    if tweet.updated_at > tweet.created_at {
                        ui.label(egui::RichText::new("edited").size(12.0).color(theme.dim));
                    }

                    if is_author {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui
                                    .button(egui::RichText::new("Delete").color(theme.error))
                                    .clicked()
                                {
                                    app.handle_delete_request(tweet.id);
                                }
                                if ui.button("Edit").clicked() {
                                    app.handle_edit_open(tweet.id);
                                }
                            },
                        );
                    }
                });

                ui.add_space(2.0);
                ui.label(egui::RichText::new(&tweet.body).size(15.0));
                ui.add_space(6.0);

                render_reaction_row(ui, state, tweet, app, theme);
            });
        });
    });
}

/// Circular avatar with the author's initial.
fn render_avatar(ui: &mut egui::Ui, name: &str, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(36.0, 36.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 18.0, theme.accent);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        author_initial(name),
        egui::FontId::proportional(16.0),
        egui::Color32::WHITE,
    );
}

fn render_reaction_row(
    ui: &mut egui::Ui,
    state: &AppState,
    tweet: &Tweet,
    app: &mut App,
    theme: &Theme,
) {
    ui.horizontal(|ui| {
        let like_color = if tweet.liked { theme.like } else { theme.dim };
        let like_label = format!("♥ {}", tweet.likes_count);
        let like_pending = state.pending_likes.contains(&tweet.id);
        let like_button =
            egui::Button::new(egui::RichText::new(like_label).color(like_color)).frame(false);
        if ui.add_enabled(!like_pending, like_button).clicked() {
            app.handle_like_click(tweet.id);
        }

        ui.add_space(12.0);

        let retweet_color = if tweet.retweeted {
            theme.retweet
        } else {
            theme.dim
        };
        let retweet_label = format!("⟳ {}", tweet.retweets_count);
        let retweet_pending = state.pending_retweets.contains(&tweet.id);
        let retweet_button =
            egui::Button::new(egui::RichText::new(retweet_label).color(retweet_color)).frame(false);
        if ui.add_enabled(!retweet_pending, retweet_button).clicked() {
            app.handle_retweet_click(tweet.id);
        }
    });
}
