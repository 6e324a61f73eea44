//! # Navigation Bar
//!
//! Top bar with the brand mark, the viewer identity, and logout.
//! Only rendered when a session exists.

use egui;

use crate::app::{App, AppState, Screen};
use crate::session::SessionState;
use crate::ui::theme::Theme;

/// Render the top navigation bar.
///
/// `viewer` is the frame's session snapshot; the bar never reads the live
/// store, so the name label matches what the rest of the frame renders.
pub fn render_nav_bar(
    ui: &mut egui::Ui,
    state: &AppState,
    viewer: &SessionState,
    app: &mut App,
    theme: &Theme,
) {
    ui.horizontal(|ui| {
        ui.set_height(35.0);

        let brand = egui::Button::new(
            egui::RichText::new("MiniTweet")
                .size(18.0)
                .strong()
                .color(theme.accent),
        )
        .frame(false);
        if ui.add(brand).clicked() {
            app.handle_screen_change(Screen::Feed);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let logout = egui::Button::new("Log out");
            if ui.add_enabled(!state.logging_out, logout).clicked() {
                app.handle_logout_click();
            }

            if ui.button("⟳ Refresh").clicked() {
                app.handle_refresh_click();
            }

            if let Some(user) = viewer.user.as_ref() {
                ui.label(egui::RichText::new(&user.name).color(theme.dim));
            }
        });
    });
}
