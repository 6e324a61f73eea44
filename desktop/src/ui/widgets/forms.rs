//! # Form Components
//!
//! Reusable form elements for consistent UI across screens.

use egui;

use crate::ui::theme::Theme;

/// Render a labelled single-line text input.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
    size: [f32; 2],
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add_sized(
        size,
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint),
    )
}

/// Render a filled accent button.
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    theme: &Theme,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let mut button = egui::Button::new(
        egui::RichText::new(text)
            .size(15.0)
            .color(egui::Color32::WHITE),
    )
    .fill(theme.accent);

    if let Some(size) = min_size {
        button = button.min_size(size);
    }

    ui.add(button)
}

/// Render a form heading.
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(
        egui::RichText::new(text)
            .size(24.0)
            .strong()
            .color(theme.normal),
    );
    ui.add_space(20.0);
}

/// Render an inline error message.
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).size(14.0).color(theme.error));
    ui.add_space(10.0);
}

/// Render a hint line under a form.
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(13.0).color(theme.dim));
}
