//! # GUI Theme
//!
//! Light timeline theme for egui. White cards on a soft gray canvas with a
//! sky-blue accent, pink for likes and green for retweets.

use egui::{Color32, Context, Stroke, Visuals};

/// Resolved color palette handed to widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Normal text color.
    pub normal: Color32,
    /// Secondary text (timestamps, counters, hints).
    pub dim: Color32,
    /// Primary accent (buttons, links, the brand mark).
    pub accent: Color32,
    /// Like button when the viewer has liked.
    pub like: Color32,
    /// Retweet button when the viewer has retweeted.
    pub retweet: Color32,
    /// Counter approaching the character cap.
    pub warning: Color32,
    /// Error messages and destructive actions.
    pub error: Color32,
    /// Card and panel borders.
    pub border: Color32,
    /// Window background behind the cards.
    pub background: Color32,
    /// Card background.
    pub card: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal: Color32::from_rgb(15, 20, 25),
            dim: Color32::from_rgb(83, 100, 113),
            accent: Color32::from_rgb(29, 155, 240),
            like: Color32::from_rgb(249, 24, 128),
            retweet: Color32::from_rgb(0, 186, 124),
            warning: Color32::from_rgb(255, 173, 20),
            error: Color32::from_rgb(220, 38, 38),
            border: Color32::from_rgb(207, 217, 222),
            background: Color32::from_rgb(245, 248, 250),
            card: Color32::WHITE,
        }
    }
}

impl Theme {
    /// Build egui visuals from the palette.
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(self.normal);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.card;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.faint_bg_color = Color32::from_rgb(239, 243, 244);
        visuals.extreme_bg_color = self.card;

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.bg_fill = Color32::from_rgb(239, 243, 244);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(239, 243, 244);
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(224, 236, 244);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_fill = Color32::from_rgb(204, 228, 242);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(29, 155, 240, 70);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;

        visuals
    }

    /// Apply the theme to the egui context. Called once at startup.
    ///
    /// Uses `style_mut_of` for both built-in themes so a platform-driven
    /// dark/light switch cannot bring back egui's defaults mid-session.
    pub fn apply(ctx: &Context) {
        let theme = Theme::default();
        let visuals = theme.visuals();

        for egui_theme in [egui::Theme::Light, egui::Theme::Dark] {
            let visuals = visuals.clone();
            ctx.style_mut_of(egui_theme, move |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.window_margin = egui::Margin::same(12);
            });
        }
    }
}
