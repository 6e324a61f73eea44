//! # Notifications Widget
//!
//! Toast notification system using egui-notify for mutation confirmations
//! and background failures that have no inline place to land.

use std::time::Duration;

use egui_notify::Toasts;

use crate::app::{Notice, NoticeLevel};

/// Notification manager for the application.
pub struct NotificationManager {
    /// Toast notification system.
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success toast.
    pub fn success(&mut self, message: String) {
        self.toasts
            .success(message)
            .duration(Some(Duration::from_secs(3)));
    }

    /// Show an error toast.
    pub fn error(&mut self, message: String) {
        self.toasts
            .error(message)
            .duration(Some(Duration::from_secs(5)));
    }

    /// Display notices queued by the event handler this frame.
    pub fn absorb(&mut self, notices: Vec<Notice>) {
        for notice in notices {
            match notice.level {
                NoticeLevel::Success => self.success(notice.message),
                NoticeLevel::Error => self.error(notice.message),
            }
        }
    }

    /// Render pending toasts. Call once per frame after the panels.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
