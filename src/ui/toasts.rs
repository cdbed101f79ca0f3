//! Floating status toasts at the top of the chat list.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::ui::theme::ChatTheme;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Drop toasts older than `ttl`.
pub fn purge_expired(status_messages: &mut Vec<(String, Instant)>, now: Instant, ttl: Duration) {
    status_messages.retain(|(_, shown_at)| now.saturating_duration_since(*shown_at) < ttl);
}

/// Render floating status toasts, newest last.
pub fn render_status_toasts(ctx: &egui::Context, status_messages: &[(String, Instant)], theme: &ChatTheme) {
    if status_messages.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("status_toast_area"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 84.0]) // Below the header
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.text_primary.gamma_multiply(0.85))
                .corner_radius(12.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    for (msg, _) in status_messages {
                        ui.label(egui::RichText::new(msg).color(theme.surface));
                    }
                });
        });
}
