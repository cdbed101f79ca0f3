//! Main update loop and global shortcuts

use eframe::egui;
use std::time::{Duration, Instant};

use super::TripChatApp;
use crate::ui::toasts::{purge_expired, render_status_toasts, TOAST_TTL};

impl eframe::App for TripChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fold in fetch results
        self.process_events();

        // F5 / Ctrl+R: refresh from the first page
        let refresh = ctx.input(|i| {
            i.key_pressed(egui::Key::F5) || (i.modifiers.command && i.key_pressed(egui::Key::R))
        });
        if refresh {
            self.refresh();
        }

        // Keep polling for backend events while idle
        ctx.request_repaint_after(Duration::from_millis(100));
        purge_expired(&mut self.status_messages, Instant::now(), TOAST_TTL);

        // Panels must be added before the central panel
        self.render_header(ctx);
        self.render_input_panel(ctx);
        self.render_central_panel(ctx);

        self.render_error_alert(ctx);
        render_status_toasts(ctx, &self.status_messages, &self.theme);
    }
}
