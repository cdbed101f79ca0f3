//! Header overflow menu and the load-failure alert

use eframe::egui;
use tracing::info;

use crate::app::events::LOAD_FAILED_TITLE;
use crate::app::TripChatApp;

/// Entries of the header overflow menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Members,
    ShareNumber,
    Report,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [MenuAction::Members, MenuAction::ShareNumber, MenuAction::Report];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Members => "Members",
            MenuAction::ShareNumber => "Share Number",
            MenuAction::Report => "Report",
        }
    }
}

impl TripChatApp {
    /// Render the "⋮" menu button; returns the entry picked this frame.
    pub(in crate::app) fn render_overflow_menu(&self, ui: &mut egui::Ui) -> Option<MenuAction> {
        let mut picked = None;
        ui.menu_button(
            egui::RichText::new("⋮").size(20.0).color(self.theme.text_primary),
            |ui| {
                for action in MenuAction::ALL {
                    if ui.button(action.label()).clicked() {
                        picked = Some(action);
                        ui.close_menu();
                    }
                }
            },
        );
        picked
    }

    /// None of the menu entries have a backing endpoint; they are logged and
    /// acknowledged.
    pub(in crate::app) fn handle_menu_action(&mut self, action: MenuAction) {
        info!(action = action.label(), "Menu action selected");
        self.push_status(format!("{} is not available yet", action.label()));
    }

    /// Modal alert for a failed fetch, shown until dismissed.
    pub(in crate::app) fn render_error_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_alert.clone() else {
            return;
        };

        let mut dismissed = false;
        let mut retry = false;

        egui::Window::new(LOAD_FAILED_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(message).color(self.theme.text_primary));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                    if ui.button("Retry").clicked() {
                        retry = true;
                    }
                });
            });

        if retry {
            self.dismiss_alert();
            self.refresh();
        } else if dismissed {
            self.dismiss_alert();
        }
    }
}
