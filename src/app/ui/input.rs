//! Composer panel

use eframe::egui;

use crate::app::TripChatApp;
use crate::validation::MAX_DRAFT_CHARS;

impl TripChatApp {
    /// Render the composer at the bottom of the window.
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let placeholder = self.settings.composer_placeholder.clone();
        let mut send_requested = false;

        egui::TopBottomPanel::bottom("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface)
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .stroke(egui::Stroke::new(1.0, theme.border)),
            )
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme.input_fill)
                    .stroke(egui::Stroke::new(1.0, theme.border))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            // Reserve room for the attach and send buttons
                            let edit_width = (ui.available_width() - 72.0).max(80.0);
                            let response = ui.add(
                                egui::TextEdit::multiline(&mut self.input.message_input)
                                    .desired_rows(1)
                                    .desired_width(edit_width)
                                    .frame(false)
                                    .char_limit(MAX_DRAFT_CHARS)
                                    .hint_text(placeholder.as_str()),
                            );
                            if response.changed() {
                                self.input.clamp();
                            }

                            // Enter sends, Shift+Enter inserts a newline
                            let enter = response.has_focus()
                                && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);
                            if enter {
                                // The inserted newline is trimmed off with the draft
                                send_requested = true;
                                response.request_focus();
                            }

                            self.render_attach_menu(ui);

                            let send = ui.add_enabled(
                                self.input.can_send(),
                                egui::Button::new(egui::RichText::new("➤").size(18.0).color(theme.accent))
                                    .frame(false),
                            );
                            if send.on_hover_text("Send").clicked() {
                                send_requested = true;
                            }
                        });
                    });
            });

        if send_requested {
            self.send_draft();
        }
    }

    /// Attachment picker. Uploading is not supported, so every entry is inert.
    fn render_attach_menu(&self, ui: &mut egui::Ui) {
        ui.menu_button(egui::RichText::new("📎").size(16.0).color(self.theme.text_muted), |ui| {
            ui.horizontal(|ui| {
                let _ = ui.button("📷").on_hover_text("Camera");
                let _ = ui.button("🎥").on_hover_text("Video");
                let _ = ui.button("📄").on_hover_text("Document");
            });
        });
    }
}
