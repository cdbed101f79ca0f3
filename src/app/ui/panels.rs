//! Header and central message panel rendering

use eframe::egui;
use tracing::{debug, info};

use crate::app::TripChatApp;
use crate::ui::messages::render_message_list;
use crate::ui::theme::render_avatar;

/// Identicons shown next to the trip route.
const MEMBER_PREVIEW: usize = 3;

impl TripChatApp {
    /// Render the trip header: title row, then members and route.
    pub(in crate::app) fn render_header(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let trip = self.screen.state().trip().clone();
        let members: Vec<String> = self
            .screen
            .state()
            .member_preview(MEMBER_PREVIEW)
            .into_iter()
            .map(String::from)
            .collect();

        let mut refresh_clicked = false;
        let mut menu_action = None;

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface)
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .stroke(egui::Stroke::new(1.0, theme.border)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .button(egui::RichText::new("←").size(20.0).color(theme.text_primary))
                        .on_hover_text("Back")
                        .clicked()
                    {
                        info!("Back pressed");
                    }
                    ui.label(
                        egui::RichText::new(trip.display_name())
                            .heading()
                            .strong()
                            .color(theme.text_primary),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(egui::RichText::new("⟳").size(18.0).color(theme.text_primary))
                            .on_hover_text("Refresh (F5)")
                            .clicked()
                        {
                            refresh_clicked = true;
                        }
                        // Trip editing is not supported by the endpoint
                        let _ = ui
                            .button(egui::RichText::new("✏").color(theme.text_muted))
                            .on_hover_text("Edit trip");
                    });
                });

                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = -8.0;
                    for member in &members {
                        render_avatar(ui, member, 36.0);
                    }
                    ui.spacing_mut().item_spacing.x = 8.0;
                    ui.add_space(8.0);

                    let route_style = egui::TextStyle::Name("trip_route".into());
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("From").text_style(route_style.clone()).color(theme.text_muted));
                            ui.label(
                                egui::RichText::new(trip.display_from())
                                    .text_style(route_style.clone())
                                    .strong()
                                    .color(theme.text_primary),
                            );
                        });
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("To").text_style(route_style.clone()).color(theme.text_muted));
                            ui.label(
                                egui::RichText::new(trip.display_to())
                                    .text_style(route_style)
                                    .strong()
                                    .color(theme.text_primary),
                            );
                        });
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        menu_action = self.render_overflow_menu(ui);
                    });
                });
            });

        if refresh_clicked {
            self.refresh();
        }
        if let Some(action) = menu_action {
            self.handle_menu_action(action);
        }
    }

    /// Render the central panel with the message list.
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let outcome = egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.chat_background)
                    .inner_margin(egui::Margin::symmetric(0, 4)),
            )
            .show(ctx, |ui| {
                if let Some(reason) = self.screen.backend_error() {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(format!("Chat service unavailable: {}", reason))
                                .color(self.theme.error),
                        );
                    });
                }

                render_message_list(
                    ui,
                    self.screen.state(),
                    &self.theme,
                    &mut self.scroll_anchor,
                    &mut self.display_cache,
                    self.settings.load_more_threshold,
                )
            })
            .inner;

        if outcome.wants_more && self.screen.load_more() {
            debug!(after_page = self.screen.state().current_page(), "Loading older messages");
        }
    }
}
