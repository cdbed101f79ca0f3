//! Inverted message list: newest message at the bottom, older pages load as
//! the user scrolls toward the top.

use chrono::Local;
use eframe::egui::{self, Color32, CornerRadius};

use crate::message::Message;
use crate::state::{FetchKind, FetchRequest, ViewState};
use crate::ui::theme::{render_avatar, render_verified_badge, ChatTheme};

use super::format::render_message_text;
use super::helpers::{should_load_more, CachedRow, DisplayCache, ScrollAnchor};

const AVATAR_SIZE: f32 = 32.0;
const BUBBLE_WIDTH_RATIO: f32 = 0.75;

/// What the list observed this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListOutcome {
    /// The viewport is near the oldest loaded message and another page may
    /// be requested.
    pub wants_more: bool,
}

/// Render the message list for `state`.
///
/// `threshold` is the fraction of the viewport height from the top at which
/// the next page is requested.
pub fn render_message_list(
    ui: &mut egui::Ui,
    state: &ViewState,
    theme: &ChatTheme,
    anchor: &mut ScrollAnchor,
    cache: &mut DisplayCache,
    threshold: f32,
) -> ListOutcome {
    let messages = state.messages();

    if messages.is_empty() {
        render_empty(ui, state, theme);
        return ListOutcome::default();
    }

    let today = Local::now().date_naive();
    let rows = cache.rows(messages, state.revision(), &Local, today);
    let loading_older = matches!(
        state.in_flight(),
        Some(FetchRequest {
            kind: FetchKind::More,
            ..
        })
    );

    let mut scroll = egui::ScrollArea::vertical()
        .id_salt("message_list")
        .auto_shrink([false; 2])
        .stick_to_bottom(true);
    if let Some(offset) = anchor.take_pending_offset() {
        scroll = scroll.vertical_scroll_offset(offset);
    }

    let output = scroll.show(ui, |ui| {
        ui.add_space(8.0);
        if loading_older {
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(18.0));
            });
            ui.add_space(4.0);
        }

        // Items are newest-first; draw them oldest at the top
        for row in rows.iter().rev() {
            match row {
                CachedRow::Separator(label) => render_separator(ui, label, theme),
                CachedRow::Message { index, time_label } => {
                    let Some(message) = messages.get(*index) else {
                        continue;
                    };
                    if message.sender.is_self {
                        render_own_bubble(ui, message, time_label, theme);
                    } else {
                        render_other_bubble(ui, message, time_label, theme);
                    }
                }
            }
            ui.add_space(6.0);
        }
        ui.add_space(8.0);
    });

    let offset_y = output.state.offset.y;
    let viewport_height = output.inner_rect.height();
    let content_height = output.content_size.y;
    anchor.observe(content_height, offset_y);

    ListOutcome {
        wants_more: state.has_more()
            && !state.is_loading()
            && should_load_more(offset_y, viewport_height, content_height, threshold),
    }
}

fn render_empty(ui: &mut egui::Ui, state: &ViewState, theme: &ChatTheme) {
    ui.centered_and_justified(|ui| {
        if state.is_loading() {
            ui.add(egui::Spinner::new().size(28.0));
        } else if state.last_error().is_some() {
            ui.label(egui::RichText::new("Couldn't load messages. Refresh to try again.").color(theme.text_muted));
        } else {
            ui.label(egui::RichText::new("No messages yet").color(theme.text_muted));
        }
    });
}

fn render_separator(ui: &mut egui::Ui, label: &str, theme: &ChatTheme) {
    ui.add_space(4.0);
    ui.vertical_centered(|ui| {
        egui::Frame::new()
            .fill(theme.separator_fill)
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(12, 4))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(label)
                        .text_style(egui::TextStyle::Name("separator".into()))
                        .color(theme.separator_text),
                );
            });
    });
    ui.add_space(4.0);
}

fn render_own_bubble(ui: &mut egui::Ui, message: &Message, time_label: &str, theme: &ChatTheme) {
    let max_width = ui.available_width() * BUBBLE_WIDTH_RATIO;

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        ui.add_space(12.0);
        bubble_frame(theme.own_bubble, true).show(ui, |ui| {
            ui.set_max_width(max_width);
            ui.vertical(|ui| {
                render_message_text(ui, &message.text, theme.own_text, theme.own_text);
                render_time(ui, time_label, theme.own_time);
            });
        });
    });
}

fn render_other_bubble(ui: &mut egui::Ui, message: &Message, time_label: &str, theme: &ChatTheme) {
    let max_width = (ui.available_width() - AVATAR_SIZE) * BUBBLE_WIDTH_RATIO;

    ui.horizontal_top(|ui| {
        ui.add_space(12.0);
        let avatar = render_avatar(ui, &message.sender.user_id, AVATAR_SIZE);
        if message.sender.is_verified {
            render_verified_badge(ui, avatar.rect, theme.verified);
        }

        bubble_frame(theme.other_bubble, false).show(ui, |ui| {
            ui.set_max_width(max_width);
            ui.vertical(|ui| {
                render_message_text(ui, &message.text, theme.other_text, theme.accent);
                render_time(ui, time_label, theme.other_time);
            });
        });
    });
}

/// Rounded bubble with the corner nearest the sender squared off.
fn bubble_frame(fill: Color32, own: bool) -> egui::Frame {
    let corner_radius = if own {
        CornerRadius { nw: 16, ne: 16, sw: 16, se: 4 }
    } else {
        CornerRadius { nw: 4, ne: 16, sw: 16, se: 16 }
    };

    egui::Frame::new()
        .fill(fill)
        .corner_radius(corner_radius)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

fn render_time(ui: &mut egui::Ui, time_label: &str, color: Color32) {
    ui.label(
        egui::RichText::new(time_label)
            .text_style(egui::TextStyle::Small)
            .color(color),
    );
}
