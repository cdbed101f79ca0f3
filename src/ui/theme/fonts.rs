//! Text styles and global egui style.

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use super::ChatTheme;

/// Text hierarchy for the chat screen.
///
/// - **Small**: 11px, bubble timestamps
/// - **Body**: 15px, message text
/// - **Heading**: 18px, trip title
/// - **separator**: 12px, day separator pill
/// - **trip_route**: 12px, From/To lines in the header
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(11.0, Proportional)),
        (TextStyle::Body, FontId::new(15.0, Proportional)),
        (TextStyle::Button, FontId::new(14.0, Proportional)),
        (TextStyle::Heading, FontId::new(18.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (TextStyle::Name("separator".into()), FontId::new(12.0, Proportional)),
        (TextStyle::Name("trip_route".into()), FontId::new(12.0, Proportional)),
    ]
    .into()
}

/// Apply text styles, spacing and widget colours for `theme`.
pub fn apply_app_style(ctx: &egui::Context, theme: &ChatTheme) {
    if theme.is_dark() {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }

    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(8.0, 5.0);

    style.visuals.panel_fill = theme.surface;
    style.visuals.window_fill = theme.surface;
    style.visuals.extreme_bg_color = theme.input_fill;
    style.visuals.hyperlink_color = theme.accent;
    style.visuals.selection.bg_fill = theme.accent.linear_multiply(0.35);

    for widget in [
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.corner_radius = egui::CornerRadius::same(16);
        widget.bg_stroke = egui::Stroke::NONE;
    }
    style.visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
    style.visuals.widgets.hovered.weak_bg_fill = theme.separator_fill;
    style.visuals.widgets.active.weak_bg_fill = theme.accent.linear_multiply(0.3);

    ctx.set_style(style);
}
