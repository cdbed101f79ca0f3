//! Avatar identicons and the verified badge.
//!
//! Remote avatar images are not fetched; each sender gets a deterministic
//! identicon derived from their user id instead.

use eframe::egui::{self, Color32};

use super::colors::avatar_color;

/// Render a circular 5x5 mirrored identicon for `user_id`.
pub fn render_avatar(ui: &mut egui::Ui, user_id: &str, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, avatar_color(user_id));

    let pattern = generate_identicon_pattern(user_id);
    let fg_color = Color32::from_white_alpha(200);
    let cell_size = size / 6.0;
    let offset = cell_size * 0.5;

    for row in 0..5 {
        for col in 0..5 {
            // Columns 3 and 4 mirror 1 and 0
            let pattern_col = if col < 3 { col } else { 4 - col };
            let bit_index = row * 3 + pattern_col;
            if pattern & (1 << bit_index) == 0 {
                continue;
            }

            let cell_x = rect.left() + offset + (col as f32 * cell_size);
            let cell_y = rect.top() + offset + (row as f32 * cell_size);
            let center = egui::pos2(cell_x + cell_size / 2.0, cell_y + cell_size / 2.0);

            // Clip to the circle
            if (center - rect.center()).length() < size / 2.0 - cell_size * 0.3 {
                painter.rect_filled(
                    egui::Rect::from_min_size(
                        egui::pos2(cell_x, cell_y),
                        egui::vec2(cell_size * 0.85, cell_size * 0.85),
                    ),
                    cell_size * 0.2,
                    fg_color,
                );
            }
        }
    }

    painter.circle_stroke(
        rect.center(),
        size / 2.0,
        egui::Stroke::new(2.0, ui.visuals().panel_fill),
    );

    response
}

/// 15-bit pattern for a mirrored 5x5 identicon (3 distinct columns x 5 rows).
pub fn generate_identicon_pattern(seed: &str) -> u16 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in seed.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }

    // Keep a couple of centre cells filled so no avatar is blank
    (hash as u16 & 0x7FFF) | 0x0084
}

/// Small filled circle with a check mark, drawn over an avatar's corner.
pub fn render_verified_badge(ui: &mut egui::Ui, anchor: egui::Rect, color: Color32) {
    let radius = (anchor.width() * 0.18).max(5.0);
    let center = anchor.right_bottom() - egui::vec2(radius * 0.6, radius * 0.6);
    let painter = ui.painter();

    painter.circle_filled(center, radius, color);
    painter.circle_stroke(center, radius, egui::Stroke::new(1.5, ui.visuals().panel_fill));

    let stroke = egui::Stroke::new(1.5, Color32::WHITE);
    let a = center + egui::vec2(-radius * 0.45, 0.0);
    let b = center + egui::vec2(-radius * 0.1, radius * 0.4);
    let c = center + egui::vec2(radius * 0.5, -radius * 0.35);
    painter.line_segment([a, b], stroke);
    painter.line_segment([b, c], stroke);
}
