// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Clickable star glyph used by the rating widget.

use eframe::egui;

/// Draw one star. `filled` selects the committed color; clicking is reported
/// through the returned response, the widget itself holds no state.
pub fn star_button(ui: &mut egui::Ui, filled: bool) -> egui::Response {
    let spacing = ui.style().spacing.interact_size;
    let side = spacing.y.max(24.0);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let how_filled = ui.ctx().animate_bool(response.id, filled);
        let unfilled = ui.visuals().weak_text_color();
        let amber = egui::Color32::from_rgb(0xF2, 0xA2, 0x13);
        let color = egui::Color32::from_rgba_unmultiplied(
            egui::lerp(unfilled.r() as f32..=amber.r() as f32, how_filled) as u8,
            egui::lerp(unfilled.g() as f32..=amber.g() as f32, how_filled) as u8,
            egui::lerp(unfilled.b() as f32..=amber.b() as f32, how_filled) as u8,
            egui::lerp(unfilled.a() as f32..=amber.a() as f32, how_filled) as u8,
        );

        if response.hovered() {
            ui.painter().rect_filled(
                rect.expand(2.0),
                4.0,
                ui.visuals().widgets.hovered.weak_bg_fill,
            );
        }

        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::STAR,
            egui::FontId::proportional(side * 0.85),
            color,
        );
    }

    response
}
