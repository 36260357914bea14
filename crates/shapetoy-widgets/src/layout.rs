//! Frames, section labels and separators.

use egui::{Color32, CornerRadius, Frame, Margin, Pos2, Stroke, Ui};

use crate::{sizing, theme};

/// Floating side panel frame with a soft shadow.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(10))
}

/// Flat card for one item inside a panel.
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(theme::CARD_BG)
        .corner_radius(CornerRadius::same(sizing::CORNER_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::symmetric(10, 8))
}

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
        Stroke::new(1.0, Color32::from_gray(230)),
    );
    ui.add_space(8.0);
}

/// Small muted heading above a group of controls.
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(10.0).color(theme::TEXT_MUTED));
}
