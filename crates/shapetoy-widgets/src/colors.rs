//! Color swatches and the fill color row.

use egui::{Color32, CornerRadius, CursorIcon, Rect, Sense, Stroke, StrokeKind, Ui, vec2};

use crate::{sizing, theme};

/// Quick-pick fill colors, named as in CSS.
pub const SWATCHES: [(&str, Color32); 9] = [
    ("black", Color32::from_rgb(0, 0, 0)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("white", Color32::from_rgb(255, 255, 255)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("purple", Color32::from_rgb(128, 0, 128)),
];

/// Compare two colors ignoring alpha.
pub fn colors_match(a: Color32, b: Color32) -> bool {
    a.r() == b.r() && a.g() == b.g() && a.b() == b.b()
}

/// A clickable square of color.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
}

impl<'a> ColorSwatch<'a> {
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(vec2(sizing::SWATCH, sizing::SWATCH), Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(rect, radius, self.color);
            // Light swatches would vanish on the white card.
            let outline = if self.selected {
                Stroke::new(2.0, theme::ACCENT)
            } else {
                Stroke::new(1.0, theme::BORDER)
            };
            ui.painter().rect_stroke(rect, radius, outline, StrokeKind::Inside);
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// Swatch palette plus a full color picker button.
///
/// Returns true when `color` was changed.
pub fn color_row(ui: &mut Ui, color: &mut Color32) -> bool {
    let mut changed = false;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(4.0, 4.0);
        for (name, swatch) in SWATCHES {
            let (clicked, _) = ColorSwatch::new(swatch, name)
                .selected(colors_match(*color, swatch))
                .show(ui);
            if clicked && *color != swatch {
                *color = swatch;
                changed = true;
            }
        }
        if egui::color_picker::color_edit_button_srgba(ui, color, egui::color_picker::Alpha::Opaque).changed() {
            changed = true;
        }
    });
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_match_ignores_alpha() {
        assert!(colors_match(
            Color32::from_rgb(10, 20, 30),
            Color32::from_rgba_unmultiplied(10, 20, 30, 128)
        ));
        assert!(!colors_match(Color32::BLACK, Color32::WHITE));
    }

    #[test]
    fn test_swatch_names_are_unique() {
        for (i, (name, _)) in SWATCHES.iter().enumerate() {
            assert!(SWATCHES[i + 1..].iter().all(|(other, _)| other != name));
        }
    }
}
