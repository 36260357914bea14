//! Action buttons.

use egui::{Align2, Color32, CornerRadius, CursorIcon, FontId, Sense, Ui, vec2};

use crate::{sizing, theme};

/// Visual weight of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Filled accent button for the main action.
    Primary,
    /// Red button for destructive actions.
    Danger,
}

impl ButtonKind {
    fn fill(self, hovered: bool) -> Color32 {
        let base = match self {
            ButtonKind::Primary => theme::ACCENT,
            ButtonKind::Danger => theme::DANGER,
        };
        if hovered { base.gamma_multiply(0.85) } else { base }
    }
}

/// A filled text button.
pub struct ActionButton<'a> {
    label: &'a str,
    kind: ButtonKind,
    full_width: bool,
}

impl<'a> ActionButton<'a> {
    pub fn new(label: &'a str, kind: ButtonKind) -> Self {
        Self {
            label,
            kind,
            full_width: false,
        }
    }

    /// Stretch across the available width.
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font = FontId::proportional(13.0);
        let text_width = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font.clone(), Color32::PLACEHOLDER)
            .size()
            .x;
        let width = if self.full_width {
            ui.available_width()
        } else {
            text_width + 24.0
        };
        let (rect, response) = ui.allocate_exact_size(vec2(width, sizing::BUTTON_HEIGHT), Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                self.kind.fill(response.hovered()),
            );
            ui.painter()
                .text(rect.center(), Align2::CENTER_CENTER, self.label, font, Color32::WHITE);
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Full-width primary button.
pub fn primary_button(ui: &mut Ui, label: &str) -> bool {
    ActionButton::new(label, ButtonKind::Primary).full_width().show(ui)
}

/// Compact destructive button.
pub fn danger_button(ui: &mut Ui, label: &str) -> bool {
    ActionButton::new(label, ButtonKind::Danger).show(ui)
}
