//! Styled egui controls for the Shape Toy editor panel.
//!
//! - **Buttons**: primary and destructive action buttons
//! - **Colors**: swatches and a swatch row with a full color picker
//! - **Controls**: labelled range sliders and read-only value rows
//! - **Layout**: panel and card frames, section labels, separators

pub mod buttons;
pub mod colors;
pub mod controls;
pub mod layout;

pub use buttons::{ActionButton, ButtonKind, danger_button, primary_button};
pub use colors::{ColorSwatch, SWATCHES, color_row, colors_match};
pub use controls::{range_slider_row, readout_row, snap_to_step};
pub use layout::{card_frame, panel_frame, section_label, separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Color swatch size
    pub const SWATCH: f32 = 18.0;
    /// Action button height
    pub const BUTTON_HEIGHT: f32 = 28.0;
    /// Width of the label column in control rows
    pub const LABEL_WIDTH: f32 = 56.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Primary action color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Destructive action color (red)
    pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Card background inside panels
    pub const CARD_BG: Color32 = Color32::WHITE;
}
