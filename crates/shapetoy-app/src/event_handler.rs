//! Translates window input into canvas pointer events.

use kurbo::Point;
use shapetoy_core::{Modifiers, PointerEvent};
use winit::keyboard::ModifiersState;

/// Tracks cursor, button and modifier state between window events.
///
/// Positions are in canvas units. The canvas only ever sees the pointer
/// while it is over the canvas area; crossing out of it produces a
/// [`PointerEvent::Leave`].
#[derive(Debug, Default)]
pub struct EventHandler {
    modifiers: Modifiers,
    /// Cursor position while over the canvas.
    cursor: Option<Point>,
    /// Primary button went down on the canvas and has not been released.
    pressed: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn is_over_canvas(&self) -> bool {
        self.cursor.is_some()
    }

    /// Update the held modifier keys.
    pub fn modifiers_changed(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
            meta: state.super_key(),
        };
    }

    /// Cursor moved to `point`; `on_canvas` tells whether it is inside the
    /// canvas area.
    pub fn cursor_moved(&mut self, point: Point, on_canvas: bool) -> Option<PointerEvent> {
        if on_canvas {
            self.cursor = Some(point);
            Some(PointerEvent::Move { position: point })
        } else {
            self.cursor_left()
        }
    }

    /// Cursor left the canvas, the window, or was captured by the UI.
    pub fn cursor_left(&mut self) -> Option<PointerEvent> {
        self.pressed = false;
        self.cursor.take().map(|_| PointerEvent::Leave)
    }

    /// Primary button pressed.
    pub fn button_pressed(&mut self) -> Option<PointerEvent> {
        let position = self.cursor?;
        self.pressed = true;
        Some(PointerEvent::Down {
            position,
            modifiers: self.modifiers,
        })
    }

    /// Primary button released.
    pub fn button_released(&mut self) -> Option<PointerEvent> {
        if !std::mem::take(&mut self.pressed) {
            return None;
        }
        self.cursor.map(|position| PointerEvent::Up { position })
    }
}
