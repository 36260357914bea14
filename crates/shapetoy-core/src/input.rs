//! Pointer input vocabulary for the canvas.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

/// Pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, modifiers: Modifiers },
    Move { position: Point },
    Up { position: Point },
    /// The pointer left the interaction surface.
    Leave,
}

/// Primary button state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerState {
    #[default]
    Up,
    Down,
}

/// Tracks pointer position and button state across events.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    /// Current pointer position.
    pub position: Point,
    /// Position before the last move, for frame-to-frame deltas.
    pub previous_position: Point,
    state: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn is_down(&self) -> bool {
        self.state == PointerState::Down
    }

    /// Button pressed at `position`.
    pub fn press(&mut self, position: Point) {
        self.position = position;
        self.previous_position = position;
        self.state = PointerState::Down;
    }

    /// Pointer moved to `position`; returns the delta since the last event.
    pub fn move_to(&mut self, position: Point) -> Vec2 {
        self.previous_position = self.position;
        self.position = position;
        self.pointer_delta()
    }

    /// Button released (or pointer gone).
    pub fn release(&mut self) {
        self.state = PointerState::Up;
    }

    /// Get the pointer movement delta of the last move.
    pub fn pointer_delta(&self) -> Vec2 {
        self.position - self.previous_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.state(), PointerState::Up);

        tracker.press(Point::new(100.0, 100.0));
        assert!(tracker.is_down());
        assert_eq!(tracker.pointer_delta(), Vec2::ZERO);

        tracker.release();
        assert!(!tracker.is_down());
    }

    #[test]
    fn test_move_delta_is_frame_to_frame() {
        let mut tracker = PointerTracker::new();
        tracker.press(Point::new(100.0, 100.0));

        let first = tracker.move_to(Point::new(110.0, 105.0));
        assert!((first.x - 10.0).abs() < f64::EPSILON);
        assert!((first.y - 5.0).abs() < f64::EPSILON);

        let second = tracker.move_to(Point::new(111.0, 105.0));
        assert!((second.x - 1.0).abs() < f64::EPSILON);
        assert!(second.y.abs() < f64::EPSILON);
    }
}
