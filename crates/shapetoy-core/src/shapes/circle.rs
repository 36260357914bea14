//! Circle shape.

use super::{PATH_TOLERANCE, ShapeColor, ShapeId, ShapeTrait};
use kurbo::{BezPath, Circle as KurboCircle, Point, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A full disc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Fill color.
    pub fill_color: ShapeColor,
}

impl Circle {
    /// Create a new black circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius,
            fill_color: ShapeColor::default(),
        }
    }

    /// Reconstruct a circle with a specific ID.
    pub(crate) fn reconstruct(id: ShapeId, center: Point, radius: f64, fill_color: ShapeColor) -> Self {
        Self {
            id,
            center,
            radius,
            fill_color,
        }
    }

    /// Set the fill color.
    pub fn with_color(mut self, color: ShapeColor) -> Self {
        self.fill_color = color;
        self
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn center(&self) -> Point {
        self.center
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(PATH_TOLERANCE)
    }

    fn outline_path(&self, offset: f64) -> BezPath {
        KurboCircle::new(self.center, self.radius + offset).to_path(PATH_TOLERANCE)
    }

    fn fill_color(&self) -> ShapeColor {
        self.fill_color
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_creation() {
        let circle = Circle::new(Point::new(50.0, 50.0), 30.0);
        assert!((circle.center.x - 50.0).abs() < f64::EPSILON);
        assert!((circle.radius - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fill_path_contains() {
        let path = Circle::new(Point::new(0.0, 0.0), 10.0).to_path();
        assert!(path.contains(Point::new(0.0, 0.0)));
        assert!(path.contains(Point::new(9.5, 0.0)));
        assert!(!path.contains(Point::new(15.0, 0.0)));
        // Inside the bounding box but outside the disc
        assert!(!path.contains(Point::new(9.0, 9.0)));
    }

    #[test]
    fn test_fill_path_bounds() {
        let circle = Circle::new(Point::new(50.0, 50.0), 30.0);
        let bounds = circle.to_path().bounding_box();
        assert!((bounds.x0 - 20.0).abs() < 1e-9);
        assert!((bounds.y0 - 20.0).abs() < 1e-9);
        assert!((bounds.x1 - 80.0).abs() < 1e-9);
        assert!((bounds.y1 - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_outline_radius() {
        let circle = Circle::new(Point::new(0.0, 0.0), 10.0);
        let outline = circle.outline_path(2.0).bounding_box();
        assert!((outline.x1 - 12.0).abs() < 1e-2);
    }
}
