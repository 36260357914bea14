//! Rectangle shape.

use super::{PATH_TOLERANCE, ShapeColor, ShapeId, ShapeTrait};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle positioned by its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Fill color.
    pub fill_color: ShapeColor,
}

impl Rectangle {
    /// Create a new black rectangle.
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            width,
            height,
            fill_color: ShapeColor::default(),
        }
    }

    /// Reconstruct a rectangle with a specific ID.
    pub(crate) fn reconstruct(
        id: ShapeId,
        center: Point,
        width: f64,
        height: f64,
        fill_color: ShapeColor,
    ) -> Self {
        Self {
            id,
            center,
            width,
            height,
            fill_color,
        }
    }

    /// Set the fill color.
    pub fn with_color(mut self, color: ShapeColor) -> Self {
        self.fill_color = color;
        self
    }

    /// Get the rectangle as a kurbo Rect (top-left = center minus half extents).
    pub fn as_rect(&self) -> Rect {
        Rect::from_center_size(self.center, Size::new(self.width, self.height))
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn center(&self) -> Point {
        self.center
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(PATH_TOLERANCE)
    }

    fn outline_path(&self, offset: f64) -> BezPath {
        self.as_rect().inflate(offset, offset).to_path(PATH_TOLERANCE)
    }

    fn fill_color(&self) -> ShapeColor {
        self.fill_color
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}
