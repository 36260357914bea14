//! Shape definitions for the editor canvas.

mod circle;
mod record;
mod rectangle;

pub use circle::Circle;
pub use record::{ShapeRecord, shapes_from_json};
pub use rectangle::Rectangle;

use kurbo::{BezPath, Point, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Tolerance used when flattening curved outlines into paths.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Errors raised at the shape model boundary.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The record does not describe any known shape variant.
    #[error("Unrecognized shape variant: {0:?}")]
    UnrecognizedVariant(String),
    #[error("Invalid {field}: {value} (must be positive and finite)")]
    InvalidDimension { field: &'static str, value: f64 },
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Invalid shape id: {0:?}")]
    InvalidId(String),
    #[error("Malformed shape record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable fill color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ShapeColor {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse `#rrggbb`, `#rrggbbaa`, `#rgb` or a basic CSS color name.
    pub fn parse(s: &str) -> Result<Self, ShapeError> {
        let s = s.trim();
        let invalid = || ShapeError::InvalidColor(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return match hex.len() {
                6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
                8 => Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
                3 => {
                    let short = |i: usize| {
                        u8::from_str_radix(&hex[i..=i], 16)
                            .map(|v| v * 17)
                            .map_err(|_| invalid())
                    };
                    Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
                }
                _ => Err(invalid()),
            };
        }

        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "red" => Ok(Self::RED),
            "green" => Ok(Self::GREEN),
            "blue" => Ok(Self::BLUE),
            "yellow" => Ok(Self::rgb(255, 255, 0)),
            "orange" => Ok(Self::rgb(255, 165, 0)),
            "purple" => Ok(Self::rgb(128, 0, 128)),
            "gray" | "grey" => Ok(Self::rgb(128, 128, 128)),
            _ => Err(invalid()),
        }
    }

    /// Format as `#rrggbb` (alpha is dropped when opaque).
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for ShapeColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Discriminant of the closed set of shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common trait for all shape variants.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the center point in canvas coordinates.
    fn center(&self) -> Point;

    /// Get the fill path.
    fn to_path(&self) -> BezPath;

    /// Get the outline path grown outward by `offset`.
    fn outline_path(&self, offset: f64) -> BezPath;

    /// Get the fill color.
    fn fill_color(&self) -> ShapeColor;

    /// Move the shape by `delta`.
    fn translate(&mut self, delta: Vec2);
}

/// A drawable shape. The variant set is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn center(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.center(),
            Shape::Circle(s) => s.center(),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Rectangle(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
        }
    }

    pub fn outline_path(&self, offset: f64) -> BezPath {
        match self {
            Shape::Rectangle(s) => s.outline_path(offset),
            Shape::Circle(s) => s.outline_path(offset),
        }
    }

    pub fn fill_color(&self) -> ShapeColor {
        match self {
            Shape::Rectangle(s) => s.fill_color(),
            Shape::Circle(s) => s.fill_color(),
        }
    }

    pub fn set_fill_color(&mut self, color: ShapeColor) {
        match self {
            Shape::Rectangle(s) => s.fill_color = color,
            Shape::Circle(s) => s.fill_color = color,
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Rectangle(s) => s.translate(delta),
            Shape::Circle(s) => s.translate(delta),
        }
    }

    /// Copy of this shape moved by `delta`; everything else is untouched.
    pub fn translated(&self, delta: Vec2) -> Shape {
        let mut moved = self.clone();
        moved.translate(delta);
        moved
    }

    /// Replace the shape's ID with a fresh unique identifier.
    pub fn regenerate_id(&mut self) {
        let new_id = Uuid::new_v4();
        match self {
            Shape::Rectangle(s) => s.id = new_id,
            Shape::Circle(s) => s.id = new_id,
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Shape::Rectangle(r) => Some(r),
            Shape::Circle(_) => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            Shape::Rectangle(_) => None,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

/// Reject non-positive or non-finite extents.
pub(crate) fn check_dimension(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension { field, value })
    }
}
