//! Shape painting strategy.
//!
//! Fill geometry doubles as hit-test geometry; outlines are emphasis-only and
//! are never returned to the hit cache.

use crate::shapes::{Shape, ShapeColor};
use crate::surface::Surface;
use kurbo::BezPath;
use peniko::Color;

/// Stroke width of every emphasis outline.
pub const OUTLINE_WIDTH: f64 = 4.0;

/// Visual emphasis applied around a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Shape is in the selection set.
    Selected,
    /// Pointer is over the shape.
    Hover,
}

impl Emphasis {
    /// Distance the outline is pushed out from the fill edge.
    pub fn offset(self) -> f64 {
        match self {
            Emphasis::Selected => 2.0,
            Emphasis::Hover => 6.0,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Emphasis::Selected => ShapeColor::BLUE.into(),
            Emphasis::Hover => ShapeColor::RED.into(),
        }
    }
}

/// Filled region of a shape: an axis-aligned box or a full disc.
pub fn fill_geometry(shape: &Shape) -> BezPath {
    shape.to_path()
}

/// Outline of the same shape family grown by the emphasis offset.
pub fn outline_geometry(shape: &Shape, emphasis: Emphasis) -> BezPath {
    shape.outline_path(emphasis.offset())
}

/// Fill `shape` onto `surface` and return the fill path for hit-testing.
pub fn paint_fill<S: Surface + ?Sized>(shape: &Shape, surface: &mut S) -> BezPath {
    let path = fill_geometry(shape);
    surface.fill_path(&path, shape.fill_color().into());
    path
}

/// Stroke the emphasis outline of `shape` onto `surface`.
pub fn paint_outline<S: Surface + ?Sized>(shape: &Shape, emphasis: Emphasis, surface: &mut S) -> BezPath {
    let path = outline_geometry(shape, emphasis);
    surface.stroke_path(&path, OUTLINE_WIDTH, emphasis.color());
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle};
    use crate::surface::{DisplayList, DrawCommand};
    use kurbo::{Point, Shape as _, Size};

    fn canvas() -> DisplayList {
        DisplayList::new(Size::new(500.0, 500.0))
    }

    #[test]
    fn test_rectangle_fill_geometry() {
        let shape: Shape = Rectangle::new(Point::new(100.0, 100.0), 50.0, 40.0).into();
        let bounds = fill_geometry(&shape).bounding_box();
        assert!((bounds.x0 - 75.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 80.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 125.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_circle_fill_contains_center() {
        let shape: Shape = Circle::new(Point::new(200.0, 200.0), 30.0).into();
        let path = fill_geometry(&shape);
        assert!(path.contains(Point::new(200.0, 200.0)));
        assert!(!path.contains(Point::new(225.0, 225.0)));
    }

    #[test]
    fn test_outline_offsets() {
        let shape: Shape = Rectangle::new(Point::new(100.0, 100.0), 50.0, 50.0).into();
        let selected = outline_geometry(&shape, Emphasis::Selected).bounding_box();
        let hover = outline_geometry(&shape, Emphasis::Hover).bounding_box();
        assert!((selected.x0 - 73.0).abs() < f64::EPSILON);
        assert!((hover.x0 - 69.0).abs() < f64::EPSILON);
        assert!((hover.x1 - 131.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_paint_fill_returns_painted_path() {
        let shape: Shape = Circle::new(Point::new(50.0, 50.0), 10.0)
            .with_color(ShapeColor::BLUE)
            .into();
        let mut surface = canvas();

        let path = paint_fill(&shape, &mut surface);

        assert_eq!(
            surface.commands(),
            &[DrawCommand::Fill {
                path,
                color: ShapeColor::BLUE.into()
            }]
        );
    }

    #[test]
    fn test_paint_outline_uses_emphasis_style() {
        let shape: Shape = Rectangle::new(Point::new(50.0, 50.0), 10.0, 10.0).into();
        let mut surface = canvas();

        paint_outline(&shape, Emphasis::Hover, &mut surface);

        match &surface.commands()[0] {
            DrawCommand::Stroke { width, color, .. } => {
                assert!((width - OUTLINE_WIDTH).abs() < f64::EPSILON);
                assert_eq!(*color, Color::from(ShapeColor::RED));
            }
            other => panic!("expected a stroke, got {other:?}"),
        }
    }
}
