//! Pure operations over an ordered shape collection.
//!
//! Order is paint order: the last shape is topmost. Every operation leaves
//! its input untouched and returns a new collection.

use crate::shapes::{Circle, Rectangle, Shape, ShapeId};
use kurbo::Point;

/// Where the add buttons place new shapes.
pub const TEMPLATE_CENTER: Point = Point::new(100.0, 100.0);

/// New rectangle as placed by the "add rectangle" button.
pub fn rectangle_template() -> Shape {
    Rectangle::new(TEMPLATE_CENTER, 50.0, 50.0).into()
}

/// New circle as placed by the "add circle" button.
pub fn circle_template() -> Shape {
    Circle::new(TEMPLATE_CENTER, 50.0).into()
}

/// Append `template` under a freshly generated id.
///
/// Whatever id the template carries is discarded.
pub fn create_shape(mut template: Shape, shapes: &[Shape]) -> Vec<Shape> {
    template.regenerate_id();
    log::debug!("Created {} {}", template.kind(), template.id());

    let mut result = Vec::with_capacity(shapes.len() + 1);
    result.extend_from_slice(shapes);
    result.push(template);
    result
}

/// Replace the entry with the same id and move it to the top.
///
/// An unknown id is appended as if it were new.
pub fn update_shape(shape: Shape, shapes: &[Shape]) -> Vec<Shape> {
    let id = shape.id();
    let mut result: Vec<Shape> = shapes.iter().filter(|s| s.id() != id).cloned().collect();
    result.push(shape);
    result
}

/// Remove the entry with `id`; a missing id is a no-op.
pub fn delete_shape(id: ShapeId, shapes: &[Shape]) -> Vec<Shape> {
    shapes.iter().filter(|s| s.id() != id).cloned().collect()
}

/// Remove the entry sharing `shape`'s id.
pub fn remove_shape(shape: &Shape, shapes: &[Shape]) -> Vec<Shape> {
    delete_shape(shape.id(), shapes)
}

/// Look up a shape by id.
pub fn find_shape(id: ShapeId, shapes: &[Shape]) -> Option<&Shape> {
    shapes.iter().find(|s| s.id() == id)
}
