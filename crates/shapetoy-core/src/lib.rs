//! Shape Toy Core Library
//!
//! Platform-agnostic shape model, painting strategy and the canvas
//! interaction engine for the Shape Toy editor.

pub mod canvas;
pub mod collection;
pub mod geometry;
pub mod input;
pub mod selection;
pub mod shapes;
pub mod surface;

pub use canvas::{
    CANVAS_SIZE, CanvasConfig, CanvasLayers, CanvasRequest, DeselectState, PendingDeselect,
    ShapeCanvas,
};
pub use collection::{
    TEMPLATE_CENTER, circle_template, create_shape, delete_shape, find_shape, rectangle_template,
    remove_shape, update_shape,
};
pub use geometry::{Emphasis, OUTLINE_WIDTH, fill_geometry, outline_geometry, paint_fill, paint_outline};
pub use input::{Modifiers, PointerEvent, PointerState, PointerTracker};
pub use selection::SelectionSet;
pub use shapes::{
    Circle, Rectangle, Shape, ShapeColor, ShapeError, ShapeId, ShapeKind, ShapeRecord,
    shapes_from_json,
};
pub use surface::{DisplayList, DrawCommand, Surface};
