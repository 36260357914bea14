//! Renderer trait abstraction.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use peniko::Color;
use shapetoy_core::{CANVAS_SIZE, CanvasLayers, Surface};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Window size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Top-left of the canvas in logical window coordinates.
    pub canvas_origin: Point,
    /// Size of the canvas layers in canvas units.
    pub canvas_size: Size,
    /// Window background around the canvas.
    pub background_color: Color,
    /// Canvas paper color behind the shape layer.
    pub canvas_color: Color,
    /// Border drawn around the canvas.
    pub border_color: Color,
}

impl RenderContext {
    /// Create a new render context.
    pub fn new(viewport_size: Size) -> Self {
        Self {
            viewport_size,
            scale_factor: 1.0,
            canvas_origin: Point::ZERO,
            canvas_size: CANVAS_SIZE,
            background_color: Color::from_rgba8(240, 240, 240, 255),
            canvas_color: Color::WHITE,
            border_color: Color::from_rgba8(200, 200, 200, 255),
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Place the canvas at `origin` (logical pixels).
    pub fn with_canvas_origin(mut self, origin: Point) -> Self {
        self.canvas_origin = origin;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Canvas units to physical window pixels.
    pub fn canvas_transform(&self) -> Affine {
        Affine::scale(self.scale_factor) * Affine::translate(self.canvas_origin.to_vec2())
    }

    /// Physical window pixels to canvas units.
    pub fn window_to_canvas(&self, point: Point) -> Point {
        self.canvas_transform().inverse() * point
    }

    /// Canvas area in canvas units.
    pub fn canvas_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.canvas_size)
    }

    /// Whether a canvas-space point lies on the canvas.
    pub fn contains(&self, point: Point) -> bool {
        let bounds = self.canvas_bounds();
        point.x >= bounds.x0 && point.x < bounds.x1 && point.y >= bounds.y0 && point.y < bounds.y1
    }

    /// Logical window size needed to show the whole canvas plus `margin`.
    pub fn required_size(&self, margin: Vec2) -> Size {
        Size::new(
            self.canvas_origin.x + self.canvas_size.width + margin.x,
            self.canvas_origin.y + self.canvas_size.height + margin.y,
        )
    }
}

/// Trait for rendering backends.
///
/// A backend provides the drawing surfaces the canvas paints into and
/// composes them into a frame.
pub trait Renderer {
    /// Layer surface type painted by the canvas.
    type Surface: Surface;

    /// Create a fresh pair of layers.
    fn create_layers(&self, size: Size) -> CanvasLayers<Self::Surface>;

    /// Build the frame from the current layer contents.
    fn build_scene(&mut self, ctx: &RenderContext, layers: &CanvasLayers<Self::Surface>);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_transform_round_trip() {
        let ctx = RenderContext::new(Size::new(1600.0, 1200.0))
            .with_scale_factor(2.0)
            .with_canvas_origin(Point::new(80.0, 20.0));

        let window = ctx.canvas_transform() * Point::new(100.0, 100.0);
        assert!((window.x - 360.0).abs() < f64::EPSILON);
        assert!((window.y - 240.0).abs() < f64::EPSILON);

        let canvas = ctx.window_to_canvas(Point::new(360.0, 240.0));
        assert!((canvas.x - 100.0).abs() < 1e-9);
        assert!((canvas.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_contains() {
        let ctx = RenderContext::new(Size::new(800.0, 600.0));
        assert!(ctx.contains(Point::new(0.0, 0.0)));
        assert!(ctx.contains(Point::new(499.0, 250.0)));
        assert!(!ctx.contains(Point::new(500.0, 250.0)));
        assert!(!ctx.contains(Point::new(-1.0, 10.0)));
    }

    #[test]
    fn test_required_size() {
        let ctx = RenderContext::new(Size::new(800.0, 600.0)).with_canvas_origin(Point::new(200.0, 16.0));
        let size = ctx.required_size(Vec2::new(300.0, 16.0));
        assert!((size.width - 1000.0).abs() < f64::EPSILON);
        assert!((size.height - 532.0).abs() < f64::EPSILON);
    }
}
