//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Affine, BezPath, Rect, Shape as KurboShape, Size, Stroke};
use peniko::{Color, Fill};
use shapetoy_core::{CanvasLayers, Surface};
use vello::Scene;

/// A canvas layer recorded into its own Vello scene.
///
/// Drawing happens in canvas units; placement on screen is applied when the
/// layer is composed.
pub struct VelloSurface {
    scene: Scene,
    size: Size,
}

impl VelloSurface {
    pub fn new(size: Size) -> Self {
        Self {
            scene: Scene::new(),
            size,
        }
    }

    /// Get the recorded scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Surface for VelloSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.scene.reset();
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, path);
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color) {
        self.scene.stroke(&Stroke::new(width), Affine::IDENTITY, color, None, path);
    }
}

/// Composes the canvas layers into one frame.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self { scene: Scene::new() }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Renderer for VelloRenderer {
    type Surface = VelloSurface;

    fn create_layers(&self, size: Size) -> CanvasLayers<VelloSurface> {
        CanvasLayers::new(VelloSurface::new(size), VelloSurface::new(size))
    }

    fn build_scene(&mut self, ctx: &RenderContext, layers: &CanvasLayers<VelloSurface>) {
        self.scene.reset();

        let transform = ctx.canvas_transform();
        let bounds = ctx.canvas_bounds();

        self.scene.fill(Fill::NonZero, transform, ctx.canvas_color, None, &bounds);

        // Hover sits on top of the shape layer.
        self.scene.append(layers.shapes.scene(), Some(transform));
        self.scene.append(layers.hover.scene(), Some(transform));

        // Mask anything dragged past the canvas edge.
        let viewport = Rect::from_origin_size((0.0, 0.0), ctx.viewport_size);
        let canvas = transform.transform_rect_bbox(bounds);
        let frame: BezPath = viewport
            .path_elements(0.1)
            .chain(canvas.path_elements(0.1))
            .collect();
        self.scene.fill(Fill::EvenOdd, Affine::IDENTITY, self.background_color(ctx), None, &frame);

        let border = Stroke::new(1.0 / ctx.scale_factor.max(1.0));
        self.scene.stroke(&border, transform, ctx.border_color, None, &bounds);
    }
}
