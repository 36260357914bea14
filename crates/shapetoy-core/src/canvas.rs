//! Canvas interaction engine.
//!
//! Owns the hover state, the hit-test path cache and the pointer state
//! machine. The shape collection and selection set belong to the shell: they
//! arrive through [`ShapeCanvas::sync`] and every change the engine wants is
//! returned as a [`CanvasRequest`].

use crate::collection::{find_shape, update_shape};
use crate::geometry::{Emphasis, paint_fill, paint_outline};
use crate::input::{Modifiers, PointerEvent, PointerState, PointerTracker};
use crate::selection::SelectionSet;
use crate::shapes::{Shape, ShapeId};
use crate::surface::{DisplayList, Surface};
use kurbo::{BezPath, Point, Shape as KurboShape, Size, Vec2};
use std::collections::HashMap;

/// Fixed size of both canvas layers.
pub const CANVAS_SIZE: Size = Size::new(500.0, 500.0);

/// Canvas configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    /// Size of the drawing layers in canvas units.
    pub size: Size,
    /// Also drag the hovered shape when it is not selected (legacy behavior).
    pub drag_hovered: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size: CANVAS_SIZE,
            drag_hovered: false,
        }
    }
}

/// The two stacked drawing layers.
///
/// `shapes` holds fills and selection outlines; `hover` holds only the hover
/// outline so it can be repainted without touching the shapes.
#[derive(Debug, Clone)]
pub struct CanvasLayers<S> {
    pub shapes: S,
    pub hover: S,
}

impl<S> CanvasLayers<S> {
    pub fn new(shapes: S, hover: S) -> Self {
        Self { shapes, hover }
    }
}

impl CanvasLayers<DisplayList> {
    /// Two recording layers of `size`.
    pub fn display_lists(size: Size) -> Self {
        Self::new(DisplayList::new(size), DisplayList::new(size))
    }
}

/// A state change the canvas asks its owner to make.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasRequest {
    /// Replace the selection set.
    SetSelection(SelectionSet),
    /// Replace the whole shape collection.
    SetShapes(Vec<Shape>),
}

/// Lifecycle of a deferred deselect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeselectState {
    Armed,
    /// A move came first: the gesture is a drag.
    Cancelled,
    /// The release came first: the shape is deselected.
    Fired,
}

/// Deselect armed by pressing on an already selected shape.
///
/// Resolves exactly once per gesture, to whichever of move or release
/// happens first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDeselect {
    target: ShapeId,
    state: DeselectState,
}

impl PendingDeselect {
    pub fn arm(target: ShapeId) -> Self {
        Self {
            target,
            state: DeselectState::Armed,
        }
    }

    pub fn target(&self) -> ShapeId {
        self.target
    }

    pub fn state(&self) -> DeselectState {
        self.state
    }

    /// Cancel if still armed. Returns whether this call cancelled it.
    pub fn cancel(&mut self) -> bool {
        if self.state == DeselectState::Armed {
            self.state = DeselectState::Cancelled;
            true
        } else {
            false
        }
    }

    /// Fire if still armed, yielding the id to deselect.
    pub fn fire(&mut self) -> Option<ShapeId> {
        if self.state == DeselectState::Armed {
            self.state = DeselectState::Fired;
            Some(self.target)
        } else {
            None
        }
    }
}

/// Interactive view over a shape collection.
pub struct ShapeCanvas<S: Surface> {
    config: CanvasConfig,
    layers: Option<CanvasLayers<S>>,
    /// Collection as of the last sync, in paint order.
    shapes: Vec<Shape>,
    selection: SelectionSet,
    hovered: Option<ShapeId>,
    /// Fill paths of the last redraw, keyed by shape id.
    path_cache: HashMap<ShapeId, BezPath>,
    pointer: PointerTracker,
    pending_deselect: Option<PendingDeselect>,
}

impl<S: Surface> ShapeCanvas<S> {
    /// Create an unmounted canvas.
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            layers: None,
            shapes: Vec::new(),
            selection: SelectionSet::new(),
            hovered: None,
            path_cache: HashMap::new(),
            pointer: PointerTracker::new(),
            pending_deselect: None,
        }
    }

    /// Create a canvas drawing onto `layers`.
    pub fn with_layers(config: CanvasConfig, layers: CanvasLayers<S>) -> Self {
        let mut canvas = Self::new(config);
        canvas.mount(layers);
        canvas
    }

    /// Attach drawing layers and paint the current state onto them.
    pub fn mount(&mut self, layers: CanvasLayers<S>) {
        if layers.shapes.size() != self.config.size || layers.hover.size() != self.config.size {
            log::warn!(
                "Canvas layers are {:?}/{:?}, expected {:?}",
                layers.shapes.size(),
                layers.hover.size(),
                self.config.size
            );
        }
        self.layers = Some(layers);
        self.redraw();
    }

    /// Detach the drawing layers. Hit-testing finds nothing until remounted.
    pub fn unmount(&mut self) -> Option<CanvasLayers<S>> {
        self.path_cache.clear();
        self.layers.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.layers.is_some()
    }

    pub fn layers(&self) -> Option<&CanvasLayers<S>> {
        self.layers.as_ref()
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn hovered(&self) -> Option<ShapeId> {
        self.hovered
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer.state()
    }

    pub fn pointer_position(&self) -> Point {
        self.pointer.position
    }

    pub fn pending_deselect(&self) -> Option<&PendingDeselect> {
        self.pending_deselect.as_ref()
    }

    /// Hit-test geometry recorded for `id` by the last redraw.
    pub fn cached_path(&self, id: ShapeId) -> Option<&BezPath> {
        self.path_cache.get(&id)
    }

    /// Take the owner's current state and redraw.
    pub fn sync(&mut self, shapes: &[Shape], selection: &SelectionSet) {
        self.shapes = shapes.to_vec();
        self.selection = selection.clone();
        self.redraw();
    }

    /// Repaint the shape layer, rebuild the path cache, then repaint hover.
    pub fn redraw(&mut self) {
        let Self {
            layers,
            shapes,
            selection,
            hovered,
            path_cache,
            ..
        } = self;

        path_cache.clear();
        if hovered.is_some_and(|id| find_shape(id, shapes).is_none()) {
            *hovered = None;
        }
        let Some(layers) = layers.as_mut() else {
            return;
        };

        let surface = &mut layers.shapes;
        surface.clear();

        let (selected, unselected): (Vec<&Shape>, Vec<&Shape>) =
            shapes.iter().partition(|s| selection.contains(s.id()));

        for shape in unselected {
            let path = paint_fill(shape, surface);
            path_cache.insert(shape.id(), path);
        }
        for shape in selected {
            let path = paint_fill(shape, surface);
            paint_outline(shape, Emphasis::Selected, surface);
            path_cache.insert(shape.id(), path);
        }

        log::debug!(
            "Redrew {} shapes ({} selected)",
            shapes.len(),
            selection.live_ids(shapes).len()
        );

        self.redraw_hover();
    }

    /// Repaint only the hover layer.
    pub fn redraw_hover(&mut self) {
        let Some(layers) = self.layers.as_mut() else {
            return;
        };
        layers.hover.clear();
        if let Some(shape) = self.hovered.and_then(|id| find_shape(id, &self.shapes)) {
            paint_outline(shape, Emphasis::Hover, &mut layers.hover);
        }
    }

    /// Topmost shape whose cached fill contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<ShapeId> {
        if self.layers.is_none() {
            return None;
        }
        self.shapes
            .iter()
            .rev()
            .map(Shape::id)
            .find(|id| self.path_cache.get(id).is_some_and(|path| path.contains(point)))
    }

    /// Feed one pointer event through the state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<CanvasRequest> {
        match event {
            PointerEvent::Down {
                position,
                modifiers,
            } => self.pointer_down(position, modifiers),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    fn pointer_down(&mut self, position: Point, modifiers: Modifiers) -> Vec<CanvasRequest> {
        self.pointer.press(position);
        self.pending_deselect = None;

        let Some(id) = self.hit_test(position) else {
            log::debug!("Pointer down on empty canvas at {position:?}");
            return vec![CanvasRequest::SetSelection(SelectionSet::new())];
        };

        if self.selection.contains(id) {
            self.pending_deselect = Some(PendingDeselect::arm(id));
            return Vec::new();
        }

        let selection = if modifiers.shift {
            self.selection.with(id)
        } else {
            SelectionSet::single(id)
        };
        log::debug!("Selected {id} ({} total)", selection.len());
        vec![CanvasRequest::SetSelection(selection)]
    }

    fn pointer_move(&mut self, position: Point) -> Vec<CanvasRequest> {
        let delta = self.pointer.move_to(position);
        if let Some(pending) = self.pending_deselect.as_mut() {
            pending.cancel();
        }

        let mut requests = Vec::new();
        if self.pointer.is_down() {
            if delta != Vec2::ZERO {
                requests.extend(self.drag(delta).map(CanvasRequest::SetShapes));
            }
            // Hover is frozen for the rest of the drag.
            return requests;
        }

        let hit = self.hit_test(position);
        if hit != self.hovered {
            self.hovered = hit;
            self.redraw_hover();
        }
        requests
    }

    fn pointer_up(&mut self, position: Point) -> Vec<CanvasRequest> {
        self.pointer.position = position;
        self.pointer.release();

        let Some(pending) = self.pending_deselect.as_mut() else {
            return Vec::new();
        };
        match pending.fire() {
            Some(id) => {
                let selection = self.selection.without(id);
                log::debug!("Released on selected {id}, {} remain selected", selection.len());
                vec![CanvasRequest::SetSelection(selection)]
            }
            None => Vec::new(),
        }
    }

    fn pointer_leave(&mut self) -> Vec<CanvasRequest> {
        self.pointer.release();
        if let Some(pending) = self.pending_deselect.as_mut() {
            pending.cancel();
        }
        if self.hovered.take().is_some() {
            self.redraw_hover();
        }
        Vec::new()
    }

    /// Collection with every dragged shape moved by `delta` and restacked on top.
    fn drag(&self, delta: Vec2) -> Option<Vec<Shape>> {
        let moved: Vec<Shape> = self
            .shapes
            .iter()
            .filter(|s| self.is_dragged(s.id()))
            .map(|s| s.translated(delta))
            .collect();
        if moved.is_empty() {
            return None;
        }

        let count = moved.len();
        let shapes = moved
            .into_iter()
            .fold(self.shapes.clone(), |shapes, shape| update_shape(shape, &shapes));
        log::debug!("Dragged {count} shapes by {delta:?}");
        Some(shapes)
    }

    fn is_dragged(&self, id: ShapeId) -> bool {
        self.selection.contains(id) || (self.config.drag_hovered && self.hovered == Some(id))
    }
}

impl<S: Surface> Default for ShapeCanvas<S> {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}
