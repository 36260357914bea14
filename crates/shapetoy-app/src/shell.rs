//! Editor state ownership and wiring between the canvas and the panel.

use crate::ui::UiAction;
use shapetoy_core::{
    CanvasConfig, CanvasLayers, CanvasRequest, PointerEvent, SelectionSet, Shape, ShapeCanvas,
    Surface, circle_template, create_shape, delete_shape, rectangle_template, update_shape,
};

/// Canonical editor state: the shape collection and the selection set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub shapes: Vec<Shape>,
    pub selection: SelectionSet,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shapes(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            selection: SelectionSet::new(),
        }
    }

    /// Selected shapes that still exist, in stacking order.
    pub fn selected_shapes(&self) -> Vec<&Shape> {
        self.selection.live(&self.shapes).collect()
    }

    /// Apply a change requested by the canvas.
    pub fn apply_canvas_request(&mut self, request: CanvasRequest) {
        match request {
            CanvasRequest::SetSelection(selection) => self.selection = selection,
            CanvasRequest::SetShapes(shapes) => self.shapes = shapes,
        }
    }

    /// Apply an edit from the panel. Returns true when state changed.
    pub fn apply_ui_action(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::AddRectangle => {
                self.shapes = create_shape(rectangle_template(), &self.shapes);
            }
            UiAction::AddCircle => {
                self.shapes = create_shape(circle_template(), &self.shapes);
            }
            UiAction::UpdateShape(shape) => {
                self.shapes = update_shape(shape, &self.shapes);
            }
            UiAction::DeleteShape(id) => {
                let before = self.shapes.len();
                self.shapes = delete_shape(id, &self.shapes);
                self.selection.remove(id);
                if self.shapes.len() == before {
                    log::debug!("Delete of unknown shape {id} ignored");
                    return false;
                }
            }
        }
        true
    }
}

/// Owns the editor state and keeps the canvas in sync with it.
pub struct Shell<S: Surface> {
    state: EditorState,
    canvas: ShapeCanvas<S>,
}

impl<S: Surface> Shell<S> {
    pub fn new(config: CanvasConfig, layers: CanvasLayers<S>) -> Self {
        Self::with_state(EditorState::new(), config, layers)
    }

    pub fn with_state(state: EditorState, config: CanvasConfig, layers: CanvasLayers<S>) -> Self {
        let mut canvas = ShapeCanvas::with_layers(config, layers);
        canvas.sync(&state.shapes, &state.selection);
        Self { state, canvas }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn canvas(&self) -> &ShapeCanvas<S> {
        &self.canvas
    }

    /// Route a pointer event through the canvas and apply what it asks for.
    ///
    /// Returns true when the editor state changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let requests = self.canvas.handle_pointer(event);
        if requests.is_empty() {
            return false;
        }
        for request in requests {
            self.state.apply_canvas_request(request);
        }
        self.sync();
        true
    }

    /// Apply a panel action and redraw.
    pub fn apply_ui_action(&mut self, action: UiAction) -> bool {
        let changed = self.state.apply_ui_action(action);
        if changed {
            self.sync();
        }
        changed
    }

    fn sync(&mut self) {
        self.canvas.sync(&self.state.shapes, &self.state.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use shapetoy_core::{
        CANVAS_SIZE, Circle, DisplayList, Modifiers, Rectangle, ShapeColor, ShapeId, ShapeKind,
        TEMPLATE_CENTER,
    };

    fn shell_with(shapes: Vec<Shape>) -> Shell<DisplayList> {
        Shell::with_state(
            EditorState::with_shapes(shapes),
            CanvasConfig::default(),
            CanvasLayers::display_lists(CANVAS_SIZE),
        )
    }

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_add_buttons() {
        let mut state = EditorState::new();
        assert!(state.apply_ui_action(UiAction::AddRectangle));
        assert!(state.apply_ui_action(UiAction::AddCircle));

        assert_eq!(state.shapes.len(), 2);
        assert_eq!(state.shapes[0].kind(), ShapeKind::Rectangle);
        assert_eq!(state.shapes[1].kind(), ShapeKind::Circle);
        assert_eq!(state.shapes[1].center(), TEMPLATE_CENTER);
        assert_ne!(state.shapes[0].id(), state.shapes[1].id());
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_update_restacks() {
        let a: Shape = Rectangle::new(Point::new(100.0, 100.0), 50.0, 50.0).into();
        let b: Shape = Circle::new(Point::new(200.0, 200.0), 30.0).into();
        let mut state = EditorState::with_shapes(vec![a.clone(), b.clone()]);

        let mut recolored = a.clone();
        recolored.set_fill_color(ShapeColor::GREEN);
        state.apply_ui_action(UiAction::UpdateShape(recolored.clone()));

        assert_eq!(state.shapes, vec![b, recolored]);
    }

    #[test]
    fn test_delete_drops_selection() {
        let a: Shape = Rectangle::new(Point::new(100.0, 100.0), 50.0, 50.0).into();
        let mut state = EditorState::with_shapes(vec![a.clone()]);
        state.selection = SelectionSet::single(a.id());

        assert!(state.apply_ui_action(UiAction::DeleteShape(a.id())));
        assert!(state.shapes.is_empty());
        assert!(state.selection.is_empty());

        assert!(!state.apply_ui_action(UiAction::DeleteShape(ShapeId::new_v4())));
    }

    #[test]
    fn test_selected_shapes_skip_stale_ids() {
        let a: Shape = Rectangle::new(Point::new(100.0, 100.0), 50.0, 50.0).into();
        let mut state = EditorState::with_shapes(vec![a.clone()]);
        state.selection = [a.id(), ShapeId::new_v4()].into_iter().collect();

        let selected = state.selected_shapes();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id(), a.id());
    }

    #[test]
    fn test_pointer_flow_updates_state_and_canvas() {
        let r1: Shape = Rectangle::new(Point::new(100.0, 100.0), 50.0, 50.0)
            .with_color(ShapeColor::RED)
            .into();
        let c1: Shape = Circle::new(Point::new(200.0, 200.0), 30.0)
            .with_color(ShapeColor::BLUE)
            .into();
        let mut shell = shell_with(vec![r1.clone(), c1.clone()]);

        assert!(shell.handle_pointer(down(100.0, 100.0)));
        assert_eq!(shell.state().selection, SelectionSet::single(r1.id()));
        assert_eq!(shell.canvas().selection(), &shell.state().selection);

        assert!(shell.handle_pointer(PointerEvent::Move {
            position: Point::new(110.0, 105.0)
        }));
        assert!(!shell.handle_pointer(PointerEvent::Up {
            position: Point::new(110.0, 105.0)
        }));

        let moved = shell.state().shapes.iter().find(|s| s.id() == r1.id()).unwrap();
        assert_eq!(moved.center(), Point::new(110.0, 105.0));
        assert_eq!(shell.state().shapes[0], c1);
        // Canvas hit cache follows the moved shape.
        assert_eq!(shell.canvas().hit_test(Point::new(130.0, 125.0)), Some(r1.id()));

        assert!(shell.handle_pointer(down(480.0, 20.0)));
        assert!(shell.state().selection.is_empty());
    }

    #[test]
    fn test_panel_edit_redraws_canvas() {
        let mut shell = Shell::new(
            CanvasConfig::default(),
            CanvasLayers::display_lists(CANVAS_SIZE),
        );
        shell.apply_ui_action(UiAction::AddCircle);

        let layers = shell.canvas().layers().unwrap();
        assert_eq!(layers.shapes.commands().len(), 1);
        assert_eq!(
            shell.canvas().hit_test(TEMPLATE_CENTER),
            Some(shell.state().shapes[0].id())
        );
    }
}
