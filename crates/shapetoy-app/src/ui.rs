//! egui toolbar and shape editor panel.

use egui::{Align2, Color32, Context, RichText, Vec2};
use shapetoy_core::{Shape, ShapeColor, ShapeId};
use shapetoy_widgets::{
    card_frame, color_row, danger_button, panel_frame, primary_button, range_slider_row,
    readout_row, section_label, separator, theme,
};
use std::ops::RangeInclusive;

use crate::shell::EditorState;

/// Rectangle width and height range.
pub const SIDE_RANGE: RangeInclusive<f64> = 1.0..=500.0;
/// Circle radius range.
pub const RADIUS_RANGE: RangeInclusive<f64> = 5.0..=250.0;
/// Slider step for all dimensions.
pub const DIMENSION_STEP: f64 = 1.0;

const PANEL_WIDTH: f32 = 220.0;
const MARGIN: f32 = 12.0;

/// Actions that can be triggered from the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    AddRectangle,
    AddCircle,
    /// Replace the shape with the same id.
    UpdateShape(Shape),
    DeleteShape(ShapeId),
}

/// A single property edit made in a shape editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeEdit {
    Width(f64),
    Height(f64),
    Radius(f64),
    Color(ShapeColor),
}

/// Apply `edit` to a copy of `shape`. Edits that do not fit the shape
/// variant leave it unchanged.
pub fn apply_edit(shape: &Shape, edit: ShapeEdit) -> Shape {
    let mut edited = shape.clone();
    if let ShapeEdit::Color(color) = edit {
        edited.set_fill_color(color);
        return edited;
    }
    match (&mut edited, edit) {
        (Shape::Rectangle(rect), ShapeEdit::Width(width)) => rect.width = width,
        (Shape::Rectangle(rect), ShapeEdit::Height(height)) => rect.height = height,
        (Shape::Circle(circle), ShapeEdit::Radius(radius)) => circle.radius = radius,
        (_, edit) => log::warn!("Ignoring {edit:?} for {}", shape.kind()),
    }
    edited
}

pub fn to_color32(color: ShapeColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn from_color32(color: Color32) -> ShapeColor {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    ShapeColor::new(r, g, b, a)
}

/// Render the UI and return any triggered action.
pub fn render_ui(ctx: &Context, state: &EditorState) -> Option<UiAction> {
    let toolbar_action = render_toolbar(ctx);
    let editor_action = render_editor_panel(ctx, state);

    toolbar_action.or(editor_action)
}

fn render_toolbar(ctx: &Context) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("toolbar"))
        .anchor(Align2::LEFT_TOP, Vec2::new(MARGIN, MARGIN))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(150.0);
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(0.0, 6.0);
                    ui.label(RichText::new("Shape Toy").size(16.0).strong().color(theme::TEXT));
                    separator(ui);
                    if primary_button(ui, "Add Rectangle") {
                        action = Some(UiAction::AddRectangle);
                    }
                    if primary_button(ui, "Add Circle") {
                        action = Some(UiAction::AddCircle);
                    }
                });
            });
        });

    action
}

fn render_editor_panel(ctx: &Context, state: &EditorState) -> Option<UiAction> {
    let selected = state.selected_shapes();
    if selected.is_empty() {
        return None;
    }

    let mut action = None;

    egui::Area::new(egui::Id::new("editor_panel"))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-MARGIN, MARGIN))
        .interactable(true)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(PANEL_WIDTH - 20.0);
                ui.label(RichText::new("Selection").size(14.0).strong().color(theme::TEXT));
                ui.add_space(4.0);

                egui::ScrollArea::vertical().max_height(480.0).show(ui, |ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(0.0, 8.0);
                    for shape in &selected {
                        ui.push_id(shape.id(), |ui| {
                            if let Some(a) = shape_editor(ui, shape) {
                                action = Some(a);
                            }
                        });
                    }
                });
            });
        });

    action
}

/// One editor card. Returns the action for this frame's edit, if any.
fn shape_editor(ui: &mut egui::Ui, shape: &Shape) -> Option<UiAction> {
    let mut edit = None;
    let mut delete = false;

    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(shape.kind().name()).size(13.0).strong().color(theme::TEXT));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                delete = danger_button(ui, "Delete");
            });
        });

        section_label(ui, "CENTER");
        let center = shape.center();
        readout_row(ui, "x", center.x);
        readout_row(ui, "y", center.y);

        section_label(ui, "SIZE");
        match shape {
            Shape::Rectangle(rect) => {
                let mut width = rect.width;
                if range_slider_row(ui, "width", &mut width, SIDE_RANGE, DIMENSION_STEP) {
                    edit = Some(ShapeEdit::Width(width));
                }
                let mut height = rect.height;
                if range_slider_row(ui, "height", &mut height, SIDE_RANGE, DIMENSION_STEP) {
                    edit = Some(ShapeEdit::Height(height));
                }
            }
            Shape::Circle(circle) => {
                let mut radius = circle.radius;
                if range_slider_row(ui, "radius", &mut radius, RADIUS_RANGE, DIMENSION_STEP) {
                    edit = Some(ShapeEdit::Radius(radius));
                }
            }
        }

        section_label(ui, "COLOR");
        let mut color = to_color32(shape.fill_color());
        if color_row(ui, &mut color) {
            edit = Some(ShapeEdit::Color(from_color32(color)));
        }
    });

    if delete {
        return Some(UiAction::DeleteShape(shape.id()));
    }
    edit.map(|edit| UiAction::UpdateShape(apply_edit(shape, edit)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use shapetoy_core::{Circle, Rectangle};

    fn rect() -> Shape {
        Rectangle::new(Point::new(100.0, 100.0), 50.0, 50.0).into()
    }

    fn circle() -> Shape {
        Circle::new(Point::new(200.0, 200.0), 30.0).into()
    }

    #[test]
    fn test_edit_rectangle_dimensions() {
        let shape = rect();
        let wide = apply_edit(&shape, ShapeEdit::Width(120.0));
        let tall = apply_edit(&wide, ShapeEdit::Height(80.0));

        let r = tall.as_rectangle().unwrap();
        assert_eq!(r.width, 120.0);
        assert_eq!(r.height, 80.0);
        assert_eq!(tall.id(), shape.id());
        assert_eq!(tall.center(), shape.center());
    }

    #[test]
    fn test_edit_circle_radius() {
        let shape = circle();
        let edited = apply_edit(&shape, ShapeEdit::Radius(75.0));
        assert_eq!(edited.as_circle().unwrap().radius, 75.0);
        assert_eq!(edited.id(), shape.id());
    }

    #[test]
    fn test_edit_color_any_variant() {
        for shape in [rect(), circle()] {
            let edited = apply_edit(&shape, ShapeEdit::Color(ShapeColor::RED));
            assert_eq!(edited.fill_color(), ShapeColor::RED);
        }
    }

    #[test]
    fn test_mismatched_edit_is_ignored() {
        let shape = circle();
        assert_eq!(apply_edit(&shape, ShapeEdit::Width(10.0)), shape);
        let shape = rect();
        assert_eq!(apply_edit(&shape, ShapeEdit::Radius(10.0)), shape);
    }

    #[test]
    fn test_color32_conversion() {
        let color = ShapeColor::rgb(255, 165, 0);
        assert_eq!(to_color32(color), Color32::from_rgb(255, 165, 0));
        assert_eq!(from_color32(to_color32(color)), color);
    }

    #[test]
    fn test_empty_selection_renders_toolbar_only() {
        let ctx = Context::default();
        let state = EditorState::new();
        let mut action = Some(UiAction::AddCircle);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = render_ui(ctx, &state);
        });
        assert_eq!(action, None);
    }

    #[test]
    fn test_panel_renders_selected_shapes() {
        let ctx = Context::default();
        let shape = rect();
        let mut state = EditorState::with_shapes(vec![shape.clone(), circle()]);
        state.selection = shapetoy_core::SelectionSet::single(shape.id());

        let mut action = Some(UiAction::AddCircle);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = render_ui(ctx, &state);
        });
        // No input, so nothing is triggered.
        assert_eq!(action, None);
    }
}
