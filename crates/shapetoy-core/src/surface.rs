//! Drawing surface abstraction.
//!
//! The canvas paints through [`Surface`] so the interaction engine stays
//! independent of any rendering backend. [`DisplayList`] is the in-memory
//! implementation used headless and in tests.

use kurbo::{BezPath, Size};
use peniko::Color;

/// A 2D drawing target of fixed size.
pub trait Surface {
    /// Size of the surface in canvas units.
    fn size(&self) -> Size;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Fill `path` with a solid color (non-zero winding).
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Stroke `path` with a solid color.
    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color);
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill { path: BezPath, color: Color },
    Stroke { path: BezPath, width: f64, color: Color },
}

impl DrawCommand {
    pub fn path(&self) -> &BezPath {
        match self {
            DrawCommand::Fill { path, .. } | DrawCommand::Stroke { path, .. } => path,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Fill { color, .. } | DrawCommand::Stroke { color, .. } => *color,
        }
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, DrawCommand::Fill { .. })
    }
}

/// Surface that records commands instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    size: Size,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl DisplayList {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
            clears: 0,
        }
    }

    /// Commands drawn since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many times the surface has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| c.is_fill())
    }

    pub fn strokes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| !c.is_fill())
    }
}

impl Surface for DisplayList {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            width,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Rect, Shape as _};

    #[test]
    fn test_display_list_records_and_clears() {
        let mut list = DisplayList::new(Size::new(500.0, 500.0));
        let path = Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1);

        list.fill_path(&path, Color::BLACK);
        list.stroke_path(&path, 4.0, Color::WHITE);
        assert_eq!(list.commands().len(), 2);
        assert_eq!(list.fills().count(), 1);
        assert_eq!(list.strokes().count(), 1);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.clear_count(), 1);
        assert_eq!(list.size(), Size::new(500.0, 500.0));
    }
}
