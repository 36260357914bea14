//! Selection set of shape ids.

use crate::shapes::{Shape, ShapeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unordered set of selected shape ids.
///
/// Ids of deleted shapes may linger here; they are filtered out against the
/// live collection wherever they would have a visual effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: HashSet<ShapeId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection holding exactly `id`.
    pub fn single(id: ShapeId) -> Self {
        Self {
            ids: HashSet::from([id]),
        }
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn insert(&mut self, id: ShapeId) -> bool {
        self.ids.insert(id)
    }

    pub fn remove(&mut self, id: ShapeId) -> bool {
        self.ids.remove(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.ids.iter().copied()
    }

    /// Copy of this selection with `id` added.
    pub fn with(&self, id: ShapeId) -> Self {
        let mut next = self.clone();
        next.insert(id);
        next
    }

    /// Copy of this selection with `id` removed.
    pub fn without(&self, id: ShapeId) -> Self {
        let mut next = self.clone();
        next.remove(id);
        next
    }

    /// Selected shapes that still exist, in collection order.
    pub fn live<'a>(&'a self, shapes: &'a [Shape]) -> impl Iterator<Item = &'a Shape> + 'a {
        shapes.iter().filter(|s| self.contains(s.id()))
    }

    /// Ids of [`Self::live`] shapes.
    pub fn live_ids(&self, shapes: &[Shape]) -> Vec<ShapeId> {
        self.live(shapes).map(Shape::id).collect()
    }

    /// Drop ids that no longer refer to a shape in `shapes`.
    pub fn retain_live(&mut self, shapes: &[Shape]) {
        self.ids.retain(|id| shapes.iter().any(|s| s.id() == *id));
    }
}

impl FromIterator<ShapeId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ShapeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle};
    use kurbo::Point;

    #[test]
    fn test_single_and_with() {
        let a = ShapeId::new_v4();
        let b = ShapeId::new_v4();
        let selection = SelectionSet::single(a).with(b);
        assert_eq!(selection.len(), 2);
        assert!(selection.contains(a));
        assert!(selection.contains(b));
        assert_eq!(selection, [b, a].into_iter().collect());
    }

    #[test]
    fn test_without() {
        let a = ShapeId::new_v4();
        let selection = SelectionSet::single(a).without(a);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_live_filters_stale_ids() {
        let shapes: Vec<Shape> = vec![
            Rectangle::new(Point::new(0.0, 0.0), 1.0, 1.0).into(),
            Circle::new(Point::new(5.0, 5.0), 1.0).into(),
        ];
        let stale = ShapeId::new_v4();
        let mut selection: SelectionSet = [shapes[1].id(), stale].into_iter().collect();

        assert_eq!(selection.live_ids(&shapes), vec![shapes[1].id()]);

        selection.retain_live(&shapes);
        assert_eq!(selection, SelectionSet::single(shapes[1].id()));
    }
}
