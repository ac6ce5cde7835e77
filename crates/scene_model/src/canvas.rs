//! The canvas - root composite container and tree operations

use crate::{Result, SceneError, Shape, ShapeId, ShapeKind};

/// The editable document: one root composite container plus everything
/// nested beneath it.
///
/// The canvas is created empty at session start and mutated only through
/// add and remove operations, directly or via undo/redo. Search and
/// removal are depth-first pre-order over the current tree; the first
/// match wins when ids collide.
#[derive(Debug, Clone)]
pub struct Canvas {
    root: Shape,
}

impl Canvas {
    /// Create an empty canvas
    pub fn new() -> Self {
        Self {
            root: Shape::composite_root(),
        }
    }

    /// Append a shape to the canvas root
    pub fn add_shape(&mut self, shape: Shape) {
        // The root is a composite container; this cannot fail.
        let _ = self.root.add_child(shape);
    }

    /// Append a shape inside the first node matching `parent_id`.
    ///
    /// Signals `NotFound` if no node matches anywhere in the nesting, and
    /// `NotAContainer` if the match is a leaf kind. No mutation occurs in
    /// either case.
    pub fn add_shape_to(&mut self, shape: Shape, parent_id: ShapeId) -> Result<()> {
        let parent = self
            .root
            .find_in_children_mut(parent_id)
            .ok_or(SceneError::NotFound(parent_id))?;
        parent.add_child(shape)
    }

    /// Detach and return the first shape matching `id`.
    ///
    /// Find-and-detach is one atomic operation: the returned owned node is
    /// exactly the node the search matched, even when other shapes share
    /// its id.
    pub fn remove_shape_by_id(&mut self, id: ShapeId) -> Result<Shape> {
        self.root
            .remove_from_children(id)
            .ok_or(SceneError::NotFound(id))
    }

    /// Find the first shape matching `id`.
    ///
    /// The root container itself is not addressable; the search covers
    /// only shapes placed on the canvas.
    pub fn find_by_id(&self, id: ShapeId) -> Result<&Shape> {
        self.root
            .find_in_children(id)
            .ok_or(SceneError::NotFound(id))
    }

    /// Listing of the canvas root's direct children only, as (kind, id)
    /// pairs in traversal order. Recomputed fresh on every call.
    pub fn display(&self) -> impl Iterator<Item = (ShapeKind, ShapeId)> + '_ {
        self.root.display()
    }

    /// Announce every shape on the canvas, depth-first pre-order
    pub fn draw_events(&self) -> Vec<(ShapeKind, ShapeId)> {
        self.root.draw_events()
    }

    /// Number of direct children of the root
    pub fn len(&self) -> usize {
        self.root.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_canvas() -> Canvas {
        // Square 1 { Circle 2 { Triangle 3 } }, Oval 4
        let mut canvas = Canvas::new();
        canvas.add_shape(Shape::new(ShapeKind::Square, 1));
        canvas
            .add_shape_to(Shape::new(ShapeKind::Circle, 2), ShapeId::new(1))
            .unwrap();
        canvas
            .add_shape_to(Shape::new(ShapeKind::Triangle, 3), ShapeId::new(2))
            .unwrap();
        canvas.add_shape(Shape::new(ShapeKind::Oval, 4));
        canvas
    }

    #[test]
    fn test_new_canvas_is_empty() {
        let canvas = Canvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.display().count(), 0);
    }

    #[test]
    fn test_find_recurses_into_nesting() {
        let canvas = create_test_canvas();
        let triangle = canvas.find_by_id(ShapeId::new(3)).unwrap();
        assert_eq!(triangle.kind(), ShapeKind::Triangle);
        assert_eq!(triangle.id(), ShapeId::new(3));
    }

    #[test]
    fn test_find_missing_id() {
        let canvas = create_test_canvas();
        let err = canvas.find_by_id(ShapeId::new(99)).unwrap_err();
        assert!(matches!(err, SceneError::NotFound(id) if id == ShapeId::new(99)));
    }

    #[test]
    fn test_root_is_not_addressable() {
        let canvas = Canvas::new();
        assert!(canvas.find_by_id(ShapeId::ROOT).is_err());
    }

    #[test]
    fn test_add_to_missing_parent_does_not_mutate() {
        let mut canvas = create_test_canvas();
        let err = canvas
            .add_shape_to(Shape::new(ShapeKind::Oval, 5), ShapeId::new(99))
            .unwrap_err();
        assert!(matches!(err, SceneError::NotFound(_)));
        assert!(canvas.find_by_id(ShapeId::new(5)).is_err());
    }

    #[test]
    fn test_add_to_leaf_parent_does_not_mutate() {
        let mut canvas = create_test_canvas();
        let err = canvas
            .add_shape_to(Shape::new(ShapeKind::Circle, 5), ShapeId::new(4))
            .unwrap_err();
        assert!(matches!(err, SceneError::NotAContainer(id) if id == ShapeId::new(4)));
        assert!(canvas.find_by_id(ShapeId::new(5)).is_err());
    }

    #[test]
    fn test_remove_detaches_whole_subtree() {
        let mut canvas = create_test_canvas();
        let removed = canvas.remove_shape_by_id(ShapeId::new(2)).unwrap();
        assert_eq!(removed.kind(), ShapeKind::Circle);
        assert_eq!(removed.children().len(), 1);
        // The nested triangle left with its parent.
        assert!(canvas.find_by_id(ShapeId::new(3)).is_err());
    }

    #[test]
    fn test_remove_missing_id() {
        let mut canvas = create_test_canvas();
        let err = canvas.remove_shape_by_id(ShapeId::new(99)).unwrap_err();
        assert!(matches!(err, SceneError::NotFound(_)));
        assert_eq!(canvas.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_first_match_wins_pre_order() {
        // Root: Square 1 { Rectangle 7 }, Rectangle 7
        let mut canvas = Canvas::new();
        canvas.add_shape(Shape::new(ShapeKind::Square, 1));
        canvas
            .add_shape_to(Shape::new(ShapeKind::Rectangle, 7), ShapeId::new(1))
            .unwrap();
        canvas.add_shape(Shape::new(ShapeKind::Oval, 7));

        // Pre-order descends into Square 1 before reaching the top-level
        // Oval 7, so the nested Rectangle is matched first.
        let found = canvas.find_by_id(ShapeId::new(7)).unwrap();
        assert_eq!(found.kind(), ShapeKind::Rectangle);

        let removed = canvas.remove_shape_by_id(ShapeId::new(7)).unwrap();
        assert_eq!(removed.kind(), ShapeKind::Rectangle);
        // The top-level duplicate is untouched.
        let remaining = canvas.find_by_id(ShapeId::new(7)).unwrap();
        assert_eq!(remaining.kind(), ShapeKind::Oval);
    }

    #[test]
    fn test_display_lists_top_level_only() {
        let canvas = create_test_canvas();
        let listed: Vec<_> = canvas.display().collect();
        assert_eq!(
            listed,
            vec![
                (ShapeKind::Square, ShapeId::new(1)),
                (ShapeKind::Oval, ShapeId::new(4)),
            ]
        );
    }

    #[test]
    fn test_display_is_recomputed_per_call() {
        let mut canvas = create_test_canvas();
        assert_eq!(canvas.display().count(), 2);
        canvas.add_shape(Shape::new(ShapeKind::Triangle, 5));
        assert_eq!(canvas.display().count(), 3);
    }

    #[test]
    fn test_draw_events_cover_nested_shapes() {
        let canvas = create_test_canvas();
        assert_eq!(
            canvas.draw_events(),
            vec![
                (ShapeKind::Square, ShapeId::new(1)),
                (ShapeKind::Circle, ShapeId::new(2)),
                (ShapeKind::Triangle, ShapeId::new(3)),
                (ShapeKind::Oval, ShapeId::new(4)),
            ]
        );
    }

    fn any_kind() -> impl Strategy<Value = ShapeKind> {
        prop_oneof![
            Just(ShapeKind::Square),
            Just(ShapeKind::Rectangle),
            Just(ShapeKind::Circle),
            Just(ShapeKind::Oval),
            Just(ShapeKind::Triangle),
        ]
    }

    proptest! {
        // Ids are drawn from a small range so duplicates are common. At
        // the top level, insertion order is traversal order, so the first
        // inserted shape with an id must win every lookup.
        #[test]
        fn prop_find_returns_first_inserted_duplicate(
            shapes in proptest::collection::vec((any_kind(), 0i64..4), 1..8)
        ) {
            let mut canvas = Canvas::new();
            for (kind, id) in &shapes {
                canvas.add_shape(Shape::new(*kind, *id));
            }

            for (_, id) in &shapes {
                let expected = shapes
                    .iter()
                    .find(|(_, candidate)| candidate == id)
                    .map(|(kind, _)| *kind)
                    .unwrap();
                let found = canvas.find_by_id(ShapeId::new(*id)).unwrap();
                prop_assert_eq!(found.kind(), expected);
            }
        }

        #[test]
        fn prop_remove_detaches_exactly_the_first_match(
            shapes in proptest::collection::vec((any_kind(), 0i64..4), 1..8)
        ) {
            let mut canvas = Canvas::new();
            for (kind, id) in &shapes {
                canvas.add_shape(Shape::new(*kind, *id));
            }

            let (first_kind, first_id) = shapes[0];
            let removed = canvas.remove_shape_by_id(ShapeId::new(first_id)).unwrap();
            prop_assert_eq!(removed.kind(), first_kind);

            // Every other shape is untouched, in order, duplicates included.
            let listed: Vec<_> = canvas.display().collect();
            let expected: Vec<_> = shapes[1..]
                .iter()
                .map(|(kind, id)| (*kind, ShapeId::new(*id)))
                .collect();
            prop_assert_eq!(listed, expected);
        }
    }
}
