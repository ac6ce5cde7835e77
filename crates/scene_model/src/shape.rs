//! Shape nodes - leaves and nestable containers

use crate::{Result, SceneError, ShapeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumeration of all shape kinds on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Square,
    Rectangle,
    Circle,
    Oval,
    Triangle,
    /// The dedicated root container. Never user-constructed.
    Composite,
}

impl ShapeKind {
    /// Whether shapes of this kind may hold nested children
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ShapeKind::Square | ShapeKind::Rectangle | ShapeKind::Circle | ShapeKind::Composite
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Oval => "Oval",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Composite => "CompositeShape",
        };
        f.write_str(name)
    }
}

impl FromStr for ShapeKind {
    type Err = SceneError;

    /// Parses the lowercase kind words accepted at the input boundary.
    /// The composite root has no spelling here.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "square" => Ok(ShapeKind::Square),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            "oval" => Ok(ShapeKind::Oval),
            "triangle" => Ok(ShapeKind::Triangle),
            other => Err(SceneError::InvalidKind(other.to_string())),
        }
    }
}

/// A drawable node on the canvas.
///
/// Container kinds own an ordered sequence of children, insertion order
/// preserved, duplicate ids allowed. Each child belongs to exactly one
/// parent: removal detaches and returns the owned node, so a shape can
/// never end up in two places at once, and ownership keeps the tree
/// acyclic by construction.
#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    children: Vec<Shape>,
}

impl Shape {
    /// Create a shape of the given kind with a caller-supplied id
    pub fn new(kind: ShapeKind, id: i64) -> Self {
        Self {
            id: ShapeId::new(id),
            kind,
            children: Vec::new(),
        }
    }

    /// The root container backing a canvas
    pub(crate) fn composite_root() -> Self {
        Self {
            id: ShapeId::ROOT,
            kind: ShapeKind::Composite,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Whether this shape may hold nested children
    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Direct children, in insertion order
    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    /// Append a child to this container.
    ///
    /// Leaf kinds (Oval, Triangle) hold no children; adding into one is an
    /// error and the child is dropped.
    pub fn add_child(&mut self, shape: Shape) -> Result<()> {
        if !self.is_container() {
            return Err(SceneError::NotAContainer(self.id));
        }
        self.children.push(shape);
        Ok(())
    }

    /// Listing of this container's direct children only, as (kind, id)
    /// pairs in traversal order. Recomputed fresh on every call.
    pub fn display(&self) -> impl Iterator<Item = (ShapeKind, ShapeId)> + '_ {
        self.children.iter().map(|shape| (shape.kind, shape.id))
    }

    /// Announce this shape and everything nested in it, pre-order.
    ///
    /// "Drawing" records an action; nothing is rasterized. The canvas root
    /// announces only its contents, not itself.
    pub fn draw_events(&self) -> Vec<(ShapeKind, ShapeId)> {
        let mut events = Vec::new();
        self.collect_draw_events(&mut events);
        events
    }

    fn collect_draw_events(&self, events: &mut Vec<(ShapeKind, ShapeId)>) {
        if self.kind != ShapeKind::Composite {
            events.push((self.kind, self.id));
        }
        for child in &self.children {
            child.collect_draw_events(events);
        }
    }

    /// Depth-first pre-order search of this shape's descendants: each
    /// child is checked before its own children, children before the next
    /// sibling. First match wins when ids collide.
    pub(crate) fn find_in_children(&self, id: ShapeId) -> Option<&Shape> {
        for child in &self.children {
            if child.id == id {
                return Some(child);
            }
            if let Some(found) = child.find_in_children(id) {
                return Some(found);
            }
        }
        None
    }

    pub(crate) fn find_in_children_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        for child in &mut self.children {
            if child.id == id {
                return Some(child);
            }
            if let Some(found) = child.find_in_children_mut(id) {
                return Some(found);
            }
        }
        None
    }

    /// Detach the first descendant matching `id`, same traversal order as
    /// [`Shape::find_in_children`], and return it with ownership.
    pub(crate) fn remove_from_children(&mut self, id: ShapeId) -> Option<Shape> {
        for index in 0..self.children.len() {
            if self.children[index].id == id {
                return Some(self.children.remove(index));
            }
            if let Some(removed) = self.children[index].remove_from_children(id) {
                return Some(removed);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_kinds() {
        assert!(ShapeKind::Square.is_container());
        assert!(ShapeKind::Rectangle.is_container());
        assert!(ShapeKind::Circle.is_container());
        assert!(ShapeKind::Composite.is_container());
        assert!(!ShapeKind::Oval.is_container());
        assert!(!ShapeKind::Triangle.is_container());
    }

    #[test]
    fn test_kind_parse_round_trip() {
        for word in ["rectangle", "circle", "square", "oval", "triangle"] {
            let kind: ShapeKind = word.parse().unwrap();
            assert_eq!(kind.to_string().to_lowercase(), word);
        }
    }

    #[test]
    fn test_kind_parse_rejects_unknown() {
        let err = "hexagon".parse::<ShapeKind>().unwrap_err();
        assert!(matches!(err, SceneError::InvalidKind(ref word) if word == "hexagon"));
        // No spelling reaches the composite root.
        assert!("composite".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_add_child_to_container() {
        let mut square = Shape::new(ShapeKind::Square, 1);
        square.add_child(Shape::new(ShapeKind::Oval, 2)).unwrap();
        assert_eq!(square.children().len(), 1);
        assert_eq!(square.children()[0].id(), ShapeId::new(2));
    }

    #[test]
    fn test_add_child_to_leaf_fails() {
        let mut oval = Shape::new(ShapeKind::Oval, 1);
        let err = oval.add_child(Shape::new(ShapeKind::Circle, 2)).unwrap_err();
        assert!(matches!(err, SceneError::NotAContainer(id) if id == ShapeId::new(1)));
        assert!(oval.children().is_empty());
    }

    #[test]
    fn test_display_lists_direct_children_only() {
        let mut square = Shape::new(ShapeKind::Square, 1);
        let mut circle = Shape::new(ShapeKind::Circle, 2);
        circle.add_child(Shape::new(ShapeKind::Triangle, 3)).unwrap();
        square.add_child(circle).unwrap();

        let listed: Vec<_> = square.display().collect();
        assert_eq!(listed, vec![(ShapeKind::Circle, ShapeId::new(2))]);
    }

    #[test]
    fn test_draw_events_are_pre_order() {
        let mut square = Shape::new(ShapeKind::Square, 1);
        let mut circle = Shape::new(ShapeKind::Circle, 2);
        circle.add_child(Shape::new(ShapeKind::Triangle, 3)).unwrap();
        square.add_child(circle).unwrap();
        square.add_child(Shape::new(ShapeKind::Oval, 4)).unwrap();

        assert_eq!(
            square.draw_events(),
            vec![
                (ShapeKind::Square, ShapeId::new(1)),
                (ShapeKind::Circle, ShapeId::new(2)),
                (ShapeKind::Triangle, ShapeId::new(3)),
                (ShapeKind::Oval, ShapeId::new(4)),
            ]
        );
    }
}
