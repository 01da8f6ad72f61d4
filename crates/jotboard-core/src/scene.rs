//! Scene: the ordered shape list for one canvas document.

use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// The drawable content of one canvas document.
///
/// Shapes are stored in insertion order; that order is the draw order and
/// the implicit z-order. Later entries draw on top and hit-test first.
///
/// Serializes as `{ "shapes": [...] }`, the persisted document format.
/// A missing `shapes` field deserializes to an empty scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of the existing ones.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.shapes.push(shape);
        id
    }

    /// Remove a shape by ID.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(index))
    }

    /// Remove a shape and every connector referencing it as an endpoint.
    /// Returns the number of shapes removed.
    pub fn remove_with_connectors(&mut self, id: ShapeId) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|shape| {
            if shape.id() == id {
                return false;
            }
            match shape.connector_endpoints() {
                Some((from, to)) => from != id && to != id,
                None => true,
            }
        });
        before - self.shapes.len()
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Whether a shape with this ID exists.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.iter().any(|s| s.id() == id)
    }

    /// Find the topmost shape containing the given point, scanning the
    /// draw order back-to-front so the last-drawn shape wins ties.
    pub fn topmost_hit(&self, point: Point) -> Option<&Shape> {
        self.shapes.iter().rev().find(|s| s.contains_point(point))
    }

    /// Union bounding box of all shapes, or None for an empty scene.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(|s| s.bounds())
            .reduce(|acc, b| acc.union(b))
    }

    /// Remove all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The root mind-map node currently in the scene, if any.
    pub fn mindmap_root(&self) -> Option<ShapeId> {
        self.shapes.iter().find_map(|shape| match shape {
            Shape::MindMapNode(node) if node.is_root => Some(node.id),
            _ => None,
        })
    }

    /// Number of mind-map children attached to the given parent.
    pub fn mindmap_child_count(&self, parent_id: ShapeId) -> usize {
        self.shapes
            .iter()
            .filter(|shape| match shape {
                Shape::MindMapNode(node) => node.parent_id == Some(parent_id),
                _ => false,
            })
            .count()
    }

    /// Serialize to the persisted document format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from the persisted document format.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Connector, MindMapNode, Rectangle, StickyNote};

    #[test]
    fn test_insertion_order_is_z_order() {
        let mut scene = Scene::new();
        let id1 = scene.add(Shape::Rectangle(Rectangle::new(Point::ZERO, 100.0, 100.0)));
        let id2 = scene.add(Shape::Rectangle(Rectangle::new(
            Point::new(50.0, 50.0),
            100.0,
            100.0,
        )));

        // Point inside both: the later-inserted shape wins.
        let hit = scene.topmost_hit(Point::new(75.0, 75.0)).unwrap();
        assert_eq!(hit.id(), id2);

        // Point only inside the first.
        let hit = scene.topmost_hit(Point::new(25.0, 25.0)).unwrap();
        assert_eq!(hit.id(), id1);

        assert!(scene.topmost_hit(Point::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn test_remove() {
        let mut scene = Scene::new();
        let id = scene.add(Shape::Circle(Circle::new(Point::ZERO, 10.0)));
        assert!(scene.remove(id).is_some());
        assert!(scene.is_empty());
        assert!(scene.remove(id).is_none());
    }

    #[test]
    fn test_remove_cascades_to_connectors() {
        let mut scene = Scene::new();
        let root = MindMapNode::new_root(Point::ZERO, 120.0, 48.0, "Root".into());
        let child =
            MindMapNode::new_child(Point::new(200.0, 0.0), 100.0, 36.0, "Child".into(), root.id);
        let root_id = root.id;
        let child_id = child.id;
        let connector = Connector::new(root_id, child_id, root.right_center(), child.left_center());

        scene.add(Shape::MindMapNode(root));
        scene.add(Shape::MindMapNode(child));
        scene.add(Shape::Connector(connector));

        // Deleting the root removes the connector too; the child survives.
        let removed = scene.remove_with_connectors(root_id);
        assert_eq!(removed, 2);
        assert_eq!(scene.len(), 1);
        assert!(scene.contains(child_id));
    }

    #[test]
    fn test_union_bounds() {
        let mut scene = Scene::new();
        assert!(scene.bounds().is_none());

        scene.add(Shape::Rectangle(Rectangle::new(Point::ZERO, 10.0, 10.0)));
        scene.add(Shape::Circle(Circle::new(Point::new(100.0, 100.0), 20.0)));

        let bounds = scene.bounds().unwrap();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 120.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut scene = Scene::new();
        scene.add(Shape::Rectangle(Rectangle::new(
            Point::new(1.0, 2.0),
            30.0,
            40.0,
        )));
        scene.add(Shape::StickyNote(StickyNote::new(
            Point::new(10.0, 10.0),
            150.0,
            120.0,
            3,
        )));

        let json = scene.to_json().unwrap();
        let back = Scene::from_json(&json).unwrap();
        assert_eq!(scene, back);

        // Re-serializing an untouched scene is a no-op.
        assert_eq!(json, back.to_json().unwrap());
    }

    #[test]
    fn test_missing_shapes_field_defaults_empty() {
        let scene = Scene::from_json("{}").unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_mindmap_root_lookup() {
        let mut scene = Scene::new();
        assert!(scene.mindmap_root().is_none());

        let root = MindMapNode::new_root(Point::ZERO, 120.0, 48.0, "Root".into());
        let root_id = root.id;
        scene.add(Shape::MindMapNode(root));
        assert_eq!(scene.mindmap_root(), Some(root_id));
    }
}
