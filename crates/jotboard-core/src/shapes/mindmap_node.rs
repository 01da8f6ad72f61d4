//! Mind-map node shape.

use super::{ShapeId, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node in a mind-map tree.
///
/// Tree structure is carried by `parent_id` on the children; connectors
/// between nodes are separate derived shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMapNode {
    pub id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the node box.
    pub width: f64,
    /// Height of the node box.
    pub height: f64,
    /// Node label text.
    pub text: String,
    /// Parent node, None for the root.
    #[serde(default)]
    pub parent_id: Option<ShapeId>,
    /// Whether this node is the tree root.
    pub is_root: bool,
    /// Whether the node's subtree is collapsed in the UI.
    #[serde(default)]
    pub collapsed: bool,
    /// Style properties.
    pub style: ShapeStyle,
}

impl MindMapNode {
    /// Create a root node.
    pub fn new_root(position: Point, width: f64, height: f64, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            text,
            parent_id: None,
            is_root: true,
            collapsed: false,
            style: ShapeStyle::default(),
        }
    }

    /// Create a child node attached to `parent_id`.
    pub fn new_child(
        position: Point,
        width: f64,
        height: f64,
        text: String,
        parent_id: ShapeId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            text,
            parent_id: Some(parent_id),
            is_root: false,
            collapsed: false,
            style: ShapeStyle::default(),
        }
    }

    /// Center of the node's right edge (connector start anchor).
    pub fn right_center(&self) -> Point {
        Point::new(self.position.x + self.width, self.position.y + self.height / 2.0)
    }

    /// Center of the node's left edge (connector end anchor).
    pub fn left_center(&self) -> Point {
        Point::new(self.position.x, self.position.y + self.height / 2.0)
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    pub fn bounds(&self) -> Rect {
        self.as_rect()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.as_rect().contains(point)
    }
}
