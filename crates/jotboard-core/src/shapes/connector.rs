//! Connector shape linking two mind-map nodes.

use super::{points_bounds, ShapeId, ShapeStyle, STROKE_HIT_PADDING};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A derived shape visually linking two mind-map nodes.
///
/// Endpoints are captured when the connector is created and are not
/// re-anchored if either node later moves (known limitation). A connector
/// is deleted whenever either of its endpoint shapes is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub id: ShapeId,
    /// Source node (the parent).
    pub from_id: ShapeId,
    /// Target node (the child).
    pub to_id: ShapeId,
    /// Start point, anchored at the parent's right-center at creation.
    pub start: Point,
    /// End point, anchored at the child's left-center at creation.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Connector {
    /// Create a connector between two nodes.
    pub fn new(from_id: ShapeId, to_id: ShapeId, start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_id,
            to_id,
            start,
            end,
            style: ShapeStyle::default(),
        }
    }

    /// Whether this connector references the given shape as an endpoint.
    pub fn references(&self, id: ShapeId) -> bool {
        self.from_id == id || self.to_id == id
    }

    /// Control points for the smooth cubic through a horizontal midpoint.
    /// Purely a rendering hint; the data model stores only the endpoints.
    pub fn control_points(&self) -> (Point, Point) {
        let mid_x = (self.start.x + self.end.x) / 2.0;
        (
            Point::new(mid_x, self.start.y),
            Point::new(mid_x, self.end.y),
        )
    }

    pub fn bounds(&self) -> Rect {
        points_bounds(&[self.start, self.end])
    }

    /// Padded bounding-box containment (coarse stroke hit policy).
    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds()
            .inflate(STROKE_HIT_PADDING, STROKE_HIT_PADDING)
            .contains(point)
    }
}
