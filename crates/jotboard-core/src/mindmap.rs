//! Mind-map tree building: node sizing, sibling layout, connectors.

use crate::scene::Scene;
use crate::shapes::{Connector, MindMapNode, Shape, ShapeId, TEXT_WIDTH_FACTOR};
use kurbo::Point;

/// Node width clamp range.
pub const MIN_NODE_WIDTH: f64 = 80.0;
pub const MAX_NODE_WIDTH: f64 = 240.0;

/// Fixed node heights.
pub const ROOT_HEIGHT: f64 = 48.0;
pub const CHILD_HEIGHT: f64 = 36.0;

/// Font sizes used to measure node labels.
pub const ROOT_FONT_SIZE: f64 = 18.0;
pub const CHILD_FONT_SIZE: f64 = 15.0;

/// Horizontal padding added around the measured label.
const LABEL_PADDING: f64 = 24.0;

/// Horizontal gap between a parent's right edge and its children.
const CHILD_GAP_X: f64 = 60.0;

/// Vertical step between stacked siblings.
const SIBLING_STEP_Y: f64 = 50.0;

/// Text width measurement seam.
///
/// The drawing surface implements this with real font metrics; headless
/// callers fall back to [`ApproxTextMeasurer`].
pub trait TextMeasurer {
    /// Width of `text` at `font_size`, in scene units.
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// Character-count approximation, for tests and headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTextMeasurer;

impl TextMeasurer for ApproxTextMeasurer {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * TEXT_WIDTH_FACTOR
    }
}

/// Node width for a label: measured text plus padding, clamped.
pub fn node_width(text: &str, font_size: f64, measurer: &dyn TextMeasurer) -> f64 {
    (measurer.text_width(text, font_size) + LABEL_PADDING).clamp(MIN_NODE_WIDTH, MAX_NODE_WIDTH)
}

/// Create a root node centered on `center`. The caller is responsible for
/// ensuring no root exists yet; the editor enforces one root per session.
pub fn create_root(
    scene: &mut Scene,
    center: Point,
    text: String,
    measurer: &dyn TextMeasurer,
) -> ShapeId {
    let width = node_width(&text, ROOT_FONT_SIZE, measurer);
    let position = Point::new(center.x - width / 2.0, center.y - ROOT_HEIGHT / 2.0);
    scene.add(Shape::MindMapNode(MindMapNode::new_root(
        position,
        width,
        ROOT_HEIGHT,
        text,
    )))
}

/// Create a child of `parent_id` and the connector linking them.
///
/// Children go to the right of the parent and stack downward, one fixed
/// step per existing sibling. The connector's endpoints are the parent's
/// right-center and the child's left-center at this moment; they are not
/// re-anchored if either node moves later.
///
/// Returns None if `parent_id` is not a mind-map node.
pub fn create_child(
    scene: &mut Scene,
    parent_id: ShapeId,
    text: String,
    measurer: &dyn TextMeasurer,
) -> Option<ShapeId> {
    let parent = match scene.get(parent_id)? {
        Shape::MindMapNode(node) => node.clone(),
        _ => return None,
    };

    let sibling_count = scene.mindmap_child_count(parent_id);
    let width = node_width(&text, CHILD_FONT_SIZE, measurer);
    let position = Point::new(
        parent.position.x + parent.width + CHILD_GAP_X,
        parent.position.y + sibling_count as f64 * SIBLING_STEP_Y,
    );

    let child = MindMapNode::new_child(position, width, CHILD_HEIGHT, text, parent_id);
    let connector = Connector::new(
        parent_id,
        child.id,
        parent.right_center(),
        child.left_center(),
    );

    let child_id = scene.add(Shape::MindMapNode(child));
    scene.add(Shape::Connector(connector));
    Some(child_id)
}
