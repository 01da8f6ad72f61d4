//! Shape definitions for the canvas.

mod circle;
mod connector;
mod embed;
mod freehand;
mod line;
mod mindmap_node;
mod rectangle;
mod sticky;
mod text;

pub use circle::Circle;
pub use connector::Connector;
pub use embed::NoteEmbed;
pub use freehand::Freehand;
pub use line::Line;
pub use mindmap_node::MindMapNode;
pub use rectangle::Rectangle;
pub use sticky::{random_palette_index, StickyColor, StickyNote, STICKY_PALETTE};
pub use text::Text;

use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Padding applied around stroke-like shapes (lines, freehand paths,
/// connectors) when hit-testing. Containment for those kinds is a padded
/// bounding-box test, not an exact stroke-distance test; a coarse policy
/// kept from the original tool.
pub const STROKE_HIT_PADDING: f64 = 10.0;

/// Average glyph width as a fraction of font size, used to approximate
/// text bounds without a layout pass.
pub const TEXT_WIDTH_FACTOR: f64 = 0.6;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties shared by all shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    #[serde(default)]
    pub fill_color: Option<SerializableColor>,
}

impl ShapeStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            fill_color: None,
        }
    }
}

/// Enum wrapper for all shape kinds.
///
/// A closed sum type: geometry, hit-testing, and rendering all match
/// exhaustively so a new variant cannot be half-wired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Line(Line),
    Freehand(Freehand),
    Text(Text),
    StickyNote(StickyNote),
    NoteEmbed(NoteEmbed),
    MindMapNode(MindMapNode),
    Connector(Connector),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id,
            Shape::Circle(s) => s.id,
            Shape::Line(s) => s.id,
            Shape::Freehand(s) => s.id,
            Shape::Text(s) => s.id,
            Shape::StickyNote(s) => s.id,
            Shape::NoteEmbed(s) => s.id,
            Shape::MindMapNode(s) => s.id,
            Shape::Connector(s) => s.id,
        }
    }

    /// Anchor position of the shape. For stroke-like kinds this is the
    /// first point; for circles the center; otherwise the top-left corner.
    pub fn position(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.position,
            Shape::Circle(s) => s.position,
            Shape::Line(s) => s.start,
            Shape::Freehand(s) => s.position,
            Shape::Text(s) => s.position,
            Shape::StickyNote(s) => s.position,
            Shape::NoteEmbed(s) => s.position,
            Shape::MindMapNode(s) => s.position,
            Shape::Connector(s) => s.start,
        }
    }

    /// Bounding box in scene coordinates.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Freehand(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
            Shape::StickyNote(s) => s.bounds(),
            Shape::NoteEmbed(s) => s.bounds(),
            Shape::MindMapNode(s) => s.bounds(),
            Shape::Connector(s) => s.bounds(),
        }
    }

    /// Check whether a point (in scene coordinates) hits this shape.
    pub fn contains_point(&self, point: Point) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains_point(point),
            Shape::Circle(s) => s.contains_point(point),
            Shape::Line(s) => s.contains_point(point),
            Shape::Freehand(s) => s.contains_point(point),
            Shape::Text(s) => s.contains_point(point),
            Shape::StickyNote(s) => s.contains_point(point),
            Shape::NoteEmbed(s) => s.contains_point(point),
            Shape::MindMapNode(s) => s.contains_point(point),
            Shape::Connector(s) => s.contains_point(point),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Rectangle(s) => &s.style,
            Shape::Circle(s) => &s.style,
            Shape::Line(s) => &s.style,
            Shape::Freehand(s) => &s.style,
            Shape::Text(s) => &s.style,
            Shape::StickyNote(s) => &s.style,
            Shape::NoteEmbed(s) => &s.style,
            Shape::MindMapNode(s) => &s.style,
            Shape::Connector(s) => &s.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Rectangle(s) => &mut s.style,
            Shape::Circle(s) => &mut s.style,
            Shape::Line(s) => &mut s.style,
            Shape::Freehand(s) => &mut s.style,
            Shape::Text(s) => &mut s.style,
            Shape::StickyNote(s) => &mut s.style,
            Shape::NoteEmbed(s) => &mut s.style,
            Shape::MindMapNode(s) => &mut s.style,
            Shape::Connector(s) => &mut s.style,
        }
    }

    /// Check if this shape is a connector.
    pub fn is_connector(&self) -> bool {
        matches!(self, Shape::Connector(_))
    }

    /// If this shape is a connector, return the IDs it links.
    pub fn connector_endpoints(&self) -> Option<(ShapeId, ShapeId)> {
        match self {
            Shape::Connector(c) => Some((c.from_id, c.to_id)),
            _ => None,
        }
    }
}

/// Bounding box of a point list. Returns a zero-area rect at the origin
/// for an empty list.
pub(crate) fn points_bounds(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };

    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x;
    let mut max_y = first.y;

    for point in &points[1..] {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::new(min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_roundtrip() {
        let color = SerializableColor::new(10, 20, 30, 200);
        let peniko: Color = color.into();
        let back: SerializableColor = peniko.into();
        assert_eq!(color, back);
    }

    #[test]
    fn test_points_bounds() {
        let bounds = points_bounds(&[
            Point::new(10.0, 5.0),
            Point::new(-3.0, 40.0),
            Point::new(22.0, 18.0),
        ]);
        assert!((bounds.x0 + 3.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 5.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 22.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_points_bounds_empty() {
        assert_eq!(points_bounds(&[]), Rect::ZERO);
    }

    #[test]
    fn test_shape_dispatch() {
        let rect = Rectangle::new(Point::new(5.0, 5.0), 20.0, 10.0);
        let shape = Shape::Rectangle(rect);
        assert!(shape.contains_point(Point::new(10.0, 10.0)));
        assert!(!shape.is_connector());
        assert!(shape.connector_endpoints().is_none());
    }
}
