//! Text shape.

use super::{ShapeId, ShapeStyle, TEXT_WIDTH_FACTOR};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-standing text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub id: ShapeId,
    /// Position (top-left corner of the text box).
    pub position: Point,
    /// The text content.
    pub content: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Text {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f64 = 20.0;

    /// Create a new text shape.
    pub fn new(position: Point, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content,
            font_size: Self::DEFAULT_FONT_SIZE,
            style: ShapeStyle::default(),
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Approximate width from character count; actual width depends on the
    /// font, which the engine deliberately does not know about.
    fn approximate_width(&self) -> f64 {
        self.content.chars().count() as f64 * self.font_size * TEXT_WIDTH_FACTOR
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.approximate_width(),
            self.position.y + self.font_size,
        )
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}
