//! Note embed shape: a read-only snapshot of an external note.

use super::{ShapeId, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of characters of note content kept as the embed preview.
pub const PREVIEW_CHAR_LIMIT: usize = 120;

/// A card referencing a note in the external note store.
///
/// The title and preview are cached at creation time; later edits to the
/// note do not update the embed. The embed never owns the note's lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEmbed {
    pub id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the card.
    pub width: f64,
    /// Height of the card.
    pub height: f64,
    /// Identifier of the note in the external store.
    pub note_id: String,
    /// Title cached at creation time.
    pub cached_title: String,
    /// Preview text cached at creation time.
    pub cached_preview: String,
    /// Style properties.
    pub style: ShapeStyle,
}

impl NoteEmbed {
    /// Default card size.
    pub const DEFAULT_WIDTH: f64 = 220.0;
    pub const DEFAULT_HEIGHT: f64 = 140.0;

    /// Create an embed card from a fetched note.
    pub fn new(position: Point, note_id: String, title: String, content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            note_id,
            cached_title: title,
            cached_preview: preview_of(content),
            style: ShapeStyle::default(),
        }
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

/// First `PREVIEW_CHAR_LIMIT` characters of the content, on char boundaries.
fn preview_of(content: &str) -> String {
    content.chars().take(PREVIEW_CHAR_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncation() {
        let long = "x".repeat(500);
        let embed = NoteEmbed::new(Point::ZERO, "n1".into(), "Title".into(), &long);
        assert_eq!(embed.cached_preview.chars().count(), PREVIEW_CHAR_LIMIT);
    }

    #[test]
    fn test_preview_keeps_short_content() {
        let embed = NoteEmbed::new(Point::ZERO, "n1".into(), "Title".into(), "short note");
        assert_eq!(embed.cached_preview, "short note");
    }

    #[test]
    fn test_embed_hit() {
        let embed = NoteEmbed::new(Point::new(10.0, 10.0), "n1".into(), "T".into(), "c");
        assert!(embed.contains_point(Point::new(100.0, 100.0)));
        assert!(!embed.contains_point(Point::new(500.0, 500.0)));
    }
}
