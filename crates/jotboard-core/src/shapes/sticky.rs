//! Sticky note shape and its color palette.

use super::{SerializableColor, ShapeId, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use uuid::Uuid;

/// One entry in the sticky palette: background, border, and text colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickyColor {
    pub background: SerializableColor,
    pub border: SerializableColor,
    pub text: SerializableColor,
}

/// The fixed sticky-note palette. `color_index` on a note indexes into
/// this table modulo its length, so stored indices never go stale.
pub const STICKY_PALETTE: [StickyColor; 6] = [
    // Yellow
    StickyColor {
        background: SerializableColor::new(255, 244, 160, 255),
        border: SerializableColor::new(230, 210, 90, 255),
        text: SerializableColor::new(66, 60, 20, 255),
    },
    // Green
    StickyColor {
        background: SerializableColor::new(200, 240, 190, 255),
        border: SerializableColor::new(140, 200, 125, 255),
        text: SerializableColor::new(35, 66, 30, 255),
    },
    // Blue
    StickyColor {
        background: SerializableColor::new(190, 225, 250, 255),
        border: SerializableColor::new(120, 175, 225, 255),
        text: SerializableColor::new(25, 50, 75, 255),
    },
    // Pink
    StickyColor {
        background: SerializableColor::new(250, 205, 225, 255),
        border: SerializableColor::new(225, 140, 180, 255),
        text: SerializableColor::new(80, 30, 55, 255),
    },
    // Orange
    StickyColor {
        background: SerializableColor::new(255, 220, 180, 255),
        border: SerializableColor::new(235, 170, 110, 255),
        text: SerializableColor::new(85, 50, 20, 255),
    },
    // Purple
    StickyColor {
        background: SerializableColor::new(225, 210, 250, 255),
        border: SerializableColor::new(175, 145, 225, 255),
        text: SerializableColor::new(55, 35, 85, 255),
    },
];

/// Pick a palette index for a new note.
/// Counter + splitmix32-style mixer; varied without needing an RNG.
pub fn random_palette_index() -> usize {
    static SEED_COUNTER: AtomicU32 = AtomicU32::new(1);

    let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut x = counter.wrapping_mul(0x9E3779B9);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EBCA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2AE35);
    x ^= x >> 16;
    x as usize % STICKY_PALETTE.len()
}

/// A sticky note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickyNote {
    pub id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the note.
    pub width: f64,
    /// Height of the note.
    pub height: f64,
    /// Note text.
    pub text: String,
    /// Index into the sticky palette.
    pub color_index: usize,
    /// Style properties.
    pub style: ShapeStyle,
}

impl StickyNote {
    /// Create a new sticky note.
    pub fn new(position: Point, width: f64, height: f64, color_index: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            text: String::new(),
            color_index,
            style: ShapeStyle::default(),
        }
    }

    /// The palette entry for this note.
    pub fn palette_color(&self) -> StickyColor {
        STICKY_PALETTE[self.color_index % STICKY_PALETTE.len()]
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
