//! Immediate-mode drawing surface abstraction.

use jotboard_core::mindmap::TextMeasurer;
use kurbo::{Point, Rect, Size};
use peniko::Color;

/// A 2D drawing surface with a standard immediate-mode API.
///
/// The engine never sets surfaces up (sizing, device-pixel-ratio); it
/// draws onto whatever it is given. Hosts back this with a real canvas;
/// tests use [`RecordingSurface`].
pub trait DrawSurface {
    /// Surface size in drawing units.
    fn size(&self) -> Size;

    /// Fill the whole surface with one color.
    fn clear(&mut self, color: Color);

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64);

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64);

    /// Cubic Bezier from `from` to `to` through two control points.
    fn stroke_cubic(
        &mut self,
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
        color: Color,
        width: f64,
    );

    /// Draw a single line of text; `origin` is the top-left corner.
    fn fill_text(&mut self, text: &str, origin: Point, font_size: f64, color: Color);

    /// Measure a single line of text.
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// One recorded drawing call.
#[derive(Debug, Clone)]
pub enum DrawOp {
    Clear(Color),
    Line {
        from: Point,
        to: Point,
    },
    Polyline {
        points: Vec<Point>,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
    },
    FillCircle {
        center: Point,
        radius: f64,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
    },
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    Text {
        text: String,
        origin: Point,
        font_size: f64,
    },
}

/// Surface that records drawing calls instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            ops: Vec::new(),
        }
    }

    /// All text drawn so far, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of non-clear, non-text drawing calls.
    pub fn geometry_ops(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| !matches!(op, DrawOp::Clear(_) | DrawOp::Text { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn stroke_line(&mut self, from: Point, to: Point, _color: Color, _width: f64) {
        self.ops.push(DrawOp::Line { from, to });
    }

    fn stroke_polyline(&mut self, points: &[Point], _color: Color, _width: f64) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, _color: Color, _width: f64) {
        self.ops.push(DrawOp::StrokeRect { rect });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, _color: Color) {
        self.ops.push(DrawOp::FillCircle { center, radius });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, _color: Color, _width: f64) {
        self.ops.push(DrawOp::StrokeCircle { center, radius });
    }

    fn stroke_cubic(
        &mut self,
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
        _color: Color,
        _width: f64,
    ) {
        self.ops.push(DrawOp::Cubic {
            from,
            ctrl1,
            ctrl2,
            to,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, font_size: f64, _color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            origin,
            font_size,
        });
    }

    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * 0.6
    }
}

impl TextMeasurer for RecordingSurface {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        DrawSurface::text_width(self, text, font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_collects_ops() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.clear(Color::WHITE);
        surface.stroke_line(Point::ZERO, Point::new(10.0, 10.0), Color::BLACK, 1.0);
        surface.fill_text("hi", Point::ZERO, 12.0, Color::BLACK);

        assert_eq!(surface.ops.len(), 3);
        assert_eq!(surface.texts(), vec!["hi"]);
        assert_eq!(surface.geometry_ops(), 1);
    }
}
