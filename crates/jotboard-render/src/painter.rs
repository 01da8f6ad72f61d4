//! Scene painter for the interactive drawing loop.

use crate::surface::DrawSurface;
use jotboard_core::camera::Camera;
use jotboard_core::mindmap::{CHILD_FONT_SIZE, ROOT_FONT_SIZE};
use jotboard_core::scene::Scene;
use jotboard_core::shapes::{Shape, ShapeId};
use kurbo::{Affine, Point, Rect};
use peniko::Color;

/// Font size for sticky-note text.
const STICKY_FONT_SIZE: f64 = 14.0;
/// Inner padding for sticky and embed card text.
const CARD_PADDING: f64 = 10.0;
/// How far the selection outline sits outside the shape bounds.
const SELECTION_MARGIN: f64 = 4.0;

fn canvas_background() -> Color {
    Color::from_rgba8(250, 250, 250, 255)
}

fn selection_color() -> Color {
    Color::from_rgba8(59, 130, 246, 255)
}

fn card_face() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

fn card_border() -> Color {
    Color::from_rgba8(180, 185, 195, 255)
}

fn muted_text() -> Color {
    Color::from_rgba8(110, 115, 125, 255)
}

fn node_face(is_root: bool) -> Color {
    if is_root {
        Color::from_rgba8(219, 234, 254, 255)
    } else {
        Color::from_rgba8(241, 245, 249, 255)
    }
}

/// Everything the painter needs to draw one frame.
pub struct SceneView<'a> {
    pub scene: &'a Scene,
    pub camera: &'a Camera,
    /// Selected shape, outlined on top of the scene.
    pub selection: Option<ShapeId>,
    /// Shape being drawn right now (not in the scene yet).
    pub in_progress: Option<&'a Shape>,
}

/// Paint the interactive view: background, shapes in z-order, the
/// in-progress shape, then the selection outline.
pub fn paint_scene(view: &SceneView, surface: &mut dyn DrawSurface) {
    surface.clear(canvas_background());

    let transform = view.camera.transform();
    let scale = view.camera.zoom;

    for shape in &view.scene.shapes {
        draw_shape(surface, shape, transform, scale);
    }
    if let Some(shape) = view.in_progress {
        draw_shape(surface, shape, transform, scale);
    }

    if let Some(shape) = view.selection.and_then(|id| view.scene.get(id)) {
        let outline = map_rect(transform, shape.bounds()).inflate(SELECTION_MARGIN, SELECTION_MARGIN);
        surface.stroke_rect(outline, selection_color(), 1.5);
    }
}

/// Map an axis-aligned rect through a scale+translate transform.
fn map_rect(transform: Affine, rect: Rect) -> Rect {
    let p0 = transform * Point::new(rect.x0, rect.y0);
    let p1 = transform * Point::new(rect.x1, rect.y1);
    Rect::new(p0.x, p0.y, p1.x, p1.y)
}

/// Draw one shape through the given transform. `scale` is the uniform
/// scale factor of the transform, applied to stroke widths and fonts.
pub(crate) fn draw_shape(surface: &mut dyn DrawSurface, shape: &Shape, transform: Affine, scale: f64) {
    let stroke = shape.style().stroke();
    let stroke_width = shape.style().stroke_width * scale;

    match shape {
        Shape::Rectangle(rect) => {
            let mapped = map_rect(transform, rect.as_rect());
            if let Some(fill) = rect.style.fill() {
                surface.fill_rect(mapped, fill);
            }
            surface.stroke_rect(mapped, stroke, stroke_width);
        }
        Shape::Circle(circle) => {
            let center = transform * circle.position;
            let radius = circle.radius * scale;
            if let Some(fill) = circle.style.fill() {
                surface.fill_circle(center, radius, fill);
            }
            surface.stroke_circle(center, radius, stroke, stroke_width);
        }
        Shape::Line(line) => {
            surface.stroke_line(transform * line.start, transform * line.end, stroke, stroke_width);
        }
        Shape::Freehand(stroke_shape) => {
            if stroke_shape.points.len() >= 2 {
                let mapped: Vec<Point> =
                    stroke_shape.points.iter().map(|p| transform * *p).collect();
                surface.stroke_polyline(&mapped, stroke, stroke_width);
            } else if let Some(point) = stroke_shape.points.first() {
                // A single-sample stroke still leaves a dot.
                surface.fill_circle(transform * *point, stroke_width.max(1.0) / 2.0, stroke);
            }
        }
        Shape::Text(text) => {
            surface.fill_text(
                &text.content,
                transform * text.position,
                text.font_size * scale,
                stroke,
            );
        }
        Shape::StickyNote(note) => {
            let palette = note.palette_color();
            let mapped = map_rect(transform, note.as_rect());
            surface.fill_rect(mapped, palette.background.into());
            surface.stroke_rect(mapped, palette.border.into(), 2.0 * scale);

            let font = STICKY_FONT_SIZE * scale;
            let pad = CARD_PADDING * scale;
            for (i, line) in note.text.lines().enumerate() {
                let origin = Point::new(
                    mapped.x0 + pad,
                    mapped.y0 + pad + i as f64 * font * 1.25,
                );
                if origin.y + font > mapped.y1 {
                    break;
                }
                surface.fill_text(line, origin, font, palette.text.into());
            }
        }
        Shape::NoteEmbed(embed) => {
            let mapped = map_rect(transform, embed.as_rect());
            surface.fill_rect(mapped, card_face());
            surface.stroke_rect(mapped, card_border(), 1.5 * scale);

            let pad = CARD_PADDING * scale;
            let title_font = 14.0 * scale;
            surface.fill_text(
                &embed.cached_title,
                Point::new(mapped.x0 + pad, mapped.y0 + pad),
                title_font,
                Color::BLACK,
            );
            let preview_font = 11.0 * scale;
            for (i, line) in embed.cached_preview.lines().enumerate() {
                let origin = Point::new(
                    mapped.x0 + pad,
                    mapped.y0 + pad + title_font * 1.5 + i as f64 * preview_font * 1.3,
                );
                if origin.y + preview_font > mapped.y1 {
                    break;
                }
                surface.fill_text(line, origin, preview_font, muted_text());
            }
        }
        Shape::MindMapNode(node) => {
            let mapped = map_rect(transform, node.as_rect());
            surface.fill_rect(mapped, node_face(node.is_root));
            surface.stroke_rect(mapped, card_border(), 1.5 * scale);

            let base_font = if node.is_root {
                ROOT_FONT_SIZE
            } else {
                CHILD_FONT_SIZE
            };
            let font = base_font * scale;
            let text_width = surface.text_width(&node.text, font);
            let origin = Point::new(
                mapped.x0 + ((mapped.width() - text_width) / 2.0).max(4.0 * scale),
                mapped.y0 + (mapped.height() - font) / 2.0,
            );
            surface.fill_text(&node.text, origin, font, Color::BLACK);
        }
        Shape::Connector(connector) => {
            let (ctrl1, ctrl2) = connector.control_points();
            surface.stroke_cubic(
                transform * connector.start,
                transform * ctrl1,
                transform * ctrl2,
                transform * connector.end,
                stroke,
                stroke_width,
            );
        }
    }
}
