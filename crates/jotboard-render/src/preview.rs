//! Stateless thumbnail rendering of serialized scenes.
//!
//! Used outside the interactive editor (list and grid views): no
//! selection indicators, no camera, no interactivity.

use crate::painter::draw_shape;
use crate::surface::DrawSurface;
use jotboard_core::scene::Scene;
use kurbo::{Affine, Point, Vec2};
use log::debug;
use peniko::Color;

/// Padding around the fitted content, in surface units.
pub const PREVIEW_PADDING: f64 = 16.0;

/// Font size for placeholder messages.
const PLACEHOLDER_FONT_SIZE: f64 = 13.0;

/// Message drawn for a scene with no shapes.
pub const EMPTY_PLACEHOLDER: &str = "Empty canvas";
/// Message drawn when the serialized content cannot be read.
pub const UNAVAILABLE_PLACEHOLDER: &str = "Preview unavailable";

fn preview_background() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

fn placeholder_color() -> Color {
    Color::from_rgba8(150, 153, 160, 255)
}

/// Render a serialized document as a thumbnail onto the given surface.
///
/// Malformed content renders the "unavailable" placeholder and an empty
/// scene the "empty" placeholder; neither is an error.
pub fn render_preview(serialized: &str, surface: &mut dyn DrawSurface) {
    surface.clear(preview_background());

    let scene = match Scene::from_json(serialized) {
        Ok(scene) => scene,
        Err(err) => {
            debug!("unreadable scene content for preview: {}", err);
            draw_placeholder(surface, UNAVAILABLE_PLACEHOLDER);
            return;
        }
    };

    let Some(bounds) = scene.bounds() else {
        draw_placeholder(surface, EMPTY_PLACEHOLDER);
        return;
    };

    let size = surface.size();
    let fit_width = (size.width - PREVIEW_PADDING * 2.0).max(1.0);
    let fit_height = (size.height - PREVIEW_PADDING * 2.0).max(1.0);
    let scale = (fit_width / bounds.width().max(1.0)).min(fit_height / bounds.height().max(1.0));

    // Center the scaled content on the surface.
    let center = bounds.center();
    let offset = Vec2::new(
        size.width / 2.0 - center.x * scale,
        size.height / 2.0 - center.y * scale,
    );
    let transform = Affine::translate(offset) * Affine::scale(scale);

    for shape in &scene.shapes {
        draw_shape(surface, shape, transform, scale);
    }
}

fn draw_placeholder(surface: &mut dyn DrawSurface, message: &str) {
    let size = surface.size();
    let width = surface.text_width(message, PLACEHOLDER_FONT_SIZE);
    let origin = Point::new(
        (size.width - width) / 2.0,
        (size.height - PLACEHOLDER_FONT_SIZE) / 2.0,
    );
    surface.fill_text(message, origin, PLACEHOLDER_FONT_SIZE, placeholder_color());
}
