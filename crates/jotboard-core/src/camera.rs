//! Camera: the pan/zoom view transform.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum allowed zoom level.
pub const MIN_ZOOM: f64 = 0.1;
/// Maximum allowed zoom level.
pub const MAX_ZOOM: f64 = 5.0;
/// Multiplier applied by the fixed-step zoom shortcuts and buttons.
pub const ZOOM_STEP: f64 = 1.2;

/// Camera manages the view transform for the canvas.
///
/// `screen = scene * zoom + offset`; the inverse maps pointer events back
/// into scene coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan), in screen units.
    pub offset: Vec2,
    /// Current zoom level (1.0 = 100%).
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Create a camera at 100% zoom with no pan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Affine transform converting scene coordinates to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Inverse transform converting screen coordinates to scene coordinates.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    /// Convert a screen point to scene coordinates.
    pub fn screen_to_scene(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a scene point to screen coordinates.
    pub fn scene_to_screen(&self, scene_point: Point) -> Point {
        self.transform() * scene_point
    }

    /// Pan the camera by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Set the zoom level directly, clamped to the allowed range,
    /// keeping the given screen point fixed.
    pub fn set_zoom_at(&mut self, screen_point: Point, zoom: f64) {
        let new_zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        // The scene point under the cursor must stay under the cursor.
        let scene_point = self.screen_to_scene(screen_point);
        self.zoom = new_zoom;
        let new_screen = self.scene_to_screen(scene_point);
        self.offset += Vec2::new(
            screen_point.x - new_screen.x,
            screen_point.y - new_screen.y,
        );
    }

    /// Multiply the zoom by a factor, anchored at the given screen point.
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) {
        self.set_zoom_at(screen_point, self.zoom * factor);
    }

    /// Step zoom in, anchored at the given screen point.
    pub fn zoom_in(&mut self, anchor: Point) {
        self.zoom_at(anchor, ZOOM_STEP);
    }

    /// Step zoom out, anchored at the given screen point.
    pub fn zoom_out(&mut self, anchor: Point) {
        self.zoom_at(anchor, 1.0 / ZOOM_STEP);
    }

    /// Reset to 100% zoom and no pan.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = 1.0;
    }

    /// Fit the view. An alias of `reset`; no content-fitting computation
    /// beyond that is defined for the interactive view.
    pub fn fit(&mut self) {
        self.reset();
    }
}
