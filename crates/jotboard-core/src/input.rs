//! Input state tracking for pointer and keyboard events.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Double-click detection thresholds.
const DOUBLE_CLICK_TIME_MS: u128 = 500;
const DOUBLE_CLICK_DISTANCE: f64 = 5.0;

/// Tracks pointer and keyboard state across events.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current pointer position in screen coordinates.
    pub pointer_position: Point,
    /// Currently pressed mouse buttons.
    pressed_buttons: HashSet<MouseButton>,
    /// Current modifier keys state.
    pub modifiers: Modifiers,
    /// Currently pressed keys, by name.
    pressed_keys: HashSet<String>,
    /// Last click time for double-click detection.
    last_click_time: Option<Instant>,
    /// Last click position for double-click detection.
    last_click_position: Option<Point>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer_position: Point::ZERO,
            pressed_buttons: HashSet::new(),
            modifiers: Modifiers::default(),
            pressed_keys: HashSet::new(),
            last_click_time: None,
            last_click_position: None,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a button press. Returns true when this press completes a
    /// double-click (two left clicks close together in time and space).
    pub fn note_pointer_down(&mut self, position: Point, button: MouseButton) -> bool {
        self.pointer_position = position;
        self.pressed_buttons.insert(button);

        if button != MouseButton::Left {
            return false;
        }

        let now = Instant::now();
        let double = match (self.last_click_time, self.last_click_position) {
            (Some(last_time), Some(last_pos)) => {
                now.duration_since(last_time).as_millis() < DOUBLE_CLICK_TIME_MS
                    && position.distance(last_pos) < DOUBLE_CLICK_DISTANCE
            }
            _ => false,
        };

        if double {
            // Reset so a triple-click doesn't read as another double.
            self.last_click_time = None;
            self.last_click_position = None;
        } else {
            self.last_click_time = Some(now);
            self.last_click_position = Some(position);
        }

        double
    }

    /// Record a button release.
    pub fn note_pointer_up(&mut self, position: Point, button: MouseButton) {
        self.pointer_position = position;
        self.pressed_buttons.remove(&button);
    }

    /// Record pointer movement. Returns the delta since the last position.
    pub fn note_pointer_move(&mut self, position: Point) -> Vec2 {
        let delta = position - self.pointer_position;
        self.pointer_position = position;
        delta
    }

    /// Record a key press.
    pub fn note_key_down(&mut self, key: &str) {
        self.pressed_keys.insert(key.to_string());
    }

    /// Record a key release.
    pub fn note_key_up(&mut self, key: &str) {
        self.pressed_keys.remove(key);
    }

    /// Update modifier keys state.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    /// Whether the space bar is held (space-drag panning).
    pub fn space_held(&self) -> bool {
        self.is_key_pressed(" ") || self.is_key_pressed("Space")
    }
}
