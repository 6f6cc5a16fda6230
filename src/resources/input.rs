//! Per-frame pointer and keyboard input resource.
//!
//! Captures the subset of input state the menu cares about and exposes it
//! to systems via the [`InputState`] resource: the pointer position and raw
//! delta, the primary (left) mouse button and the back key (Escape).
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean button state with press/release edges.
pub struct BoolState {
    /// Whether the button is currently held this frame.
    pub active: bool,
    /// Whether the button was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the button was just released this frame.
    pub just_released: bool,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
        }
    }
}

impl BoolState {
    /// Update from a fresh "is down" sample, deriving the edges from the
    /// previous sample.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Resource capturing the per-frame input relevant to the menu.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Pointer position in screen pixels.
    pub pointer: Vector2,
    /// Raw pointer movement since the previous frame.
    pub pointer_delta: Vector2,
    pub primary: BoolState,
    pub back: BoolState,

    pub primary_binding: MouseButton,
    pub back_binding: KeyboardKey,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer: Vector2 { x: 0.0, y: 0.0 },
            pointer_delta: Vector2 { x: 0.0, y: 0.0 },
            primary: BoolState::default(),
            back: BoolState::default(),
            primary_binding: MouseButton::MOUSE_BUTTON_LEFT,
            back_binding: KeyboardKey::KEY_ESCAPE,
        }
    }
}

impl InputState {
    /// Move the pointer to `pos`, recording the movement as the frame delta.
    pub fn move_pointer(&mut self, pos: Vector2) {
        self.pointer_delta = Vector2 {
            x: pos.x - self.pointer.x,
            y: pos.y - self.pointer.y,
        };
        self.pointer = pos;
    }
}
