//! Custom cursor texture.
//!
//! Non-send resource: raylib textures must stay on the main thread. Absent
//! when no cursor texture is configured or it failed to load, in which case
//! the OS cursor stays visible.

use raylib::prelude::{Texture2D, Vector2};

pub struct CursorSprite {
    pub texture: Texture2D,
    /// Pixel inside the texture that sits under the pointer.
    pub hotspot: Vector2,
}

impl CursorSprite {
    pub fn new(texture: Texture2D, hotspot: (f32, f32)) -> Self {
        Self {
            texture,
            hotspot: Vector2 {
                x: hotspot.0,
                y: hotspot.1,
            },
        }
    }

    /// Top-left corner to draw the texture at for a pointer at `pointer`.
    pub fn draw_origin(&self, pointer: Vector2) -> Vector2 {
        Vector2 {
            x: pointer.x - self.hotspot.x,
            y: pointer.y - self.hotspot.y,
        }
    }
}
