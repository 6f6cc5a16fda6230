//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems can agree on
//! a single world/screen transform. Click effects are spawned in world space
//! through [`Camera2DRes::screen_to_world`].

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Project a screen-space point into world space.
    ///
    /// Same transform as raylib's `GetScreenToWorld2D`: undo the offset,
    /// the zoom and the rotation (degrees), then add the camera target.
    pub fn screen_to_world(&self, screen: Vector2) -> Vector2 {
        let cam = &self.0;
        let zoom = if cam.zoom == 0.0 { 1.0 } else { cam.zoom };
        let x = (screen.x - cam.offset.x) / zoom;
        let y = (screen.y - cam.offset.y) / zoom;
        let (sin, cos) = (-cam.rotation.to_radians()).sin_cos();
        Vector2 {
            x: cam.target.x + x * cos - y * sin,
            y: cam.target.y + x * sin + y * cos,
        }
    }
}
