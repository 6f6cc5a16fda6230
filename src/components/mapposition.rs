//! World-space position component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position of an entity in world coordinates, as seen through the
/// [`Camera2DRes`](crate::resources::camera2d::Camera2DRes).
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
