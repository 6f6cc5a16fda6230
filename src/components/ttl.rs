//! Time-to-live component for automatic entity despawning.
//!
//! The [`Ttl`] component counts down time each frame. When the remaining time
//! reaches zero, the entity is automatically despawned. There is no callback;
//! it's a "fire and forget" mechanism used by click effects.
//!
//! # How It Works
//!
//! 1. Entity is spawned with a `Ttl` component containing remaining time
//! 2. The `ttl_system` runs each frame:
//!    - Decrements remaining time by the scaled frame delta
//!    - When `remaining <= 0`, despawns the entity
//!
//! # Related
//!
//! - [`crate::systems::ttl::ttl_system`] – system that updates and despawns entities
//! - [`crate::components::clickeffect::ClickEffect`] – main user of this component

use bevy_ecs::prelude::Component;

/// Time-to-live component that automatically despawns entities after a duration.
///
/// The countdown respects [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime).
#[derive(Component, Clone, Copy, Debug)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    /// Create a new Ttl with the given duration in seconds.
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
