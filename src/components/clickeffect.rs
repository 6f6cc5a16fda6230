//! Transient click feedback spawned under the cursor.
//!
//! A [`ClickEffect`] entity lives for a fixed lifetime (driven by a
//! [`Ttl`](super::ttl::Ttl) on the same entity) and is drawn as a ring of
//! sparks expanding from its [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;
use smallvec::SmallVec;

/// Visual parameters copied from the configured effect template on spawn.
#[derive(Component, Clone, Debug)]
pub struct ClickEffect {
    /// Total lifetime in seconds, used to compute the expansion progress.
    pub lifetime: f32,
    /// Radius reached at the end of the lifetime.
    pub radius: f32,
    pub color: Color,
    /// Spark directions in radians.
    pub sparks: SmallVec<[f32; 8]>,
}

impl ClickEffect {
    /// Expansion progress in `[0, 1]` given the remaining lifetime.
    pub fn progress(&self, remaining: f32) -> f32 {
        if self.lifetime <= 0.0 {
            return 1.0;
        }
        (1.0 - remaining / self.lifetime).clamp(0.0, 1.0)
    }
}
