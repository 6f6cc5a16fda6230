//! Opacity fade primitive.
//!
//! Every menu transition is built from timed opacity fades. A fade eases
//! from `from` to `to` over `duration` seconds with the smoothstep curve
//! `x²(3 − 2x)`, which starts and ends with zero velocity:
//!
//! ```text
//! value(t) = from + (to - from) * smoothstep(min(t / duration, 1))
//! ```
//!
//! [`FadeState`] is the explicit state of a running fade. The menu
//! transition driver advances it once per tick with the frame delta and
//! commits the exact end value when the duration has elapsed.

use bevy_ecs::prelude::Entity;

/// Smoothstep easing. Input is clamped to `[0, 1]`.
pub fn smoothstep(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Linearly interpolate between two floats.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Eased opacity `elapsed` seconds into a fade from `from` to `to`.
///
/// A non-positive `duration` jumps straight to `to`.
pub fn fade_value(from: f32, to: f32, elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return to;
    }
    lerp_f32(from, to, smoothstep((elapsed / duration).min(1.0)))
}

/// What happens around a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeKind {
    /// Opacity is reset to `from` before the first tick.
    In,
    /// Starts at the current opacity; the widget is deactivated at the end.
    Out,
    /// Plain opacity change on an always-present element (the overlay).
    Canvas,
}

/// A running fade on one widget entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeState {
    pub target: Entity,
    pub kind: FadeKind,
    pub from: f32,
    pub to: f32,
    pub elapsed: f32,
    pub duration: f32,
}

impl FadeState {
    pub fn new(target: Entity, kind: FadeKind, from: f32, to: f32, duration: f32) -> Self {
        Self {
            target,
            kind,
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance by `dt` seconds and return the opacity to display.
    ///
    /// Once finished this returns exactly `to`, so floating-point drift never
    /// leaves a widget at 0.9999.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        if self.is_finished() {
            self.to
        } else {
            fade_value(self.from, self.to, self.elapsed, self.duration)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
