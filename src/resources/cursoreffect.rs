//! Cursor feedback configuration.
//!
//! Built from [`MenuConfig`] at startup. Every optional piece may be absent;
//! the cursor effect system silently skips what is not configured.

use crate::resources::menuconfig::MenuConfig;
use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

/// Audio id under which the click sound is loaded.
pub const CLICK_SOUND_ID: &str = "cursor_click";
/// Pointer delta multiplier applied on top of the user sensitivity.
pub const DELTA_SCALE: f32 = 50.0;

/// Look of the spawned click effect.
#[derive(Debug, Clone, Copy)]
pub struct ClickEffectTemplate {
    pub radius: f32,
    pub color: Color,
    pub sparks: usize,
}

impl Default for ClickEffectTemplate {
    fn default() -> Self {
        Self {
            radius: 28.0,
            color: Color::new(255, 214, 102, 255),
            sparks: 8,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct CursorEffectConfig {
    /// Audio id of the click sound, once loaded.
    pub click_sound: Option<String>,
    pub effect: Option<ClickEffectTemplate>,
    /// Seconds a click effect stays alive.
    pub lifetime: f32,
    /// Render depth of the click effect.
    pub depth: i32,
    pub delta_scale: f32,
}

impl Default for CursorEffectConfig {
    fn default() -> Self {
        Self {
            click_sound: None,
            effect: Some(ClickEffectTemplate::default()),
            lifetime: 1.0,
            depth: 10,
            delta_scale: DELTA_SCALE,
        }
    }
}

impl CursorEffectConfig {
    pub fn from_config(config: &MenuConfig) -> Self {
        Self {
            click_sound: config
                .click_sound
                .as_ref()
                .map(|_| CLICK_SOUND_ID.to_string()),
            effect: config.click_effect.then(ClickEffectTemplate::default),
            lifetime: config.effect_lifetime,
            depth: config.effect_depth,
            delta_scale: DELTA_SCALE,
        }
    }
}
