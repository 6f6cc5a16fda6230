//! Cursor click feedback.
//!
//! On every primary button press edge:
//! 1. plays the click sound, unless sound FX are off or no sound is loaded;
//! 2. spawns a [`ClickEffect`] under the pointer, unless visual FX are off or
//!    no effect template or camera is available.
//!
//! The effect position is the pointer plus the raw pointer delta scaled by
//! `sensitivity * delta_scale`, projected through the camera. The effect
//! carries a [`Ttl`] and is removed by the TTL system.

use crate::components::clickeffect::ClickEffect;
use crate::components::mapposition::MapPosition;
use crate::components::ttl::Ttl;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::cursoreffect::CursorEffectConfig;
use crate::resources::input::InputState;
use crate::resources::settings::Settings;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use std::f32::consts::TAU;

pub fn cursor_effect_system(
    input: Res<InputState>,
    settings: Res<Settings>,
    config: Option<Res<CursorEffectConfig>>,
    camera: Option<Res<Camera2DRes>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    if !input.primary.just_pressed {
        return;
    }
    let Some(config) = config else {
        return;
    };

    if settings.sound_fx()
        && let Some(id) = &config.click_sound
    {
        audio_cmds.write(AudioCmd::PlayFx { id: id.clone() });
    }

    if !settings.visual_fx() {
        return;
    }
    let (Some(template), Some(camera)) = (config.effect, camera) else {
        return;
    };

    let scale = settings.sensitivity() * config.delta_scale;
    let screen = Vector2 {
        x: input.pointer.x + input.pointer_delta.x * scale,
        y: input.pointer.y + input.pointer_delta.y * scale,
    };
    let world = camera.screen_to_world(screen);

    let sparks = (0..template.sparks)
        .map(|i| (i as f32 + fastrand::f32() * 0.5) * TAU / template.sparks as f32)
        .collect();

    commands.spawn((
        ClickEffect {
            lifetime: config.lifetime,
            radius: template.radius,
            color: template.color,
            sparks,
        },
        MapPosition { pos: world },
        ZIndex(config.depth),
        Ttl::new(config.lifetime),
    ));
}
