//! Settings systems.
//!
//! - [`toggle_changed_observer`] and [`slider_changed_observer`] forward
//!   widget changes to the [`Settings`] setters, which persist immediately.
//! - [`apply_master_volume`] keeps the audio thread's master volume in line
//!   with the master sound flag.

use crate::components::widget::WidgetRole;
use crate::events::audio::AudioCmd;
use crate::events::menu::{SliderChangedEvent, ToggleChangedEvent};
use crate::resources::settings::Settings;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

pub fn toggle_changed_observer(trigger: On<ToggleChangedEvent>, mut settings: ResMut<Settings>) {
    let event = trigger.event();
    debug!("Toggle {:?} -> {}", event.role, event.value);
    match event.role {
        WidgetRole::MasterSoundToggle => settings.set_master_sound(event.value),
        WidgetRole::SoundFxToggle => settings.set_sound_fx(event.value),
        WidgetRole::VisualFxToggle => settings.set_visual_fx(event.value),
        other => warn!("ToggleChangedEvent from non-toggle widget {:?}", other),
    }
}

/// Every slider change goes straight to the store; no debounce, no clamping.
pub fn slider_changed_observer(trigger: On<SliderChangedEvent>, mut settings: ResMut<Settings>) {
    settings.set_sensitivity(trigger.event().value);
}

/// Send [`AudioCmd::MasterVolume`] on the first run and whenever the
/// volume implied by [`Settings`] changes.
pub fn apply_master_volume(
    settings: Res<Settings>,
    mut applied: Local<Option<f32>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let vol = settings.master_volume();
    if *applied != Some(vol) {
        audio_cmds.write(AudioCmd::MasterVolume { vol });
        *applied = Some(vol);
    }
}
