//! User settings resource.
//!
//! [`Settings`] holds the four user-facing options of the menu and writes
//! every change straight through to its [`PreferenceBackend`]:
//!
//! | Key | Stored as | Default |
//! |---|---|---|
//! | `SoundFX` | integer 0/1 | 1 |
//! | `VisualFX` | integer 0/1 | 1 |
//! | `MasterSound` | integer 0/1 | 1 |
//! | `MouseSensitivity` | float | 1.0 |
//!
//! A missing or unparsable key reads as its default. Save failures are logged
//! and otherwise ignored; the in-memory value stays authoritative.
//!
//! Exactly one `Settings` lives in a world. Use [`init_settings`] at startup;
//! a second call leaves the existing instance untouched.

use crate::resources::preferences::PreferenceBackend;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use serde::Serialize;

pub const SOUND_FX_KEY: &str = "SoundFX";
pub const VISUAL_FX_KEY: &str = "VisualFX";
pub const MASTER_SOUND_KEY: &str = "MasterSound";
pub const SENSITIVITY_KEY: &str = "MouseSensitivity";

pub const DEFAULT_SOUND_FX: bool = true;
pub const DEFAULT_VISUAL_FX: bool = true;
pub const DEFAULT_MASTER_SOUND: bool = true;
pub const DEFAULT_SENSITIVITY: f32 = 1.0;

/// Plain copy of the current settings values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SettingsSnapshot {
    pub master_sound: bool,
    pub sound_fx: bool,
    pub visual_fx: bool,
    pub sensitivity: f32,
}

/// Persisted user settings with write-through storage.
#[derive(Resource)]
pub struct Settings {
    master_sound: bool,
    sound_fx: bool,
    visual_fx: bool,
    sensitivity: f32,
    master_volume: f32,
    backend: Box<dyn PreferenceBackend>,
}

impl Settings {
    /// Read every key from `backend`, falling back to defaults, and derive
    /// the master volume from the master sound flag.
    pub fn load(backend: Box<dyn PreferenceBackend>) -> Self {
        let master_sound = read_bool(backend.as_ref(), MASTER_SOUND_KEY, DEFAULT_MASTER_SOUND);
        let sound_fx = read_bool(backend.as_ref(), SOUND_FX_KEY, DEFAULT_SOUND_FX);
        let visual_fx = read_bool(backend.as_ref(), VISUAL_FX_KEY, DEFAULT_VISUAL_FX);
        let sensitivity = match backend
            .get_float(SENSITIVITY_KEY)
            .filter(|value| value.is_finite())
        {
            Some(value) => value,
            None => {
                if backend.has_key(SENSITIVITY_KEY) {
                    warn!("Unparsable value for {}, using default", SENSITIVITY_KEY);
                }
                DEFAULT_SENSITIVITY
            }
        };

        let mut settings = Self {
            master_sound,
            sound_fx,
            visual_fx,
            sensitivity,
            master_volume: 1.0,
            backend,
        };
        settings.apply_master_sound();

        info!(
            "Loaded settings: master_sound={}, sound_fx={}, visual_fx={}, sensitivity={}",
            settings.master_sound, settings.sound_fx, settings.visual_fx, settings.sensitivity
        );
        settings
    }

    pub fn master_sound(&self) -> bool {
        self.master_sound
    }

    pub fn sound_fx(&self) -> bool {
        self.sound_fx
    }

    pub fn visual_fx(&self) -> bool {
        self.visual_fx
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Global audio volume implied by the master sound flag: `1.0` or `0.0`.
    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            master_sound: self.master_sound,
            sound_fx: self.sound_fx,
            visual_fx: self.visual_fx,
            sensitivity: self.sensitivity,
        }
    }

    /// Enable or mute all audio. Persists immediately.
    pub fn set_master_sound(&mut self, enabled: bool) {
        self.master_sound = enabled;
        self.backend.set_int(MASTER_SOUND_KEY, enabled as i64);
        self.save();
        self.apply_master_sound();
    }

    pub fn set_sound_fx(&mut self, enabled: bool) {
        self.sound_fx = enabled;
        self.backend.set_int(SOUND_FX_KEY, enabled as i64);
        self.save();
    }

    pub fn set_visual_fx(&mut self, enabled: bool) {
        self.visual_fx = enabled;
        self.backend.set_int(VISUAL_FX_KEY, enabled as i64);
        self.save();
    }

    /// Store a new pointer sensitivity. The value is not range-checked.
    pub fn set_sensitivity(&mut self, value: f32) {
        self.sensitivity = value;
        self.backend.set_float(SENSITIVITY_KEY, value);
        self.save();
    }

    /// Give back the backend, e.g. to reload it in a fresh `Settings`.
    pub fn into_backend(self) -> Box<dyn PreferenceBackend> {
        self.backend
    }

    pub fn backend(&self) -> &dyn PreferenceBackend {
        self.backend.as_ref()
    }

    fn apply_master_sound(&mut self) {
        self.master_volume = if self.master_sound { 1.0 } else { 0.0 };
    }

    fn save(&mut self) {
        if let Err(e) = self.backend.save() {
            warn!("{}", e);
        } else {
            debug!("Settings saved: {:?}", self.snapshot());
        }
    }
}

fn read_bool(backend: &dyn PreferenceBackend, key: &str, default: bool) -> bool {
    match backend.get_int(key) {
        Some(value) => value == 1,
        None => {
            if backend.has_key(key) {
                warn!("Unparsable value for {}, using default", key);
            }
            default
        }
    }
}

/// Load settings from `backend` and insert them, unless the world already
/// has a [`Settings`] resource. Returns whether a new instance was inserted.
pub fn init_settings(world: &mut World, backend: Box<dyn PreferenceBackend>) -> bool {
    if world.contains_resource::<Settings>() {
        debug!("Settings already initialized, discarding new backend");
        return false;
    }
    world.insert_resource(Settings::load(backend));
    true
}
