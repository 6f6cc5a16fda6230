//! ECS resources made available to systems.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `camera2d` – shared 2D camera used for screen/world transforms
//! - `cursoreffect` – click sound and click effect configuration
//! - `cursorsprite` – optional texture drawn in place of the OS cursor
//! - `gamestate` – authoritative and pending high-level state
//! - `input` – per-frame pointer and key state
//! - `menuconfig` – application configuration loaded from `config.ini`
//! - `menulayout` – widget role to entity map
//! - `menutransition` – transition lock and running script
//! - `preferences` – persistent key-value backends
//! - `settings` – the user settings store
//! - `worldsignals` – global flags and strings
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod camera2d;
pub mod cursoreffect;
pub mod cursorsprite;
pub mod gamestate;
pub mod input;
pub mod menuconfig;
pub mod menulayout;
pub mod menutransition;
pub mod preferences;
pub mod settings;
pub mod worldsignals;
pub mod worldtime;
