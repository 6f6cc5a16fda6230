//! Menu systems.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`cursoreffect`] – click sound and click effect on every press
//! - [`fade`] – smoothstep opacity fades
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`menutransition`] – queue and drive menu transitions
//! - [`render`] – draw the menu and click effects using Raylib
//! - [`settings`] – write widget changes through to the settings store
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – despawn entities whose time-to-live ran out
//! - [`widgets`] – pointer hit-testing for buttons, toggles and the slider

pub mod audio;
pub mod cursoreffect;
pub mod fade;
pub mod gamestate;
pub mod input;
pub mod menutransition;
pub mod render;
pub mod settings;
pub mod time;
pub mod ttl;
pub mod widgets;
