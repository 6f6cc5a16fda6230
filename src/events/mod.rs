//! Event types and observers used by the menu.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`gamestate`] – state transition notifications for the high-level flow
//! - [`menu`] – menu actions and settings widget changes
//! - [`scene`] – hand-off from the menu to the next scene
pub mod audio;
pub mod gamestate;
pub mod menu;
pub mod scene;
