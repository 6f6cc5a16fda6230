//! ECS components for menu entities.
//!
//! Submodules overview:
//! - [`clickeffect`] – transient spark ring spawned on click
//! - [`mapposition`] – world-space position of an entity
//! - [`persistent`] – marker for entities that survive scene changes
//! - [`ttl`] – time-to-live countdown
//! - [`widget`] – menu widgets: buttons, panels, toggles, slider, overlay
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod clickeffect;
pub mod mapposition;
pub mod persistent;
pub mod ttl;
pub mod widget;
pub mod zindex;
