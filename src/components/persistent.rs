//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when the
//! menu hands off to the next scene. Observers and anything that must
//! outlive the menu carry it.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across scene changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
