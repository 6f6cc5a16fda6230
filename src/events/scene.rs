use bevy_ecs::prelude::*;

/// Hand off from the menu to the named scene.
///
/// Handled by [`crate::game::observe_scene_change`].
#[derive(Event, Debug, Clone)]
pub struct SceneChangeEvent {
    pub name: String,
}
