//! Role → entity map of the spawned main menu.

use crate::components::widget::WidgetRole;
use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

/// Where each menu widget lives in the world.
///
/// Built by [`crate::game::spawn_main_menu`]; systems look widgets up by
/// role instead of holding entity ids of their own.
#[derive(Resource, Debug, Clone, Default)]
pub struct MenuLayout {
    entities: FxHashMap<WidgetRole, Entity>,
}

impl MenuLayout {
    pub fn insert(&mut self, role: WidgetRole, entity: Entity) {
        self.entities.insert(role, entity);
    }

    pub fn get(&self, role: WidgetRole) -> Option<Entity> {
        self.entities.get(&role).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WidgetRole, Entity)> + '_ {
        self.entities.iter().map(|(role, entity)| (*role, *entity))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
