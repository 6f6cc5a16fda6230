//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - [`back_key_system`] turns the back key edge into a
//!   [`MenuActionEvent`] for [`MenuAction::Back`].
use bevy_ecs::prelude::*;

use crate::events::menu::{MenuAction, MenuActionEvent};
use crate::resources::input::InputState;

/// Poll Raylib for pointer and keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    input.pointer = rl.get_mouse_position();
    input.pointer_delta = rl.get_mouse_delta();

    let primary_down = rl.is_mouse_button_down(input.primary_binding);
    input.primary.update(primary_down);
    let back_down = rl.is_key_down(input.back_binding);
    input.back.update(back_down);
}

/// Escape works like the back button.
pub fn back_key_system(input: Res<InputState>, mut commands: Commands) {
    if input.back.just_pressed {
        commands.trigger(MenuActionEvent {
            action: MenuAction::Back,
        });
    }
}
