//! Widget interaction system.
//!
//! Hit-tests the pointer against the menu widgets and turns clicks into
//! events:
//! - buttons trigger a [`MenuActionEvent`],
//! - toggles flip and trigger a [`ToggleChangedEvent`],
//! - the slider follows the pointer while the primary button is held and
//!   triggers a [`SliderChangedEvent`] for every value change.
//!
//! Only active widgets react, and widgets inside a panel only react while
//! that panel is active.

use crate::components::widget::{Active, PanelMember, Slider, Toggle, Widget};
use crate::components::zindex::ZIndex;
use crate::events::menu::{MenuAction, MenuActionEvent, SliderChangedEvent, ToggleChangedEvent};
use crate::resources::input::InputState;
use bevy_ecs::prelude::*;

pub fn widget_interaction_system(
    input: Res<InputState>,
    mut widgets: Query<(
        Entity,
        &Widget,
        &Active,
        Option<&PanelMember>,
        Option<&ZIndex>,
        Option<&mut Toggle>,
        Option<&mut Slider>,
    )>,
    panels: Query<&Active, Without<PanelMember>>,
    mut dragging: Local<Option<Entity>>,
    mut commands: Commands,
) {
    if input.primary.just_released || !input.primary.active {
        *dragging = None;
    }

    if input.primary.just_pressed {
        // Topmost clickable widget under the pointer
        let hit = widgets
            .iter()
            .filter(|(_, widget, active, member, _, _, _)| {
                active.0
                    && widget.role.is_interactive()
                    && widget.contains(input.pointer)
                    && member.is_none_or(|m| panels.get(m.0).is_ok_and(|p| p.0))
            })
            .max_by_key(|(_, _, _, _, z, _, _)| z.map(|z| z.0).unwrap_or(0))
            .map(|(entity, ..)| entity);

        if let Some(entity) = hit
            && let Ok((_, widget, _, _, _, toggle, slider)) = widgets.get_mut(entity)
        {
            if let Some(action) = MenuAction::for_button(widget.role) {
                commands.trigger(MenuActionEvent { action });
            } else if let Some(mut toggle) = toggle {
                toggle.on = !toggle.on;
                commands.trigger(ToggleChangedEvent {
                    role: widget.role,
                    value: toggle.on,
                });
            } else if slider.is_some() {
                *dragging = Some(entity);
            }
        }
    }

    if let Some(entity) = *dragging
        && input.primary.active
    {
        if let Ok((_, widget, active, _, _, _, Some(mut slider))) = widgets.get_mut(entity) {
            if !active.0 {
                *dragging = None;
                return;
            }
            let value = slider.value_at(&widget.rect, input.pointer.x);
            if value != slider.value {
                slider.value = value;
                commands.trigger(SliderChangedEvent { value });
            }
        } else {
            *dragging = None;
        }
    }
}
