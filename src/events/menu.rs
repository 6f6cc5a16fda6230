//! Main menu events.
//!
//! - [`MenuActionEvent`] asks the transition controller to run one of the
//!   menu transitions (see [`crate::systems::menutransition`]).
//! - [`ToggleChangedEvent`] and [`SliderChangedEvent`] carry new widget
//!   values to the settings observers in [`crate::systems::settings`].

use crate::components::widget::WidgetRole;
use bevy_ecs::prelude::*;

/// The five transitions the main menu knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    StartGame,
    OpenSettings,
    OpenAbout,
    Back,
    Quit,
}

impl MenuAction {
    /// Action bound to a button role, if any.
    pub fn for_button(role: WidgetRole) -> Option<MenuAction> {
        match role {
            WidgetRole::StartButton => Some(MenuAction::StartGame),
            WidgetRole::SettingsButton => Some(MenuAction::OpenSettings),
            WidgetRole::AboutButton => Some(MenuAction::OpenAbout),
            WidgetRole::QuitButton => Some(MenuAction::Quit),
            WidgetRole::BackButton => Some(MenuAction::Back),
            _ => None,
        }
    }
}

/// Request to run a menu transition. Ignored while another one is running.
#[derive(Event, Debug, Clone, Copy)]
pub struct MenuActionEvent {
    pub action: MenuAction,
}

/// A toggle widget was flipped by the user.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleChangedEvent {
    pub role: WidgetRole,
    pub value: bool,
}

/// The sensitivity slider moved. Emitted for every change while dragging.
#[derive(Event, Debug, Clone, Copy)]
pub struct SliderChangedEvent {
    pub value: f32,
}
