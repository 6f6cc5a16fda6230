//! Menu transition systems.
//!
//! - [`menu_action_observer`] turns a [`MenuActionEvent`] into a queued
//!   script on the [`MenuTransition`] resource, unless one is already running.
//! - [`menu_transition_driver`] advances the script every tick.
//!
//! # Driver Rules
//!
//! Instant steps (activation changes, widget sync, scene handoff) run back to
//! back in the same tick. A fade or a wait consumes the tick's delta once and
//! then yields until the next tick. When a timed step finishes, the driver
//! carries on with the following instant steps; the next timed step starts
//! right away but only advances on the next tick.

use crate::components::widget::{Active, Opacity, Slider, Toggle, Widget, WidgetRole};
use crate::events::menu::MenuActionEvent;
use crate::events::scene::SceneChangeEvent;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::menulayout::MenuLayout;
use crate::resources::menutransition::{MenuTransition, RunningStep, TransitionStep};
use crate::resources::settings::Settings;
use crate::resources::worldtime::WorldTime;
use crate::systems::fade::{FadeKind, FadeState};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

/// Queue the script for the requested action.
pub fn menu_action_observer(
    trigger: On<MenuActionEvent>,
    transition: Option<ResMut<MenuTransition>>,
) {
    let action = trigger.event().action;
    let Some(mut transition) = transition else {
        debug!("No menu transition controller, ignoring {:?}", action);
        return;
    };
    transition.begin(action);
}

/// Advance the running menu transition by one tick.
pub fn menu_transition_driver(
    world_time: Res<WorldTime>,
    transition: Option<ResMut<MenuTransition>>,
    layout: Option<Res<MenuLayout>>,
    settings: Res<Settings>,
    mut widgets: Query<(&mut Active, &mut Opacity)>,
    mut toggles: Query<(&Widget, &mut Toggle)>,
    mut sliders: Query<&mut Slider>,
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
) {
    let (Some(mut transition), Some(layout)) = (transition, layout) else {
        return;
    };
    if !transition.busy {
        return;
    }

    let mut budget = Some(world_time.delta.max(0.0));

    loop {
        if let Some(running) = transition.running.as_mut() {
            let Some(dt) = budget.take() else {
                break;
            };
            if !advance_running(running, dt, &mut widgets) {
                break;
            }
            transition.running = None;
            continue;
        }

        let Some(step) = transition.steps.pop_front() else {
            break;
        };

        match step {
            TransitionStep::SyncWidgets => {
                for (widget, mut toggle) in toggles.iter_mut() {
                    toggle.on = match widget.role {
                        WidgetRole::MasterSoundToggle => settings.master_sound(),
                        WidgetRole::SoundFxToggle => settings.sound_fx(),
                        WidgetRole::VisualFxToggle => settings.visual_fx(),
                        _ => toggle.on,
                    };
                }
                for mut slider in sliders.iter_mut() {
                    slider.value = settings.sensitivity();
                }
            }
            TransitionStep::SetActive { role, active } => {
                set_active(&layout, &mut widgets, role, active);
            }
            TransitionStep::MainButtons(active) => {
                for role in WidgetRole::MAIN_BUTTONS {
                    set_active(&layout, &mut widgets, role, active);
                }
            }
            TransitionStep::FadeIn(role) => {
                let duration = transition.fade_duration;
                if let Some(entity) = widget_entity(&layout, &widgets, role) {
                    if let Ok((_, mut opacity)) = widgets.get_mut(entity) {
                        opacity.0 = 0.0;
                    }
                    transition.running = Some(RunningStep::Fade(FadeState::new(
                        entity,
                        FadeKind::In,
                        0.0,
                        1.0,
                        duration,
                    )));
                }
            }
            TransitionStep::FadeOut(role) => {
                let duration = transition.fade_duration;
                if let Some(entity) = widget_entity(&layout, &widgets, role)
                    && let Ok((active, opacity)) = widgets.get(entity)
                    && active.0
                {
                    transition.running = Some(RunningStep::Fade(FadeState::new(
                        entity,
                        FadeKind::Out,
                        opacity.0,
                        0.0,
                        duration,
                    )));
                }
            }
            TransitionStep::FadeCanvas { role, from, to } => {
                let duration = transition.fade_duration;
                if let Some(entity) = widget_entity(&layout, &widgets, role) {
                    if let Ok((_, mut opacity)) = widgets.get_mut(entity) {
                        opacity.0 = from;
                    }
                    transition.running = Some(RunningStep::Fade(FadeState::new(
                        entity,
                        FadeKind::Canvas,
                        from,
                        to,
                        duration,
                    )));
                }
            }
            TransitionStep::Wait(duration) => {
                transition.running = Some(RunningStep::Wait {
                    elapsed: 0.0,
                    duration,
                });
            }
            TransitionStep::LoadScene(name) => {
                commands.trigger(SceneChangeEvent { name });
                break;
            }
            TransitionStep::Quit => {
                next_state.set(GameStates::Quitting);
                break;
            }
            TransitionStep::Finish(panel) => {
                transition.finish(panel);
            }
        }
    }
}

/// Advance a timed step. Returns `true` once it is complete.
fn advance_running(
    running: &mut RunningStep,
    dt: f32,
    widgets: &mut Query<(&mut Active, &mut Opacity)>,
) -> bool {
    match running {
        RunningStep::Fade(fade) => {
            let value = fade.advance(dt);
            if let Ok((mut active, mut opacity)) = widgets.get_mut(fade.target) {
                opacity.0 = value;
                if fade.is_finished() && fade.kind == FadeKind::Out {
                    active.0 = false;
                }
            }
            fade.is_finished()
        }
        RunningStep::Wait { elapsed, duration } => {
            *elapsed += dt;
            *elapsed >= *duration
        }
    }
}

fn widget_entity(
    layout: &MenuLayout,
    widgets: &Query<(&mut Active, &mut Opacity)>,
    role: WidgetRole,
) -> Option<Entity> {
    match layout.get(role) {
        Some(entity) if widgets.contains(entity) => Some(entity),
        _ => {
            warn!("Menu widget {:?} is missing, skipping its step", role);
            None
        }
    }
}

fn set_active(
    layout: &MenuLayout,
    widgets: &mut Query<(&mut Active, &mut Opacity)>,
    role: WidgetRole,
    value: bool,
) {
    if let Some(entity) = widget_entity(layout, widgets, role)
        && let Ok((mut active, _)) = widgets.get_mut(entity)
    {
        active.0 = value;
    }
}
