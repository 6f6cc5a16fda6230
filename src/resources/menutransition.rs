//! Menu transition state.
//!
//! [`MenuTransition`] is the sequencer behind the main menu buttons. Each
//! [`MenuAction`] expands into a script of [`TransitionStep`]s which the
//! [`menu_transition_driver`](crate::systems::menutransition::menu_transition_driver)
//! consumes, one fade or wait per tick.
//!
//! While a script runs the controller is *busy* and every new action is
//! dropped. Scripts cannot be cancelled. The last step of the panel scripts
//! is [`TransitionStep::Finish`], which clears the busy flag and records the
//! panel left on screen. `StartGame` and `Quit` never finish: they hand off
//! to the next scene or end the application.

use crate::components::widget::WidgetRole;
use crate::events::menu::MenuAction;
use crate::resources::menuconfig::MenuConfig;
use crate::systems::fade::FadeState;
use bevy_ecs::prelude::Resource;
use log::{debug, info};
use std::collections::VecDeque;

/// Panel visible once the last transition finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePanel {
    #[default]
    None,
    Settings,
    About,
}

/// One instruction of a transition script.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionStep {
    /// Copy the current settings into the toggles and the slider.
    SyncWidgets,
    SetActive { role: WidgetRole, active: bool },
    /// Show or hide the four main menu buttons.
    MainButtons(bool),
    /// Reset opacity to 0, then fade to 1.
    FadeIn(WidgetRole),
    /// Fade from the current opacity to 0 and deactivate. Does nothing when
    /// the widget is already inactive.
    FadeOut(WidgetRole),
    FadeCanvas { role: WidgetRole, from: f32, to: f32 },
    Wait(f32),
    LoadScene(String),
    Quit,
    Finish(ActivePanel),
}

/// The timed step currently advancing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunningStep {
    Fade(FadeState),
    Wait { elapsed: f32, duration: f32 },
}

/// Transition lock, current panel and the remaining script.
#[derive(Resource, Debug, Clone)]
pub struct MenuTransition {
    pub busy: bool,
    pub active_panel: ActivePanel,
    pub current: Option<MenuAction>,
    pub steps: VecDeque<TransitionStep>,
    pub running: Option<RunningStep>,
    pub fade_duration: f32,
    pub quit_delay: f32,
    pub next_scene: String,
}

impl Default for MenuTransition {
    fn default() -> Self {
        Self::from_config(&MenuConfig::default())
    }
}

impl MenuTransition {
    pub fn new(fade_duration: f32, quit_delay: f32, next_scene: impl Into<String>) -> Self {
        Self {
            busy: false,
            active_panel: ActivePanel::None,
            current: None,
            steps: VecDeque::new(),
            running: None,
            fade_duration,
            quit_delay,
            next_scene: next_scene.into(),
        }
    }

    pub fn from_config(config: &MenuConfig) -> Self {
        Self::new(
            config.fade_duration,
            config.quit_delay,
            config.next_scene.clone(),
        )
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn active_panel(&self) -> ActivePanel {
        self.active_panel
    }

    /// Steps not yet started, excluding the running one.
    pub fn pending_steps(&self) -> usize {
        self.steps.len()
    }

    /// Take the lock and queue the script for `action`.
    ///
    /// Returns `false`, and leaves everything untouched, when another
    /// transition is still running.
    pub fn begin(&mut self, action: MenuAction) -> bool {
        if self.busy {
            debug!("Ignoring {:?}: {:?} still running", action, self.current);
            return false;
        }
        info!("Menu transition {:?} started", action);
        self.busy = true;
        self.current = Some(action);
        self.running = None;
        self.steps = self.script(action).into();
        true
    }

    /// Release the lock at the end of a script.
    pub fn finish(&mut self, panel: ActivePanel) {
        info!(
            "Menu transition {:?} finished, active panel {:?}",
            self.current, panel
        );
        self.busy = false;
        self.active_panel = panel;
        self.current = None;
    }

    /// The step list run for `action`.
    pub fn script(&self, action: MenuAction) -> Vec<TransitionStep> {
        use TransitionStep::*;
        match action {
            MenuAction::StartGame => vec![
                SetActive {
                    role: WidgetRole::Overlay,
                    active: true,
                },
                FadeCanvas {
                    role: WidgetRole::Overlay,
                    from: 0.0,
                    to: 1.0,
                },
                LoadScene(self.next_scene.clone()),
            ],
            MenuAction::OpenSettings => vec![
                SyncWidgets,
                SetActive {
                    role: WidgetRole::BackButton,
                    active: true,
                },
                FadeOut(WidgetRole::AboutPanel),
                SetActive {
                    role: WidgetRole::SettingsPanel,
                    active: true,
                },
                FadeIn(WidgetRole::SettingsPanel),
                MainButtons(false),
                Finish(ActivePanel::Settings),
            ],
            MenuAction::OpenAbout => vec![
                SetActive {
                    role: WidgetRole::BackButton,
                    active: true,
                },
                FadeOut(WidgetRole::SettingsPanel),
                SetActive {
                    role: WidgetRole::AboutPanel,
                    active: true,
                },
                FadeIn(WidgetRole::AboutPanel),
                MainButtons(false),
                Finish(ActivePanel::About),
            ],
            MenuAction::Back => vec![
                SetActive {
                    role: WidgetRole::BackButton,
                    active: false,
                },
                MainButtons(true),
                FadeOut(WidgetRole::SettingsPanel),
                FadeOut(WidgetRole::AboutPanel),
                Finish(ActivePanel::None),
            ],
            MenuAction::Quit => vec![
                MainButtons(false),
                SetActive {
                    role: WidgetRole::Overlay,
                    active: true,
                },
                FadeCanvas {
                    role: WidgetRole::Overlay,
                    from: 0.0,
                    to: 1.0,
                },
                Wait(self.quit_delay),
                Quit,
            ],
        }
    }
}
