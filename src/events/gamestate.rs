//! Game state transition event and observer.
//!
//! Systems can request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and runs the enter/exit hooks.
//!
//! This decouples the intent to change state from the mechanics of applying
//! it and avoids borrowing conflicts.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::worldsignals::WorldSignals;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs exit/enter hooks, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], runs the exit hook
///   of the previous state and the enter hook of the new one, then resets
///   [`NextGameState`] to [`Unchanged`].
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    mut world_signals: ResMut<WorldSignals>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get().clone() {
        Pending(new_state) => {
            let old_state = game_state.get().clone();
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state.clone());
            next_game_state.reset();
            on_state_exit(&old_state);
            on_state_enter(&new_state, &mut world_signals);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Internal: run state-specific "enter" hooks for the given state.
fn on_state_enter(state: &GameStates, world_signals: &mut WorldSignals) {
    match state {
        GameStates::None => debug!("Entered None state"),
        GameStates::Menu => debug!("Entered Menu state"),
        GameStates::InScene => debug!("Entered InScene state"),
        GameStates::Quitting => {
            // The main loop watches this flag and exits cleanly.
            world_signals.set_flag("quit_game");
        }
    }
}

/// Internal: run state-specific "exit" hooks for the given state.
fn on_state_exit(state: &GameStates) {
    match state {
        GameStates::None => debug!("Exited None state"),
        GameStates::Menu => debug!("Exited Menu state"),
        GameStates::InScene => debug!("Exited InScene state"),
        GameStates::Quitting => debug!("Exited Quitting state"),
    }
}
