//! Menu transition integration tests: panel fades, the transition lock,
//! quitting and the hand-off to the next scene.

use bevy_ecs::prelude::*;

use aberredmenu::components::widget::{Active, Opacity, Toggle, Widget, WidgetRole};
use aberredmenu::events::gamestate::GameStateChangedEvent;
use aberredmenu::events::menu::{MenuAction, MenuActionEvent};
use aberredmenu::game::{register_observers, spawn_main_menu};
use aberredmenu::resources::audio::init_audio_messages;
use aberredmenu::resources::gamestate::{GameState, GameStates, NextGameState};
use aberredmenu::resources::menulayout::MenuLayout;
use aberredmenu::resources::menutransition::{ActivePanel, MenuTransition};
use aberredmenu::resources::preferences::MemoryPreferences;
use aberredmenu::resources::settings::{Settings, init_settings};
use aberredmenu::resources::worldsignals::WorldSignals;
use aberredmenu::resources::worldtime::WorldTime;
use aberredmenu::systems::gamestate::check_pending_state;
use aberredmenu::systems::menutransition::menu_transition_driver;

// Exact binary fractions keep the tick arithmetic free of rounding.
const DELTA: f32 = 0.125;
const FADE: f32 = 0.5;
const QUIT_DELAY: f32 = 0.25;
const FADE_TICKS: usize = 4;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta: DELTA,
        time_scale: 1.0,
    });
    init_settings(&mut world, Box::new(MemoryPreferences::new()));
    init_audio_messages(&mut world);
    world.insert_resource(WorldSignals::default());
    let mut state = GameState::new();
    state.set(GameStates::Menu);
    world.insert_resource(state);
    world.insert_resource(NextGameState::new());
    world.insert_resource(MenuTransition::new(FADE, QUIT_DELAY, "My World"));
    register_observers(&mut world);
    spawn_main_menu(&mut world, 1280.0, 720.0);
    world
}

fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((menu_transition_driver, check_pending_state).chain());
    schedule.run(world);
}

/// Tick until the transition lock is released. Returns the tick count.
fn run_until_idle(world: &mut World) -> usize {
    for n in 1..=100 {
        tick(world);
        if !world.resource::<MenuTransition>().is_busy() {
            return n;
        }
    }
    panic!("transition never finished");
}

fn act(world: &mut World, action: MenuAction) {
    world.trigger(MenuActionEvent { action });
}

fn entity(world: &World, role: WidgetRole) -> Entity {
    world
        .resource::<MenuLayout>()
        .get(role)
        .expect("widget missing from layout")
}

fn active(world: &World, role: WidgetRole) -> bool {
    world.get::<Active>(entity(world, role)).unwrap().0
}

fn opacity(world: &World, role: WidgetRole) -> f32 {
    world.get::<Opacity>(entity(world, role)).unwrap().0
}

fn toggle(world: &World, role: WidgetRole) -> bool {
    world.get::<Toggle>(entity(world, role)).unwrap().on
}

#[test]
fn open_settings_fades_panel_in_and_hides_main_buttons() {
    let mut world = make_world();
    act(&mut world, MenuAction::OpenSettings);
    assert!(world.resource::<MenuTransition>().is_busy());

    tick(&mut world);
    assert!(active(&world, WidgetRole::SettingsPanel));
    assert!(active(&world, WidgetRole::BackButton));
    let first = opacity(&world, WidgetRole::SettingsPanel);
    assert!(first > 0.0 && first < 1.0);
    // Main buttons stay until the fade has finished
    assert!(active(&world, WidgetRole::StartButton));

    let ticks = 1 + run_until_idle(&mut world);
    assert_eq!(ticks, FADE_TICKS);

    let transition = world.resource::<MenuTransition>();
    assert_eq!(transition.active_panel(), ActivePanel::Settings);
    assert_eq!(opacity(&world, WidgetRole::SettingsPanel), 1.0);
    for role in WidgetRole::MAIN_BUTTONS {
        assert!(!active(&world, role));
    }
    assert!(!active(&world, WidgetRole::AboutPanel));
}

#[test]
fn action_while_busy_is_ignored() {
    let mut world = make_world();
    act(&mut world, MenuAction::OpenSettings);
    tick(&mut world);

    let before = world.resource::<MenuTransition>().clone();
    act(&mut world, MenuAction::OpenSettings);
    act(&mut world, MenuAction::Quit);
    let after = world.resource::<MenuTransition>();
    assert_eq!(after.steps, before.steps);
    assert_eq!(after.running, before.running);
    assert_eq!(after.current, Some(MenuAction::OpenSettings));

    run_until_idle(&mut world);
    assert!(!world.resource::<WorldSignals>().has_flag("quit_game"));
    assert!(!active(&world, WidgetRole::Overlay));
}

#[test]
fn back_with_no_panel_visible_completes_immediately() {
    let mut world = make_world();
    act(&mut world, MenuAction::Back);
    assert_eq!(run_until_idle(&mut world), 1);

    let transition = world.resource::<MenuTransition>();
    assert_eq!(transition.active_panel(), ActivePanel::None);
    for role in WidgetRole::MAIN_BUTTONS {
        assert!(active(&world, role));
    }
    assert!(!active(&world, WidgetRole::BackButton));
}

#[test]
fn back_fades_the_open_panel_out() {
    let mut world = make_world();
    act(&mut world, MenuAction::OpenAbout);
    run_until_idle(&mut world);
    assert!(active(&world, WidgetRole::AboutPanel));

    act(&mut world, MenuAction::Back);
    tick(&mut world);
    // Main buttons come back first, then the panel fades
    assert!(active(&world, WidgetRole::StartButton));
    assert!(active(&world, WidgetRole::AboutPanel));
    assert!(opacity(&world, WidgetRole::AboutPanel) < 1.0);

    run_until_idle(&mut world);
    assert!(!active(&world, WidgetRole::AboutPanel));
    assert_eq!(opacity(&world, WidgetRole::AboutPanel), 0.0);
    assert_eq!(
        world.resource::<MenuTransition>().active_panel(),
        ActivePanel::None
    );
}

#[test]
fn switching_panels_fades_the_other_one_out_first() {
    let mut world = make_world();
    act(&mut world, MenuAction::OpenAbout);
    run_until_idle(&mut world);

    act(&mut world, MenuAction::OpenSettings);
    let ticks = run_until_idle(&mut world);
    assert_eq!(ticks, 2 * FADE_TICKS);
    assert!(!active(&world, WidgetRole::AboutPanel));
    assert!(active(&world, WidgetRole::SettingsPanel));
    assert_eq!(
        world.resource::<MenuTransition>().active_panel(),
        ActivePanel::Settings
    );
}

#[test]
fn open_settings_syncs_widgets_with_settings() {
    let mut world = make_world();
    {
        let mut settings = world.resource_mut::<Settings>();
        settings.set_visual_fx(false);
        settings.set_master_sound(false);
        settings.set_sensitivity(2.5);
    }
    assert!(toggle(&world, WidgetRole::VisualFxToggle));

    act(&mut world, MenuAction::OpenSettings);
    tick(&mut world);

    assert!(!toggle(&world, WidgetRole::VisualFxToggle));
    assert!(!toggle(&world, WidgetRole::MasterSoundToggle));
    assert!(toggle(&world, WidgetRole::SoundFxToggle));
    let slider = entity(&world, WidgetRole::SensitivitySlider);
    let value = world
        .get::<aberredmenu::components::widget::Slider>(slider)
        .unwrap()
        .value;
    assert_eq!(value, 2.5);
}

#[test]
fn quit_sets_flag_only_after_fade_and_delay() {
    let mut world = make_world();
    act(&mut world, MenuAction::Quit);

    let mut ticks = 0;
    while !world.resource::<WorldSignals>().has_flag("quit_game") {
        tick(&mut world);
        ticks += 1;
        assert!(ticks <= 100, "quit never happened");
        if ticks == 1 {
            for role in WidgetRole::MAIN_BUTTONS {
                assert!(!active(&world, role));
            }
            assert!(active(&world, WidgetRole::Overlay));
        }
    }

    let elapsed = ticks as f32 * DELTA;
    assert!(elapsed >= FADE + QUIT_DELAY);
    assert_eq!(ticks, FADE_TICKS + 2);
    assert_eq!(opacity(&world, WidgetRole::Overlay), 1.0);
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Quitting);
    // Quit never releases the lock
    assert!(world.resource::<MenuTransition>().is_busy());
}

#[test]
fn start_game_switches_scene_and_tears_down_menu() {
    let mut world = make_world();
    act(&mut world, MenuAction::StartGame);

    for _ in 0..FADE_TICKS - 1 {
        tick(&mut world);
        assert!(world.contains_resource::<MenuLayout>());
    }
    tick(&mut world);

    assert_eq!(world.resource::<GameState>().get(), &GameStates::InScene);
    assert_eq!(
        world
            .resource::<WorldSignals>()
            .get_string("scene")
            .map(String::as_str),
        Some("My World")
    );
    assert!(!world.contains_resource::<MenuTransition>());
    assert!(!world.contains_resource::<MenuLayout>());
    let widgets = world.query::<&Widget>().iter(&world).count();
    assert_eq!(widgets, 0);
    assert!(!world.resource::<WorldSignals>().has_flag("quit_game"));
}

#[test]
fn state_change_event_applies_pending_state() {
    let mut world = make_world();
    world.resource_mut::<NextGameState>().set(GameStates::Quitting);
    world.trigger(GameStateChangedEvent {});
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Quitting);
    assert!(world.resource::<WorldSignals>().has_flag("quit_game"));
}
