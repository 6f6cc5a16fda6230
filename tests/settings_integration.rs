//! Settings store integration tests: persistence through both backends,
//! write-through from the settings widgets and the master volume command.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use raylib::prelude::Vector2;

use aberredmenu::components::widget::{Active, WidgetRole};
use aberredmenu::events::audio::AudioCmd;
use aberredmenu::game::{register_observers, spawn_main_menu};
use aberredmenu::resources::audio::init_audio_messages;
use aberredmenu::resources::gamestate::{GameState, NextGameState};
use aberredmenu::resources::input::InputState;
use aberredmenu::resources::menulayout::MenuLayout;
use aberredmenu::resources::menutransition::MenuTransition;
use aberredmenu::resources::preferences::{IniPreferences, MemoryPreferences, PreferenceBackend};
use aberredmenu::resources::settings::{
    MASTER_SOUND_KEY, SENSITIVITY_KEY, Settings, SettingsSnapshot, init_settings,
};
use aberredmenu::resources::worldsignals::WorldSignals;
use aberredmenu::systems::settings::apply_master_volume;
use aberredmenu::systems::widgets::widget_interaction_system;

fn temp_prefs(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "aberredmenu_{}_{}.ini",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

fn audio_cmds(world: &mut World) -> Vec<AudioCmd> {
    let mut state = SystemState::<MessageReader<AudioCmd>>::new(world);
    let mut reader = state.get_mut(world);
    reader.read().cloned().collect()
}

fn run_master_volume(world: &mut World) -> Vec<AudioCmd> {
    let mut schedule = Schedule::default();
    schedule.add_systems(apply_master_volume);
    schedule.run(world);
    let cmds = audio_cmds(world);
    // Two updates drop everything written so far
    world.resource_mut::<Messages<AudioCmd>>().update();
    world.resource_mut::<Messages<AudioCmd>>().update();
    cmds
}

#[test]
fn ini_backend_defaults_then_reload() {
    let path = temp_prefs("reload");
    let defaults = Settings::load(Box::new(IniPreferences::open(&path)));
    assert_eq!(
        defaults.snapshot(),
        SettingsSnapshot {
            master_sound: true,
            sound_fx: true,
            visual_fx: true,
            sensitivity: 1.0,
        }
    );

    let mut settings = defaults;
    settings.set_master_sound(false);
    settings.set_sound_fx(false);
    settings.set_visual_fx(false);
    settings.set_sensitivity(3.25);
    drop(settings);

    let reloaded = Settings::load(Box::new(IniPreferences::open(&path)));
    assert!(!reloaded.master_sound());
    assert!(!reloaded.sound_fx());
    assert!(!reloaded.visual_fx());
    assert_eq!(reloaded.sensitivity(), 3.25);
    assert_eq!(reloaded.master_volume(), 0.0);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[preferences]"));
    assert!(text.contains("MasterSound"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn memory_backend_reload_through_into_backend() {
    let mut settings = Settings::load(Box::new(MemoryPreferences::new()));
    settings.set_sensitivity(0.5);
    settings.set_visual_fx(false);

    let reloaded = Settings::load(settings.into_backend());
    assert_eq!(reloaded.sensitivity(), 0.5);
    assert!(!reloaded.visual_fx());
    assert!(reloaded.sound_fx());
}

#[test]
fn corrupt_values_fall_back_to_defaults() {
    let backend = MemoryPreferences::new()
        .with_raw(MASTER_SOUND_KEY, "loud")
        .with_raw(SENSITIVITY_KEY, "fast");
    let settings = Settings::load(Box::new(backend));
    assert!(settings.master_sound());
    assert_eq!(settings.sensitivity(), 1.0);
}

#[test]
fn second_init_keeps_first_instance() {
    let mut world = World::new();
    let mut first = MemoryPreferences::new();
    first.set_float(SENSITIVITY_KEY, 2.0);
    assert!(init_settings(&mut world, Box::new(first)));
    assert!(!init_settings(&mut world, Box::new(MemoryPreferences::new())));
    assert_eq!(world.resource::<Settings>().sensitivity(), 2.0);
}

#[test]
fn master_volume_follows_master_sound() {
    let mut world = World::new();
    init_settings(&mut world, Box::new(MemoryPreferences::new()));
    init_audio_messages(&mut world);

    // First run always reports the current volume
    assert_eq!(
        run_master_volume(&mut world),
        vec![AudioCmd::MasterVolume { vol: 1.0 }]
    );
    assert!(run_master_volume(&mut world).is_empty());

    world.resource_mut::<Settings>().set_master_sound(false);
    assert_eq!(
        run_master_volume(&mut world),
        vec![AudioCmd::MasterVolume { vol: 0.0 }]
    );

    // Setting the same value twice changes nothing
    world.resource_mut::<Settings>().set_master_sound(false);
    assert!(run_master_volume(&mut world).is_empty());

    world.resource_mut::<Settings>().set_master_sound(true);
    assert_eq!(world.resource::<Settings>().master_volume(), 1.0);
    assert_eq!(
        run_master_volume(&mut world),
        vec![AudioCmd::MasterVolume { vol: 1.0 }]
    );
}

fn menu_world(settings_open: bool) -> World {
    let mut world = World::new();
    init_settings(&mut world, Box::new(MemoryPreferences::new()));
    init_audio_messages(&mut world);
    world.insert_resource(WorldSignals::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(MenuTransition::default());
    world.insert_resource(InputState::default());
    register_observers(&mut world);
    spawn_main_menu(&mut world, 1280.0, 720.0);
    let panel = world
        .resource::<MenuLayout>()
        .get(WidgetRole::SettingsPanel)
        .unwrap();
    world.get_mut::<Active>(panel).unwrap().0 = settings_open;
    world
}

fn widget_center(world: &World, role: WidgetRole) -> Vector2 {
    let entity = world.resource::<MenuLayout>().get(role).unwrap();
    let rect = world
        .get::<aberredmenu::components::widget::Widget>(entity)
        .unwrap()
        .rect;
    Vector2 {
        x: rect.x + rect.width * 0.5,
        y: rect.y + rect.height * 0.5,
    }
}

fn click(world: &mut World, at: Vector2, down: bool) {
    {
        let mut input = world.resource_mut::<InputState>();
        input.move_pointer(at);
        input.primary.update(down);
    }
    let mut schedule = Schedule::default();
    schedule.add_systems(widget_interaction_system);
    schedule.run(world);
}

#[test]
fn toggle_click_writes_through() {
    let mut world = menu_world(true);
    let at = widget_center(&world, WidgetRole::MasterSoundToggle);
    click(&mut world, at, true);
    click(&mut world, at, false);

    let settings = world.resource::<Settings>();
    assert!(!settings.master_sound());
    assert_eq!(settings.master_volume(), 0.0);
    assert_eq!(settings.backend().get_int(MASTER_SOUND_KEY), Some(0));
}

#[test]
fn slider_drag_writes_through() {
    let mut world = menu_world(true);
    let entity = world
        .resource::<MenuLayout>()
        .get(WidgetRole::SensitivitySlider)
        .unwrap();
    let rect = world
        .get::<aberredmenu::components::widget::Widget>(entity)
        .unwrap()
        .rect;
    let y = rect.y + rect.height * 0.5;

    click(&mut world, Vector2 { x: rect.x, y }, true);
    // Held button drags past the right edge; the value clamps to the maximum
    click(
        &mut world,
        Vector2 {
            x: rect.x + rect.width + 50.0,
            y,
        },
        true,
    );
    click(&mut world, Vector2 { x: rect.x, y: 0.0 }, false);

    let settings = world.resource::<Settings>();
    assert_eq!(settings.sensitivity(), aberredmenu::game::SENSITIVITY_MAX);
    assert_eq!(
        settings.backend().get_float(SENSITIVITY_KEY),
        Some(aberredmenu::game::SENSITIVITY_MAX)
    );
}

#[test]
fn toggles_ignore_clicks_while_panel_hidden() {
    let mut world = menu_world(false);

    let at = widget_center(&world, WidgetRole::SoundFxToggle);
    click(&mut world, at, true);
    assert!(world.resource::<Settings>().sound_fx());
}

#[test]
fn main_button_click_starts_transition() {
    let mut world = menu_world(false);
    let at = widget_center(&world, WidgetRole::AboutButton);
    click(&mut world, at, true);
    let transition = world.resource::<MenuTransition>();
    assert!(transition.is_busy());
    assert_eq!(
        transition.current,
        Some(aberredmenu::events::menu::MenuAction::OpenAbout)
    );
}
