//! Cursor effect integration tests: click sound, click effect spawning and
//! its removal once the lifetime has elapsed.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use raylib::prelude::{Camera2D, Vector2};

use aberredmenu::components::clickeffect::ClickEffect;
use aberredmenu::components::mapposition::MapPosition;
use aberredmenu::components::zindex::ZIndex;
use aberredmenu::events::audio::{AudioCmd, AudioMessage};
use aberredmenu::resources::audio::init_audio_messages;
use aberredmenu::resources::camera2d::Camera2DRes;
use aberredmenu::resources::cursoreffect::{CLICK_SOUND_ID, CursorEffectConfig};
use aberredmenu::resources::input::InputState;
use aberredmenu::resources::preferences::MemoryPreferences;
use aberredmenu::resources::settings::{Settings, init_settings};
use aberredmenu::resources::worldtime::WorldTime;
use aberredmenu::systems::audio::handle_audio_messages;
use aberredmenu::systems::cursoreffect::cursor_effect_system;
use aberredmenu::systems::ttl::ttl_system;

const DELTA: f32 = 0.25;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta: DELTA,
        time_scale: 1.0,
    });
    init_settings(&mut world, Box::new(MemoryPreferences::new()));
    init_audio_messages(&mut world);
    world.insert_resource(InputState::default());
    world.insert_resource(CursorEffectConfig {
        click_sound: Some(CLICK_SOUND_ID.to_string()),
        ..CursorEffectConfig::default()
    });
    world.insert_resource(Camera2DRes(Camera2D {
        offset: Vector2 { x: 0.0, y: 0.0 },
        target: Vector2 { x: 0.0, y: 0.0 },
        rotation: 0.0,
        zoom: 1.0,
    }));
    world
}

fn press(world: &mut World, down: bool) {
    world.resource_mut::<InputState>().primary.update(down);
    let mut schedule = Schedule::default();
    schedule.add_systems(cursor_effect_system);
    schedule.run(world);
}

fn tick_ttl(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(ttl_system);
    schedule.run(world);
}

fn effect_count(world: &mut World) -> usize {
    world.query::<&ClickEffect>().iter(world).count()
}

fn play_count(world: &mut World) -> usize {
    let mut state = SystemState::<MessageReader<AudioCmd>>::new(world);
    let mut reader = state.get_mut(world);
    reader
        .read()
        .filter(|cmd| matches!(cmd, AudioCmd::PlayFx { id } if id == CLICK_SOUND_ID))
        .count()
}

#[test]
fn press_plays_sound_and_spawns_one_effect() {
    let mut world = make_world();
    press(&mut world, true);
    assert_eq!(play_count(&mut world), 1);
    assert_eq!(effect_count(&mut world), 1);

    let mut q = world.query::<(&ClickEffect, &ZIndex)>();
    let (fx, z) = q.single(&world).unwrap();
    assert_eq!(fx.lifetime, 1.0);
    assert_eq!(fx.sparks.len(), 8);
    assert_eq!(z.0, 10);
}

#[test]
fn held_button_spawns_nothing_more() {
    let mut world = make_world();
    press(&mut world, true);
    press(&mut world, true);
    press(&mut world, true);
    assert_eq!(effect_count(&mut world), 1);
    assert_eq!(play_count(&mut world), 1);

    press(&mut world, false);
    press(&mut world, true);
    assert_eq!(effect_count(&mut world), 2);
}

#[test]
fn effect_is_removed_after_its_lifetime() {
    let mut world = make_world();
    press(&mut world, true);

    // 1.0s lifetime at 0.25s per tick
    for _ in 0..3 {
        tick_ttl(&mut world);
        assert_eq!(effect_count(&mut world), 1);
    }
    tick_ttl(&mut world);
    assert_eq!(effect_count(&mut world), 0);
}

#[test]
fn sound_fx_off_plays_nothing() {
    let mut world = make_world();
    world.resource_mut::<Settings>().set_sound_fx(false);
    press(&mut world, true);
    assert_eq!(play_count(&mut world), 0);
    assert_eq!(effect_count(&mut world), 1);
}

#[test]
fn visual_fx_off_spawns_nothing() {
    let mut world = make_world();
    world.resource_mut::<Settings>().set_visual_fx(false);
    press(&mut world, true);
    assert_eq!(effect_count(&mut world), 0);
    assert_eq!(play_count(&mut world), 1);
}

#[test]
fn missing_pieces_degrade_silently() {
    let mut world = make_world();
    world.insert_resource(CursorEffectConfig {
        click_sound: None,
        effect: None,
        ..CursorEffectConfig::default()
    });
    press(&mut world, true);
    assert_eq!(play_count(&mut world), 0);
    assert_eq!(effect_count(&mut world), 0);

    // No camera: still no effect, and no panic
    let mut world = make_world();
    world.remove_resource::<Camera2DRes>();
    press(&mut world, true);
    assert_eq!(effect_count(&mut world), 0);
}

#[test]
fn effect_position_follows_scaled_pointer_delta() {
    let mut world = make_world();
    world.resource_mut::<Settings>().set_sensitivity(2.0);
    {
        let mut input = world.resource_mut::<InputState>();
        input.move_pointer(Vector2 { x: 99.0, y: 100.0 });
        input.move_pointer(Vector2 { x: 100.0, y: 100.0 });
    }
    press(&mut world, true);

    let mut q = world.query::<&MapPosition>();
    let pos = q.single(&world).unwrap().pos;
    // 100 + 1 * sensitivity 2 * 50
    assert_eq!(pos.x, 200.0);
    assert_eq!(pos.y, 100.0);
}

#[test]
fn failed_click_sound_load_disables_the_sound() {
    let mut world = make_world();
    world
        .resource_mut::<Messages<AudioMessage>>()
        .write(AudioMessage::FxLoadFailed {
            id: CLICK_SOUND_ID.to_string(),
            error: "file not found".to_string(),
        });
    let mut schedule = Schedule::default();
    schedule.add_systems(handle_audio_messages);
    schedule.run(&mut world);

    assert!(world.resource::<CursorEffectConfig>().click_sound.is_none());
    press(&mut world, true);
    assert_eq!(play_count(&mut world), 0);
    assert_eq!(effect_count(&mut world), 1);
}
