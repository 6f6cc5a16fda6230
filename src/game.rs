//! Menu scene setup and teardown.
//!
//! - [`setup`] inserts every resource the menu systems need and registers the
//!   observers.
//! - [`spawn_main_menu`] builds the widget entities and the [`MenuLayout`].
//! - [`observe_scene_change`] tears the menu down when "Start" hands off to
//!   the next scene.

use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::clickeffect::ClickEffect;
use crate::components::persistent::Persistent;
use crate::components::widget::{
    Active, Opacity, PanelMember, Slider, Toggle, Widget, WidgetRole,
};
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::scene::SceneChangeEvent;
use crate::resources::audio::send_audio_cmd;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::cursoreffect::{CLICK_SOUND_ID, CursorEffectConfig};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::menuconfig::MenuConfig;
use crate::resources::menulayout::MenuLayout;
use crate::resources::menutransition::MenuTransition;
use crate::resources::settings::Settings;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::menutransition::menu_action_observer;
use crate::systems::settings::{slider_changed_observer, toggle_changed_observer};

const BUTTON_WIDTH: f32 = 240.0;
const BUTTON_HEIGHT: f32 = 48.0;
const BUTTON_GAP: f32 = 16.0;
const PANEL_WIDTH: f32 = 560.0;
const PANEL_HEIGHT: f32 = 380.0;
const ROW_HEIGHT: f32 = 32.0;
pub const SENSITIVITY_MIN: f32 = 0.1;
pub const SENSITIVITY_MAX: f32 = 5.0;

const Z_BUTTONS: i32 = 1;
const Z_PANELS: i32 = 2;
const Z_PANEL_MEMBERS: i32 = 3;
const Z_BACK: i32 = 4;
const Z_OVERLAY: i32 = 100;

const ABOUT_TEXT: &str = "About\n\
    Aberred Menu\n\
    A main menu with persistent settings,\n\
    fading panels and click feedback.\n\
    \n\
    Built with raylib and bevy_ecs.";

/// Insert the menu resources and register the menu observers.
///
/// Expects [`Settings`] and the audio message queues to be present already.
/// The click sound, if configured, is queued for loading on the audio thread.
pub fn setup(world: &mut World, config: &MenuConfig) {
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(MenuTransition::from_config(config));
    world.insert_resource(CursorEffectConfig::from_config(config));
    world.insert_resource(Camera2DRes(Camera2D {
        offset: Vector2 { x: 0.0, y: 0.0 },
        target: Vector2 { x: 0.0, y: 0.0 },
        rotation: 0.0,
        zoom: 1.0,
    }));

    if let Some(path) = &config.click_sound {
        send_audio_cmd(
            world,
            AudioCmd::LoadFx {
                id: CLICK_SOUND_ID.to_string(),
                path: path.to_string_lossy().into_owned(),
            },
        );
    }

    register_observers(world);

    let (w, h) = config.window_size();
    spawn_main_menu(world, w as f32, h as f32);

    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Menu);
    }
    world.flush();
}

/// Spawn the menu observers, marked [`Persistent`] so scene changes keep them.
pub fn register_observers(world: &mut World) {
    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(menu_action_observer), Persistent));
    world.spawn((Observer::new(toggle_changed_observer), Persistent));
    world.spawn((Observer::new(slider_changed_observer), Persistent));
    world.spawn((Observer::new(observe_scene_change), Persistent));
    world.flush();
}

/// Spawn one widget entity and record it in `layout`.
fn spawn_widget(
    world: &mut World,
    layout: &mut MenuLayout,
    widget: Widget,
    active: bool,
    opacity: f32,
    z: i32,
) -> Entity {
    let role = widget.role;
    let entity = world
        .spawn((widget, Active(active), Opacity(opacity), ZIndex(z)))
        .id();
    layout.insert(role, entity);
    entity
}

/// Build the main menu for a `width` × `height` screen.
///
/// Main buttons start active and opaque. Panels, the back button and the
/// overlay start hidden at opacity 0. Toggles and the slider take their
/// initial values from [`Settings`] when present.
pub fn spawn_main_menu(world: &mut World, width: f32, height: f32) -> MenuLayout {
    let mut layout = MenuLayout::default();

    let (master, sound_fx, visual_fx, sensitivity) = match world.get_resource::<Settings>() {
        Some(s) => (s.master_sound(), s.sound_fx(), s.visual_fx(), s.sensitivity()),
        None => (true, true, true, 1.0),
    };

    let column_x = (width - BUTTON_WIDTH) * 0.5;
    let mut y = height * 0.4;
    for (role, label) in [
        (WidgetRole::StartButton, "Start"),
        (WidgetRole::SettingsButton, "Settings"),
        (WidgetRole::AboutButton, "About"),
        (WidgetRole::QuitButton, "Quit"),
    ] {
        let rect = Rectangle::new(column_x, y, BUTTON_WIDTH, BUTTON_HEIGHT);
        spawn_widget(
            world,
            &mut layout,
            Widget::new(role, rect, label),
            true,
            1.0,
            Z_BUTTONS,
        );
        y += BUTTON_HEIGHT + BUTTON_GAP;
    }

    let panel_rect = Rectangle::new(
        (width - PANEL_WIDTH) * 0.5,
        (height - PANEL_HEIGHT) * 0.5,
        PANEL_WIDTH,
        PANEL_HEIGHT,
    );
    let panel_color = Color::new(30, 33, 40, 240);
    let settings_panel = spawn_widget(
        world,
        &mut layout,
        Widget::new(WidgetRole::SettingsPanel, panel_rect, "Settings").with_color(panel_color),
        false,
        0.0,
        Z_PANELS,
    );
    spawn_widget(
        world,
        &mut layout,
        Widget::new(WidgetRole::AboutPanel, panel_rect, ABOUT_TEXT).with_color(panel_color),
        false,
        0.0,
        Z_PANELS,
    );

    let row_x = panel_rect.x + 32.0;
    let mut row_y = panel_rect.y + 80.0;
    for (role, label, on) in [
        (WidgetRole::MasterSoundToggle, "Master sound", master),
        (WidgetRole::SoundFxToggle, "Sound effects", sound_fx),
        (WidgetRole::VisualFxToggle, "Visual effects", visual_fx),
    ] {
        let rect = Rectangle::new(row_x, row_y, PANEL_WIDTH - 64.0, ROW_HEIGHT);
        let entity = spawn_widget(
            world,
            &mut layout,
            Widget::new(role, rect, label),
            true,
            1.0,
            Z_PANEL_MEMBERS,
        );
        world
            .entity_mut(entity)
            .insert((Toggle { on }, PanelMember(settings_panel)));
        row_y += ROW_HEIGHT + BUTTON_GAP;
    }

    // Label sits above the track
    row_y += ROW_HEIGHT;
    let slider_rect = Rectangle::new(row_x, row_y, PANEL_WIDTH - 64.0, ROW_HEIGHT);
    let slider = spawn_widget(
        world,
        &mut layout,
        Widget::new(WidgetRole::SensitivitySlider, slider_rect, "Mouse sensitivity")
            .with_color(Color::new(120, 124, 132, 255)),
        true,
        1.0,
        Z_PANEL_MEMBERS,
    );
    world.entity_mut(slider).insert((
        Slider::new(sensitivity, SENSITIVITY_MIN, SENSITIVITY_MAX),
        PanelMember(settings_panel),
    ));

    spawn_widget(
        world,
        &mut layout,
        Widget::new(
            WidgetRole::BackButton,
            Rectangle::new(24.0, height - BUTTON_HEIGHT - 24.0, 160.0, BUTTON_HEIGHT),
            "Back",
        ),
        false,
        1.0,
        Z_BACK,
    );

    spawn_widget(
        world,
        &mut layout,
        Widget::new(
            WidgetRole::Overlay,
            Rectangle::new(0.0, 0.0, width, height),
            "",
        )
        .with_color(Color::BLACK),
        false,
        0.0,
        Z_OVERLAY,
    );

    info!("Main menu spawned with {} widgets", layout.len());
    world.insert_resource(layout.clone());
    layout
}

/// Leave the menu for the named scene.
///
/// Despawns every widget and click effect not marked [`Persistent`], drops
/// the menu resources, records the scene name in [`WorldSignals`] under
/// `"scene"` and requests [`GameStates::InScene`].
pub fn observe_scene_change(
    trigger: On<SceneChangeEvent>,
    query: Query<Entity, (Without<Persistent>, Or<(With<Widget>, With<ClickEffect>)>)>,
    mut world_signals: ResMut<WorldSignals>,
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
) {
    let name = &trigger.event().name;
    info!("Switching scene to '{}'", name);
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
    commands.remove_resource::<MenuTransition>();
    commands.remove_resource::<MenuLayout>();
    world_signals.set_string("scene", name.clone());
    next_state.set(GameStates::InScene);
}
