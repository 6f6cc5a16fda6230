//! Aberred Menu main entry point.
//!
//! A game main menu written in Rust using:
//! - **raylib** for windowing, drawing, input and audio
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! The menu offers Start, Settings, About and Quit. Settings are persisted
//! to an INI preference file the moment they change.
//!
//! # Main Loop
//!
//! 1. Parse the command line, load `config.ini` and the preference file
//! 2. Initialize the raylib window, the ECS world and the audio thread
//! 3. Spawn the menu and register observers
//! 4. Run the schedule every frame until the window closes or the menu quits
//! 5. Shut down the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --preferences ./preferences.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::cursorsprite::CursorSprite;
use crate::resources::menuconfig::MenuConfig;
use crate::resources::preferences::IniPreferences;
use crate::resources::settings::{Settings, init_settings};
use crate::resources::worldsignals::WorldSignals;
use crate::systems::audio::{
    forward_audio_cmds, handle_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use crate::systems::cursoreffect::cursor_effect_system;
use crate::systems::gamestate::{check_pending_state, state_is_menu};
use crate::systems::input::{back_key_system, update_input_state};
use crate::systems::menutransition::menu_transition_driver;
use crate::systems::render::render_system;
use crate::systems::settings::apply_master_volume;
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;
use crate::systems::widgets::widget_interaction_system;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

/// Aberred Menu
#[derive(Parser)]
#[command(version, about = "A main menu with persistent settings, built on raylib and bevy_ecs.")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Path to the preference file. Overrides `[preferences] path`.
    #[arg(long, value_name = "PATH")]
    preferences: Option<PathBuf>,

    /// Delete the preference file before loading it.
    #[arg(long)]
    reset_preferences: bool,

    /// Print the stored preferences as JSON and exit.
    #[arg(long)]
    print_preferences: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = MenuConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        // Missing config is normal; every value has a default
        warn!("{}, using defaults", e);
    }
    if let Some(path) = cli.preferences {
        config.preferences_path = path;
    }

    if cli.reset_preferences && config.preferences_path.exists() {
        match std::fs::remove_file(&config.preferences_path) {
            Ok(()) => info!("Removed preference file {:?}", config.preferences_path),
            Err(e) => warn!(
                "Failed to remove preference file {:?}: {}",
                config.preferences_path, e
            ),
        }
    }

    // Early-exit: dump preferences and quit (no window/audio needed)
    if cli.print_preferences {
        let settings = Settings::load(Box::new(IniPreferences::open(&config.preferences_path)));
        match serde_json::to_string_pretty(&settings.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing preferences: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    info!("Starting {}", config.title);
    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is the menu's back key
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    init_settings(
        &mut world,
        Box::new(IniPreferences::open(&config.preferences_path)),
    );

    // Init audio
    setup_audio(&mut world); // must go before setup so the click sound load is queued

    if let Some(path) = &config.cursor_texture {
        match rl.load_texture(&thread, &path.to_string_lossy()) {
            Ok(texture) => {
                rl.hide_cursor();
                world.insert_non_send_resource(CursorSprite::new(texture, config.cursor_hotspot));
            }
            Err(e) => error!("Failed to load cursor texture {:?}: {}", path, e),
        }
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::setup(&mut world, &config);
    world.insert_resource(config);

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(
        (back_key_system, widget_interaction_system)
            .run_if(state_is_menu)
            .after(update_input_state),
    );
    update.add_systems(cursor_effect_system.after(update_input_state));
    update.add_systems(
        menu_transition_driver
            .after(widget_interaction_system)
            .after(back_key_system),
    );
    update.add_systems(check_pending_state.after(menu_transition_driver));
    update.add_systems(apply_master_volume.after(widget_interaction_system));
    update.add_systems(
        // audio systems must be together
        (
            // First, advance AudioCmd messages and forward them to the audio thread
            update_bevy_audio_cmds,
            forward_audio_cmds,
            // Then, pull audio thread messages and advance them
            poll_audio_messages,
            update_bevy_audio_messages,
            handle_audio_messages,
        )
            .chain()
            .after(apply_master_volume)
            .after(cursor_effect_system),
    );
    update.add_systems(ttl_system);
    update.add_systems(
        render_system
            .after(menu_transition_driver)
            .after(ttl_system)
            .after(check_pending_state),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    info!("Bye");
    shutdown_audio(&mut world);
}
