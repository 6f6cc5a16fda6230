//! Application configuration resource.
//!
//! Manages window, menu timing and cursor settings loaded from an INI
//! configuration file. Provides defaults for safe startup; every missing
//! value keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! title = Aberred Menu
//!
//! [menu]
//! fade_duration = 0.6
//! quit_delay = 0.4
//! next_scene = My World
//!
//! [cursor]
//! click_sound = ./assets/audio/click.wav
//! texture = ./assets/textures/cursor.png
//! hotspot_x = 0
//! hotspot_y = 0
//! effect = true
//! effect_lifetime = 1.0
//! effect_depth = 10
//!
//! [preferences]
//! path = ./preferences.ini
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_TITLE: &str = "Aberred Menu";
const DEFAULT_FADE_DURATION: f32 = 0.6;
const DEFAULT_QUIT_DELAY: f32 = 0.4;
const DEFAULT_NEXT_SCENE: &str = "My World";
const DEFAULT_EFFECT_LIFETIME: f32 = 1.0;
const DEFAULT_EFFECT_DEPTH: i32 = 10;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_PREFERENCES_PATH: &str = "./preferences.ini";

/// Application configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct MenuConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    pub title: String,
    /// Seconds taken by every panel and overlay fade.
    pub fade_duration: f32,
    /// Pause between the quit fade and the actual quit.
    pub quit_delay: f32,
    /// Scene loaded by "Start".
    pub next_scene: String,
    /// Sound played on every click, if any.
    pub click_sound: Option<PathBuf>,
    /// Texture replacing the OS cursor, if any.
    pub cursor_texture: Option<PathBuf>,
    pub cursor_hotspot: (f32, f32),
    /// Whether a click effect template is available at all.
    pub click_effect: bool,
    pub effect_lifetime: f32,
    pub effect_depth: i32,
    /// Where user preferences are stored.
    pub preferences_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            fade_duration: DEFAULT_FADE_DURATION,
            quit_delay: DEFAULT_QUIT_DELAY,
            next_scene: DEFAULT_NEXT_SCENE.to_string(),
            click_sound: None,
            cursor_texture: None,
            cursor_hotspot: (0.0, 0.0),
            click_effect: true,
            effect_lifetime: DEFAULT_EFFECT_LIFETIME,
            effect_depth: DEFAULT_EFFECT_DEPTH,
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [menu] section
        if let Some(duration) = config.getfloat("menu", "fade_duration").ok().flatten() {
            self.fade_duration = duration as f32;
        }
        if let Some(delay) = config.getfloat("menu", "quit_delay").ok().flatten() {
            self.quit_delay = delay as f32;
        }
        if let Some(scene) = config.get("menu", "next_scene") {
            self.next_scene = scene;
        }

        // [cursor] section
        if let Some(path) = config.get("cursor", "click_sound") {
            self.click_sound = Some(PathBuf::from(path));
        }
        if let Some(path) = config.get("cursor", "texture") {
            self.cursor_texture = Some(PathBuf::from(path));
        }
        if let Some(x) = config.getfloat("cursor", "hotspot_x").ok().flatten() {
            self.cursor_hotspot.0 = x as f32;
        }
        if let Some(y) = config.getfloat("cursor", "hotspot_y").ok().flatten() {
            self.cursor_hotspot.1 = y as f32;
        }
        if let Some(effect) = config.getbool("cursor", "effect").ok().flatten() {
            self.click_effect = effect;
        }
        if let Some(lifetime) = config.getfloat("cursor", "effect_lifetime").ok().flatten() {
            self.effect_lifetime = lifetime as f32;
        }
        if let Some(depth) = config.getint("cursor", "effect_depth").ok().flatten() {
            self.effect_depth = depth as i32;
        }

        // [preferences] section
        if let Some(path) = config.get("preferences", "path") {
            self.preferences_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, fade={}s, next_scene='{}', prefs={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.fade_duration,
            self.next_scene,
            self.preferences_path
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
