//! Persistent key-value preference backends.
//!
//! [`Settings`](super::settings::Settings) stores its values through the
//! [`PreferenceBackend`] trait. Two backends are provided:
//!
//! - [`IniPreferences`] keeps the values in the `[preferences]` section of an
//!   INI file and writes the whole file on [`PreferenceBackend::save`].
//! - [`MemoryPreferences`] keeps everything in memory. Used by tests and by
//!   runs that must not touch the disk.
//!
//! Values are typed at the API level (integer or float) but stored as text,
//! so a value written as one type and read as the other simply fails to
//! parse and reads as missing.
//!
//! # File Format
//!
//! ```ini
//! [preferences]
//! SoundFX=1
//! VisualFX=1
//! MasterSound=0
//! MouseSensitivity=1.5
//! ```

use configparser::ini::Ini;
use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// INI section holding every preference key.
pub const PREFERENCES_SECTION: &str = "preferences";
const DEFAULT_PREFERENCES_PATH: &str = "./preferences.ini";

/// A persistent key-value store surviving process restarts.
///
/// Reads return `None` when a key is missing *or* its value cannot be parsed
/// as the requested type; callers substitute their own defaults.
pub trait PreferenceBackend: Send + Sync {
    /// Whether a value is stored under `key`, parseable or not.
    fn has_key(&self, key: &str) -> bool;
    fn get_int(&self, key: &str) -> Option<i64>;
    fn get_float(&self, key: &str) -> Option<f32>;
    fn set_int(&mut self, key: &str, value: i64);
    fn set_float(&mut self, key: &str, value: f32);
    /// Flush pending writes to durable storage.
    fn save(&mut self) -> Result<(), String>;
}

/// Preference backend stored in an INI file.
pub struct IniPreferences {
    path: PathBuf,
    ini: Ini,
}

impl Default for IniPreferences {
    fn default() -> Self {
        Self::open(DEFAULT_PREFERENCES_PATH)
    }
}

impl IniPreferences {
    /// Open the preference file at `path`.
    ///
    /// A missing or unreadable file is not an error: the store starts empty
    /// and the file is created on the first save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        // Keys keep their case: `SoundFX`, not `soundfx`.
        let mut ini = Ini::new_cs();
        if path.exists() {
            if let Err(e) = ini.load(&path) {
                warn!(
                    "Failed to load preferences from {:?}, starting empty: {}",
                    path, e
                );
                ini = Ini::new_cs();
            }
        } else {
            debug!("No preference file at {:?}, starting empty", path);
        }
        Self { path, ini }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.ini.get(PREFERENCES_SECTION, key)
    }
}

impl PreferenceBackend for IniPreferences {
    fn has_key(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.raw(key)?.trim().parse().ok()
    }

    fn get_float(&self, key: &str) -> Option<f32> {
        self.raw(key)?.trim().parse().ok()
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.ini
            .set(PREFERENCES_SECTION, key, Some(value.to_string()));
    }

    fn set_float(&mut self, key: &str, value: f32) {
        self.ini
            .set(PREFERENCES_SECTION, key, Some(value.to_string()));
    }

    fn save(&mut self) -> Result<(), String> {
        self.ini
            .write(&self.path)
            .map_err(|e| format!("Failed to save preferences file: {}", e))
    }
}

/// In-memory preference backend.
///
/// `saves` counts calls to [`PreferenceBackend::save`], which lets tests
/// check the write-through behaviour of the settings store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: FxHashMap<String, String>,
    saves: usize,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw text value, bypassing the typed setters.
    pub fn with_raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl PreferenceBackend for MemoryPreferences {
    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key)?.trim().parse().ok()
    }

    fn get_float(&self, key: &str) -> Option<f32> {
        self.values.get(key)?.trim().parse().ok()
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn set_float(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn save(&mut self) -> Result<(), String> {
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "aberredmenu_prefs_{}_{}.ini",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_memory_roundtrip_and_save_count() {
        let mut prefs = MemoryPreferences::new();
        assert!(!prefs.has_key("SoundFX"));
        prefs.set_int("SoundFX", 0);
        prefs.set_float("MouseSensitivity", 2.5);
        assert_eq!(prefs.get_int("SoundFX"), Some(0));
        assert_eq!(prefs.get_float("MouseSensitivity"), Some(2.5));
        assert_eq!(prefs.save_count(), 0);
        prefs.save().unwrap();
        assert_eq!(prefs.save_count(), 1);
    }

    #[test]
    fn test_memory_unparsable_reads_as_missing() {
        let prefs = MemoryPreferences::new().with_raw("SoundFX", "yes please");
        assert!(prefs.has_key("SoundFX"));
        assert_eq!(prefs.get_int("SoundFX"), None);
    }

    #[test]
    fn test_ini_missing_file_starts_empty() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);
        let prefs = IniPreferences::open(&path);
        assert!(!prefs.has_key("SoundFX"));
        assert_eq!(prefs.path(), path.as_path());
    }

    #[test]
    fn test_ini_persists_across_reopen() {
        let path = temp_path("reopen");
        let _ = std::fs::remove_file(&path);

        let mut prefs = IniPreferences::open(&path);
        prefs.set_int("MasterSound", 0);
        prefs.set_float("MouseSensitivity", 0.75);
        prefs.save().unwrap();

        let reopened = IniPreferences::open(&path);
        assert_eq!(reopened.get_int("MasterSound"), Some(0));
        assert_eq!(reopened.get_float("MouseSensitivity"), Some(0.75));
        // Case is preserved
        assert!(!reopened.has_key("mastersound"));

        let _ = std::fs::remove_file(&path);
    }
}
