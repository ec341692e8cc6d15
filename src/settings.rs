//! Persistent key/value settings.
//!
//! Values are lists of strings keyed by name. [`Settings`] keeps them in
//! memory and writes them to a TOML file on [`Settings::save`]:
//!
//! ```toml
//! Camera = ["3.5", "-7.25"]
//! DebugText = ["1"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::BoardError;

/// String-list key/value store consumed by camera persistence and the debug
/// overlay.
pub trait SettingsStore {
    /// Values stored under `key`; empty if the key is absent.
    fn get(&self, key: &str) -> Vec<String>;

    /// Replace the values stored under `key`.
    fn set(&mut self, key: &str, values: Vec<String>);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Entry {
    /// Set during this session; only these entries are written back.
    modified: bool,
    values: Vec<String>,
}

/// File-backed [`SettingsStore`].
///
/// Entries read from disk but never `set` again are dropped on save, so
/// stale keys from older versions do not accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    path: Option<PathBuf>,
    entries: BTreeMap<String, Entry>,
}

impl Settings {
    /// A store with no backing file. [`Settings::save`] is a no-op.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the settings file at `path`.
    ///
    /// A missing, unreadable or malformed file yields an empty store; the
    /// file is recreated on the next save.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match parse_entries(&content) {
                Ok(entries) => {
                    log::info!(
                        "Loaded {} settings from {}",
                        entries.len(),
                        path.display()
                    );
                    entries
                }
                Err(e) => {
                    log::warn!(
                        "Ignoring malformed settings file {}: {e}",
                        path.display()
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                BTreeMap::new()
            }
            Err(e) => {
                log::warn!(
                    "Failed to read settings file {}: {e}",
                    path.display()
                );
                BTreeMap::new()
            }
        };
        Self {
            path: Some(path),
            entries,
        }
    }

    /// Backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write every entry set during this session to the backing file.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Io`] if the file or its directory cannot be
    /// written.
    pub fn save(&self) -> Result<(), BoardError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Serialize the modified entries as a TOML table of string arrays.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SettingsParse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, BoardError> {
        let table: BTreeMap<&str, &[String]> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.modified)
            .map(|(key, entry)| (key.as_str(), entry.values.as_slice()))
            .collect();
        toml::to_string(&table)
            .map_err(|e| BoardError::SettingsParse(e.to_string()))
    }
}

impl SettingsStore for Settings {
    fn get(&self, key: &str) -> Vec<String> {
        self.entries
            .get(key)
            .map(|entry| entry.values.clone())
            .unwrap_or_default()
    }

    fn set(&mut self, key: &str, values: Vec<String>) {
        let _ = self.entries.insert(
            key.to_owned(),
            Entry {
                modified: true,
                values,
            },
        );
    }
}

fn parse_entries(content: &str) -> Result<BTreeMap<String, Entry>, BoardError> {
    let table: BTreeMap<String, Vec<String>> = toml::from_str(content)
        .map_err(|e| BoardError::SettingsParse(e.to_string()))?;
    Ok(table
        .into_iter()
        .map(|(key, values)| {
            (
                key,
                Entry {
                    modified: false,
                    values,
                },
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("boardcam-settings-{}-{name}", std::process::id()))
            .join("settings.toml")
    }

    #[test]
    fn missing_key_is_empty() {
        let settings = Settings::in_memory();
        assert!(settings.get("Camera").is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut settings = Settings::in_memory();
        settings.set("Camera", vec!["1".into(), "2".into()]);
        assert_eq!(settings.get("Camera"), vec!["1", "2"]);
    }

    #[test]
    fn file_round_trip() {
        let path = temp_path("round-trip");
        let mut settings = Settings::open(&path);
        settings.set("Camera", vec!["3.5".into(), "-7.25".into()]);
        settings.set("DebugText", vec!["1".into()]);
        settings.save().unwrap();

        let reopened = Settings::open(&path);
        assert_eq!(reopened.get("Camera"), vec!["3.5", "-7.25"]);
        assert_eq!(reopened.get("DebugText"), vec!["1"]);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn only_modified_entries_are_saved() {
        let mut settings = Settings::in_memory();
        settings.entries = parse_entries("Old = [\"x\"]\n").unwrap();
        settings.set("New", vec!["y".into()]);
        let toml_str = settings.to_toml().unwrap();
        assert!(toml_str.contains("New"));
        assert!(!toml_str.contains("Old"));
    }

    #[test]
    fn malformed_file_yields_empty_store() {
        let path = temp_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "Camera = 42\nnot toml at all [").unwrap();
        let settings = Settings::open(&path);
        assert!(settings.get("Camera").is_empty());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn in_memory_save_is_noop() {
        let mut settings = Settings::in_memory();
        settings.set("Camera", vec!["0".into(), "0".into()]);
        assert!(settings.save().is_ok());
        assert!(settings.path().is_none());
    }
}
