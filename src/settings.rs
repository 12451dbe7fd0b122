// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persisted language override.
//!
//! The user's explicit choice is stored as an integer under
//! `Locale/LanguageId` in the host's settings file. Other keys in the file
//! are preserved on write.

use crate::error::LangError;
use crate::registry::LangId;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const LANGUAGE_SECTION: &str = "Locale";
pub const LANGUAGE_ENTRY: &str = "LanguageId";

pub trait SettingsStore {
    fn language_override(&self) -> Option<LangId>;
    fn set_language_override(&mut self, id: LangId) -> Result<(), LangError>;
}

/// Settings kept in a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonSettings {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonSettings {
    /// Open `path`, treating a missing file as empty settings.
    pub fn open(path: &Path) -> Result<Self, LangError> {
        let values = match fs::read_to_string(path) {
            Ok(raw) if raw.trim().is_empty() => Map::new(),
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(values)) => values,
                Ok(_) => {
                    return Err(LangError::Settings(format!(
                        "{} is not a JSON object",
                        path.display()
                    )))
                }
                Err(err) => {
                    return Err(LangError::Settings(format!(
                        "invalid settings file {}: {err}",
                        path.display()
                    )))
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(err) => return Err(LangError::io(path, err)),
        };
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), LangError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| LangError::io(parent, err))?;
            }
        }
        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|err| LangError::Settings(err.to_string()))?;
        fs::write(&self.path, json).map_err(|err| LangError::io(&self.path, err))
    }
}

impl SettingsStore for JsonSettings {
    fn language_override(&self) -> Option<LangId> {
        let raw = self.values.get(LANGUAGE_SECTION)?.get(LANGUAGE_ENTRY)?.as_u64()?;
        match u16::try_from(raw) {
            Ok(raw) if raw != 0 => Some(LangId::from_raw(raw)),
            _ => {
                warn!(value = raw, "ignoring out-of-range language override");
                None
            }
        }
    }

    fn set_language_override(&mut self, id: LangId) -> Result<(), LangError> {
        let section = self
            .values
            .entry(LANGUAGE_SECTION)
            .or_insert_with(|| Value::Object(Map::new()));
        if !section.is_object() {
            *section = Value::Object(Map::new());
        }
        if let Value::Object(entries) = section {
            entries.insert(LANGUAGE_ENTRY.to_string(), Value::from(id.raw()));
        }
        self.save()
    }
}

/// In-memory settings, for hosts without a settings file and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    value: Option<LangId>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(id: LangId) -> Self {
        Self { value: Some(id) }
    }
}

impl SettingsStore for MemorySettings {
    fn language_override(&self) -> Option<LangId> {
        self.value
    }

    fn set_language_override(&mut self, id: LangId) -> Result<(), LangError> {
        self.value = Some(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_has_no_override() {
        let dir = TempDir::new().unwrap();
        let settings = JsonSettings::open(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings.language_override(), None);
    }

    #[test]
    fn override_is_written_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("conf").join("settings.json");
        let mut settings = JsonSettings::open(&path).unwrap();
        settings.set_language_override(LangId::from_raw(0x040c)).unwrap();

        let reopened = JsonSettings::open(&path).unwrap();
        assert_eq!(reopened.language_override(), Some(LangId::from_raw(0x040c)));
        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["Locale"]["LanguageId"], Value::from(1036));
    }

    #[test]
    fn unrelated_keys_survive_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"Editor":{"TabSize":4},"Locale":{"Other":true}}"#).unwrap();

        let mut settings = JsonSettings::open(&path).unwrap();
        settings.set_language_override(LangId::from_raw(0x0407)).unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["Editor"]["TabSize"], Value::from(4));
        assert_eq!(raw["Locale"]["Other"], Value::from(true));
        assert_eq!(raw["Locale"]["LanguageId"], Value::from(0x0407));
    }

    #[test]
    fn out_of_range_values_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"Locale":{"LanguageId":70000}}"#).unwrap();
        assert_eq!(JsonSettings::open(&path).unwrap().language_override(), None);
    }

    #[test]
    fn invalid_json_is_a_settings_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(JsonSettings::open(&path), Err(LangError::Settings(_))));
    }
}
