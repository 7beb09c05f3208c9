//! XDG settings store adapter

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::application::ports::SettingsStore;
use crate::domain::error::SettingsError;

/// XDG-compliant settings store.
///
/// Keeps the host's string key-value settings in a TOML table under the
/// platform config directory.
pub struct XdgSettingsStore {
    path: PathBuf,
}

impl XdgSettingsStore {
    /// Create a settings store with the default path.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("liverec");

        Self {
            path: config_dir.join("settings.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn load_table(&self) -> Result<BTreeMap<String, String>, SettingsError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| SettingsError::ReadError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| SettingsError::ParseError(e.to_string()))
    }

    fn save_table(&self, table: &BTreeMap<String, String>) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::WriteError(e.to_string()))?;
        }

        let content =
            toml::to_string_pretty(table).map_err(|e| SettingsError::WriteError(e.to_string()))?;

        fs::write(&self.path, content).map_err(|e| SettingsError::WriteError(e.to_string()))
    }
}

impl Default for XdgSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for XdgSettingsStore {
    fn read(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let mut table = self.load_table()?;
        Ok(table.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut table = self.load_table()?;
        table.insert(key.to_string(), value.to_string());
        self.save_table(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{LiveRecConfig, SETTING_MAX_HOURS};

    fn temp_store() -> (tempfile::TempDir, XdgSettingsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgSettingsStore::with_path(dir.path().join("settings.toml"));
        (dir, store)
    }

    #[test]
    fn default_path_is_xdg() {
        let store = XdgSettingsStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("liverec"));
        assert!(path.to_string_lossy().contains("settings.toml"));
    }

    #[test]
    fn missing_file_reads_as_unset() {
        let (_dir, store) = temp_store();
        assert_eq!(store.read("Enabled").unwrap(), None);
        assert_eq!(store.load_config().unwrap(), LiveRecConfig::default());
    }

    #[test]
    fn values_survive_a_round_trip() {
        let (_dir, mut store) = temp_store();
        let config = LiveRecConfig {
            enabled: false,
            max_hours: 7,
        };

        store.store_config(&config).unwrap();

        let reloaded = XdgSettingsStore::with_path(store.path());
        assert_eq!(reloaded.load_config().unwrap(), config);
    }

    #[test]
    fn unrelated_keys_are_preserved_across_writes() {
        let (_dir, mut store) = temp_store();
        store.write("Other", "value").unwrap();
        store.write(SETTING_MAX_HOURS, "5").unwrap();

        assert_eq!(store.read("Other").unwrap().as_deref(), Some("value"));
        assert_eq!(store.read(SETTING_MAX_HOURS).unwrap().as_deref(), Some("5"));
    }

    #[test]
    fn malformed_hours_fall_back_to_default() {
        let (_dir, mut store) = temp_store();
        store.write(SETTING_MAX_HOURS, "soon").unwrap();

        let config = store.load_config().unwrap();
        assert_eq!(config.max_hours, 3);
    }

    #[test]
    fn unparseable_file_reports_a_parse_error() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not = [valid").unwrap();

        let err = store.read("Enabled").unwrap_err();
        assert!(matches!(err, SettingsError::ParseError(_)));
    }
}
