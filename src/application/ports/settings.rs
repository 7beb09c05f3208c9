//! Settings persistence port

use crate::domain::config::{LiveRecConfig, SETTING_ENABLED, SETTING_MAX_HOURS};
use crate::domain::error::SettingsError;

/// Port for the host's persisted key-value settings.
pub trait SettingsStore {
    /// Read a named setting, `None` if it was never written.
    fn read(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Write a named setting.
    fn write(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;

    /// Load the controller configuration, falling back to defaults for
    /// missing or malformed entries.
    fn load_config(&self) -> Result<LiveRecConfig, SettingsError> {
        let mut config = LiveRecConfig::default();
        if let Some(value) = self.read(SETTING_ENABLED)? {
            config.apply_setting(SETTING_ENABLED, &value);
        }
        if let Some(value) = self.read(SETTING_MAX_HOURS)? {
            config.apply_setting(SETTING_MAX_HOURS, &value);
        }
        Ok(config)
    }

    /// Persist the controller configuration.
    fn store_config(&mut self, config: &LiveRecConfig) -> Result<(), SettingsError> {
        self.write(SETTING_ENABLED, if config.enabled { "1" } else { "0" })?;
        self.write(SETTING_MAX_HOURS, &config.max_hours.to_string())?;
        Ok(())
    }
}
