//! Settings-editing surface

use crate::domain::config::{LiveRecConfig, MAX_RECORDING_HOURS, MIN_RECORDING_HOURS};
use crate::domain::error::SettingsError;

use super::ports::SettingsStore;

/// Settings page model for the host's setup menu.
///
/// Edits a copy of the configuration and persists it only on commit, the
/// way the host stores setup entries when the user confirms the page.
/// Offers a boolean toggle and a bounded integer control.
#[derive(Debug, Clone)]
pub struct SetupPage {
    draft: LiveRecConfig,
}

impl SetupPage {
    /// Open the page over the current configuration.
    pub fn new(current: LiveRecConfig) -> Self {
        Self { draft: current }
    }

    pub fn draft(&self) -> &LiveRecConfig {
        &self.draft
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.draft.enabled = enabled;
    }

    /// Set the recording length cap, clamped into the permitted range.
    pub fn set_max_hours(&mut self, hours: u8) {
        self.draft.max_hours = hours.clamp(MIN_RECORDING_HOURS, MAX_RECORDING_HOURS);
    }

    /// Persist the draft and hand it back for the host to apply.
    pub fn commit<S: SettingsStore + ?Sized>(
        self,
        store: &mut S,
    ) -> Result<LiveRecConfig, SettingsError> {
        store.store_config(&self.draft)?;
        Ok(self.draft)
    }
}
