//! Domain error types

use thiserror::Error;

/// Error when an encoded clock value is not a valid time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid clock time {encoded:04}: expected HHMM with hours < 24 and minutes < 60")]
pub struct InvalidClockTime {
    pub encoded: u16,
}

/// Error when reading or writing persisted settings
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    ReadError(String),

    #[error("failed to parse settings: {0}")]
    ParseError(String),

    #[error("failed to write settings: {0}")]
    WriteError(String),
}
