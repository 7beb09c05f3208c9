//! Recording-control port

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::timer::TimerId;

/// Error starting an instant recording.
#[derive(Debug, Clone, Error)]
pub enum RecordControlError {
    #[error("failed to start instant recording: {0}")]
    StartFailed(String),

    #[error("no device available for recording")]
    NoFreeDevice,
}

/// Port for the host's recording-control subsystem.
pub trait RecordControl {
    /// Start an unattended instant recording of the currently tuned source.
    /// The host announces the timer it creates for the recording through
    /// the timer-change notification stream.
    fn start_instant(&mut self) -> Result<(), RecordControlError>;

    /// The file the active recording for `timer` is writing to, if the
    /// host currently has a recording control for it.
    fn active_file(&self, timer: TimerId) -> Option<PathBuf>;

    /// Process pending recording-control state immediately, so a stop
    /// takes effect before the call returns.
    fn process_pending(&mut self);
}
