//! Live-recording session state

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::timer::TimerId;

/// Host ticks between idle checks (ticks arrive about once a second).
pub const IDLE_CHECK_TICKS: u8 = 60;

/// Coarse view of the session, for inspection and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Starting,
    Recording,
    Stopping,
}

impl SessionPhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Starting => "starting",
            Self::Recording => "recording",
            Self::Stopping => "stopping",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State for the single live-recording session.
///
/// Tracks the claimed host timer, the recording's file path, and the
/// attribution flags that tell self-caused host notifications apart from
/// external ones. At most one timer is claimed at any time, and the file
/// path is only meaningful while the claim is held.
#[derive(Debug, Default)]
pub struct LiveSession {
    claimed: Option<TimerId>,
    file_path: Option<PathBuf>,
    starting: bool,
    stopping: bool,
    idle_ticks: u8,
}

impl LiveSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.stopping {
            SessionPhase::Stopping
        } else if self.claimed.is_some() {
            SessionPhase::Recording
        } else if self.starting {
            SessionPhase::Starting
        } else {
            SessionPhase::Idle
        }
    }

    pub fn claimed_timer(&self) -> Option<TimerId> {
        self.claimed
    }

    /// Whether `timer` is the claimed one.
    pub fn has_claimed(&self, timer: TimerId) -> bool {
        self.claimed == Some(timer)
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_starting(&self) -> bool {
        self.starting
    }

    pub fn is_stopping(&self) -> bool {
        self.stopping
    }

    /// Open the attribution window for a start request. Host notifications
    /// arriving inside the window belong to that request.
    pub fn begin_start(&mut self) {
        self.starting = true;
    }

    /// Close the attribution window.
    pub fn end_start(&mut self) {
        self.starting = false;
    }

    /// Claim the timer the host created for our start request.
    /// Refuses a second claim; at most one timer is claimed at a time.
    pub fn claim(&mut self, timer: TimerId) -> bool {
        if self.claimed.is_some() {
            return false;
        }
        self.claimed = Some(timer);
        true
    }

    /// Record the file path reported for the active recording.
    pub fn capture_file(&mut self, path: PathBuf) {
        self.file_path = Some(path);
    }

    /// Drop the claim and everything only valid while it exists.
    pub fn release(&mut self) {
        self.claimed = None;
        self.file_path = None;
        self.starting = false;
    }

    /// Mark the delete sequence as self-caused for the duration of a stop.
    pub fn begin_stop(&mut self) {
        self.stopping = true;
    }

    pub fn end_stop(&mut self) {
        self.stopping = false;
    }

    /// Count a host tick. Returns true once per [`IDLE_CHECK_TICKS`] calls.
    pub fn tick(&mut self) -> bool {
        self.idle_ticks += 1;
        if self.idle_ticks >= IDLE_CHECK_TICKS {
            self.idle_ticks = 0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let session = LiveSession::new();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.claimed_timer().is_none());
        assert!(session.file_path().is_none());
    }

    #[test]
    fn start_window_then_claim_reaches_recording() {
        let mut session = LiveSession::new();
        session.begin_start();
        assert_eq!(session.phase(), SessionPhase::Starting);

        assert!(session.claim(TimerId(7)));
        assert_eq!(session.phase(), SessionPhase::Recording);
        assert!(session.has_claimed(TimerId(7)));
    }

    #[test]
    fn second_claim_is_refused() {
        let mut session = LiveSession::new();
        assert!(session.claim(TimerId(1)));
        assert!(!session.claim(TimerId(2)));
        assert_eq!(session.claimed_timer(), Some(TimerId(1)));
    }

    #[test]
    fn release_clears_claim_path_and_window() {
        let mut session = LiveSession::new();
        session.begin_start();
        session.claim(TimerId(1));
        session.capture_file(PathBuf::from("/video/live.rec"));

        session.release();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.claimed_timer().is_none());
        assert!(session.file_path().is_none());
        assert!(!session.is_starting());
    }

    #[test]
    fn stopping_overrides_phase() {
        let mut session = LiveSession::new();
        session.claim(TimerId(1));
        session.begin_stop();
        assert_eq!(session.phase(), SessionPhase::Stopping);
        session.end_stop();
        assert_eq!(session.phase(), SessionPhase::Recording);
    }

    #[test]
    fn tick_fires_every_sixty_calls() {
        let mut session = LiveSession::new();
        for _ in 0..IDLE_CHECK_TICKS - 1 {
            assert!(!session.tick());
        }
        assert!(session.tick());

        // counter resets and the cycle repeats
        for _ in 0..IDLE_CHECK_TICKS - 1 {
            assert!(!session.tick());
        }
        assert!(session.tick());
    }

    #[test]
    fn phase_display() {
        assert_eq!(SessionPhase::Idle.to_string(), "idle");
        assert_eq!(SessionPhase::Starting.to_string(), "starting");
        assert_eq!(SessionPhase::Recording.to_string(), "recording");
        assert_eq!(SessionPhase::Stopping.to_string(), "stopping");
    }
}
