//! Host timer data as seen through the directory port

use std::fmt;
use std::time::SystemTime;

use crate::domain::clock::ClockTime;

/// Weak handle to a host-managed timer.
///
/// The host may delete the timer at any point between calls; holders must
/// revalidate the handle through the timer directory before acting on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Point-in-time copy of a host timer's scheduling fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerSnapshot {
    pub id: TimerId,
    pub priority: i32,
    pub lifetime: i32,
    /// Scheduled start, quantized clock of day.
    pub start: ClockTime,
    /// Scheduled stop, quantized clock of day.
    pub stop: ClockTime,
    /// A one-shot timer rather than a repeating one.
    pub single_event: bool,
    /// Whether a recording is running for this timer right now.
    pub recording: bool,
    /// Absolute instant the timer is scheduled to stop.
    pub stops_at: SystemTime,
}
