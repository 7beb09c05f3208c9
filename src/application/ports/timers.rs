//! Timer directory port

use thiserror::Error;

use crate::domain::clock::ClockTime;
use crate::domain::timer::{TimerId, TimerSnapshot};

/// Error when a timer handle no longer resolves to a live timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("timer {0} is not in the timer list")]
pub struct TimerMissing(pub TimerId);

/// Port for the host's timer list.
///
/// Timers are addressed through weak handles; every mutation revalidates
/// the handle and reports [`TimerMissing`] when it has gone stale.
pub trait TimerDirectory {
    /// Fetch the current state of a timer, if it still exists.
    fn get(&self, id: TimerId) -> Option<TimerSnapshot>;

    /// Change a timer's scheduling priority.
    fn set_priority(&mut self, id: TimerId, priority: i32) -> Result<(), TimerMissing>;

    /// Rewrite a timer's scheduled stop time.
    fn set_stop(&mut self, id: TimerId, stop: ClockTime) -> Result<(), TimerMissing>;

    /// Mark a timer to be skipped so its recording stops.
    fn skip(&mut self, id: TimerId) -> Result<(), TimerMissing>;

    /// Remove a timer from the list.
    fn delete(&mut self, id: TimerId) -> Result<(), TimerMissing>;

    /// Flag the timer list as modified so the host notices the change.
    fn set_modified(&mut self);

    /// Ask the host to save the timer list to storage.
    fn persist(&mut self);
}
