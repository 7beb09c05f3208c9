//! Host notification interface

use std::path::Path;

use crate::domain::timer::TimerSnapshot;

/// Kind of timer-list mutation reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerChange {
    Added,
    Deleted,
}

/// Interface driven by the host's notification dispatch, one method per
/// event the controller depends on.
///
/// All methods are invoked on the host's main control thread, one
/// notification at a time; implementations never see overlapping calls.
pub trait StatusObserver {
    /// The live view switched to `channel_number`, or away from live
    /// viewing (`channel_number <= 0` or `live_view` false).
    fn channel_switch(&mut self, channel_number: i32, live_view: bool);

    /// A timer was added to or deleted from the host's timer list.
    /// Deleted timers are delivered as their final snapshot.
    fn timer_change(&mut self, timer: &TimerSnapshot, change: TimerChange);

    /// A recording started (`active` true) or ended (`active` false).
    fn recording(&mut self, name: &str, file: &Path, active: bool);

    /// Host main-loop tick, roughly once per second.
    fn main_loop_tick(&mut self);
}
