//! Live-recording controller use case

use std::path::Path;
use std::time::{Duration, SystemTime};

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::domain::config::{HostPolicy, LiveRecConfig};
use crate::domain::session::{LiveSession, SessionPhase};
use crate::domain::timer::{TimerId, TimerSnapshot};

use super::observer::{StatusObserver, TimerChange};
use super::ports::{
    ChannelDirectory, ConfirmPrompt, PresenceMonitor, PromptReply, RecordControl,
    RecordControlError, RecordingIndex, TimerDirectory,
};

/// How long the idle-confirmation prompt waits before the recording is
/// treated as abandoned.
pub const IDLE_PROMPT_TIMEOUT: Duration = Duration::from_secs(300);

/// Message shown by the idle-confirmation prompt.
pub const IDLE_PROMPT_MESSAGE: &str = "Press a key to keep the live recording running";

/// Errors from the live-recording controller
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("channel {0} is not in the channel list")]
    ChannelNotFound(i32),

    #[error("claimed timer is no longer in the timer list")]
    ClaimedTimerMissing,

    #[error(transparent)]
    RecordControl(#[from] RecordControlError),
}

/// Live-recording controller.
///
/// Starts an instant recording when the live view tunes to a channel,
/// claims the timer the host creates for it, and stops and cleans up
/// timer and recording again when the user moves on. Holds at most one
/// session at a time and never deletes a timer it did not claim.
pub struct LiveRecordingController<C, T, R, I, M, P>
where
    C: ChannelDirectory,
    T: TimerDirectory,
    R: RecordControl,
    I: RecordingIndex,
    M: PresenceMonitor,
    P: ConfirmPrompt,
{
    channels: C,
    timers: T,
    record_control: R,
    recordings: I,
    presence: M,
    prompt: P,
    config: LiveRecConfig,
    policy: HostPolicy,
    session: LiveSession,
}

impl<C, T, R, I, M, P> LiveRecordingController<C, T, R, I, M, P>
where
    C: ChannelDirectory,
    T: TimerDirectory,
    R: RecordControl,
    I: RecordingIndex,
    M: PresenceMonitor,
    P: ConfirmPrompt,
{
    pub fn new(
        channels: C,
        timers: T,
        record_control: R,
        recordings: I,
        presence: M,
        prompt: P,
        config: LiveRecConfig,
        policy: HostPolicy,
    ) -> Self {
        Self {
            channels,
            timers,
            record_control,
            recordings,
            presence,
            prompt,
            config,
            policy,
            session: LiveSession::new(),
        }
    }

    pub fn config(&self) -> &LiveRecConfig {
        &self.config
    }

    /// Apply a configuration committed through the settings surface.
    pub fn update_config(&mut self, config: LiveRecConfig) {
        self.config = config;
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn claimed_timer(&self) -> Option<TimerId> {
        self.session.claimed_timer()
    }

    /// File path of the active live recording, once the host reported it.
    pub fn recording_file(&self) -> Option<&Path> {
        self.session.file_path()
    }

    /// Start an unattended instant recording for the tuned channel.
    ///
    /// Succeeds without doing anything while the controller is disabled.
    pub fn start_live_recording(&mut self, channel_number: i32) -> Result<(), ControllerError> {
        if !self.config.enabled {
            return Ok(());
        }

        let Some(channel) = self.channels.by_number(channel_number) else {
            error!(channel = channel_number, "did not find channel to record");
            return Err(ControllerError::ChannelNotFound(channel_number));
        };

        debug!(channel = channel.number, name = %channel.name, "starting live recording");

        // Notifications arriving while the window is open are attributed
        // to this request; the recording-start event closes it.
        self.session.begin_start();
        if let Err(e) = self.record_control.start_instant() {
            self.session.end_start();
            return Err(e.into());
        }

        Ok(())
    }

    /// Stop the live recording and delete the timer and recording it
    /// produced, unless another actor has promoted the timer in the
    /// meantime.
    pub fn stop_live_recording(&mut self) -> Result<(), ControllerError> {
        if !self.config.enabled {
            return Ok(());
        }

        let Some(claimed) = self.session.claimed_timer() else {
            return Ok(());
        };

        // The handle is weak; revalidate before touching anything.
        let Some(timer) = self.timers.get(claimed) else {
            error!(timer = %claimed, "claimed timer is gone from the timer list");
            self.session.release();
            return Err(ControllerError::ClaimedTimerMissing);
        };

        // A priority or lifetime above the pause thresholds means someone
        // else adopted this recording; back off without deleting anything.
        if timer.priority > self.policy.pause_priority
            || timer.lifetime > self.policy.pause_lifetime
        {
            debug!(timer = %claimed, "timer was promoted, releasing without cleanup");
            self.session.release();
            return Ok(());
        }

        let file_path = self
            .record_control
            .active_file(claimed)
            .or_else(|| self.session.file_path().map(Path::to_path_buf));
        if file_path.is_none() {
            error!(timer = %claimed, "no file name for the live recording, skipping file cleanup");
        }

        self.session.begin_stop();

        // Stop the recording before deleting its timer: mark the timer to
        // be skipped, then have the host process the change right away.
        if let Err(e) = self.timers.skip(claimed) {
            warn!("{e}");
        }
        self.record_control.process_pending();

        if let Err(e) = self.timers.delete(claimed) {
            warn!("{e}");
        }
        self.timers.set_modified();

        if let Some(path) = file_path {
            self.delete_recording(&path);
        }

        self.session.end_stop();
        self.session.release();

        Ok(())
    }

    /// Stop the live recording and save the timer list; the host will not
    /// save it on its own after this point.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.stop_live_recording() {
            warn!("stopping live recording on shutdown failed: {e}");
        }
        self.timers.persist();
    }

    fn delete_recording(&mut self, path: &Path) {
        if !self.recordings.find_by_path(path) {
            error!(path = %path.display(), "did not find recording to delete");
            return;
        }
        match self.recordings.delete_storage(path) {
            Ok(()) => self.recordings.remove(path),
            Err(e) => error!("{e}"),
        }
    }

    fn timer_added(&mut self, timer: &TimerSnapshot) {
        if !self.session.is_starting() || !self.session.claim(timer.id) {
            return;
        }

        // Stay out of the way of anyone claiming the receiver.
        let priority = self.policy.transfer_priority - 1;
        if self.timers.set_priority(timer.id, priority).is_err() {
            warn!(timer = %timer.id, "timer vanished before it could be claimed");
            self.session.release();
            return;
        }

        // Cap the recording at the configured length.
        let stop = timer.start.advanced_by(self.config.max_minutes());
        if self.timers.set_stop(timer.id, stop).is_err() {
            warn!(timer = %timer.id, "timer vanished before it could be claimed");
            self.session.release();
        }
    }

    fn timer_deleted(&mut self, timer: &TimerSnapshot) {
        if self.session.is_stopping() || !self.session.has_claimed(timer.id) {
            return;
        }

        // Someone else removed our timer. If it already ran to completion,
        // the leftover recording is still ours to clean up.
        if timer.single_event && !timer.recording && timer.stops_at <= SystemTime::now() {
            if let Some(path) = self.session.file_path().map(Path::to_path_buf) {
                self.delete_recording(&path);
            }
        }
        self.session.release();
    }

    fn recording_started(&mut self, name: &str, file: &Path) {
        if !self.session.is_starting() {
            return;
        }
        debug!(name, file = %file.display(), "live recording started");
        self.session.capture_file(file.to_path_buf());
        self.session.end_start();
    }

    fn idle_check(&mut self) {
        if self.session.claimed_timer().is_none() || !self.presence.user_inactive() {
            return;
        }

        match self.prompt.confirm(IDLE_PROMPT_MESSAGE, IDLE_PROMPT_TIMEOUT) {
            PromptReply::Confirmed | PromptReply::Declined => {}
            PromptReply::TimedOut => {
                if let Err(e) = self.stop_live_recording() {
                    error!("stopping abandoned live recording failed: {e}");
                }
            }
        }
    }
}

impl<C, T, R, I, M, P> StatusObserver for LiveRecordingController<C, T, R, I, M, P>
where
    C: ChannelDirectory,
    T: TimerDirectory,
    R: RecordControl,
    I: RecordingIndex,
    M: PresenceMonitor,
    P: ConfirmPrompt,
{
    fn channel_switch(&mut self, channel_number: i32, live_view: bool) {
        if live_view && channel_number > 0 {
            if let Err(e) = self.start_live_recording(channel_number) {
                error!(channel = channel_number, "starting live recording failed: {e}");
            }
        } else if let Err(e) = self.stop_live_recording() {
            error!("stopping live recording failed: {e}");
        }
    }

    fn timer_change(&mut self, timer: &TimerSnapshot, change: TimerChange) {
        match change {
            TimerChange::Added => self.timer_added(timer),
            TimerChange::Deleted => self.timer_deleted(timer),
        }
    }

    fn recording(&mut self, name: &str, file: &Path, active: bool) {
        if active {
            self.recording_started(name, file);
        }
    }

    fn main_loop_tick(&mut self) {
        if self.session.tick() {
            self.idle_check();
        }
    }
}
