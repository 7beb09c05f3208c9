//! Interactive confirmation port

use std::time::Duration;

/// Outcome of a timeout-bounded confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptReply {
    /// The user confirmed within the timeout.
    Confirmed,
    /// The user declined within the timeout.
    Declined,
    /// The timeout expired without a response.
    TimedOut,
}

/// Port for the host's blocking confirmation surface.
pub trait ConfirmPrompt {
    /// Show a yes/no prompt and wait for up to `timeout` for a response.
    /// Blocks the calling thread; the host's single-threaded execution
    /// model makes that an accepted tradeoff.
    fn confirm(&mut self, message: &str, timeout: Duration) -> PromptReply;
}
