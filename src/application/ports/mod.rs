//! Port interfaces (traits) for the host application
//!
//! These traits define the boundaries between the controller and the
//! host-owned subsystems it coordinates with. Every method is invoked
//! synchronously on the host's main control thread.

pub mod channels;
pub mod presence;
pub mod prompt;
pub mod record_control;
pub mod recordings;
pub mod settings;
pub mod timers;

// Re-export common types
pub use channels::{Channel, ChannelDirectory};
pub use presence::PresenceMonitor;
pub use prompt::{ConfirmPrompt, PromptReply};
pub use record_control::{RecordControl, RecordControlError};
pub use recordings::{RecordingDeleteError, RecordingIndex};
pub use settings::SettingsStore;
pub use timers::{TimerDirectory, TimerMissing};
