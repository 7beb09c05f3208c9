//! Application layer - Use cases and port interfaces
//!
//! Contains the live-recording controller, the host-event interface it
//! implements, and the trait definitions for host interactions.

pub mod controller;
pub mod observer;
pub mod ports;
pub mod setup;

// Re-export use cases
pub use controller::{
    ControllerError, LiveRecordingController, IDLE_PROMPT_MESSAGE, IDLE_PROMPT_TIMEOUT,
};
pub use observer::{StatusObserver, TimerChange};
pub use setup::SetupPage;
