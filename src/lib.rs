//! LiveRec - automatic live-TV recording for DVR hosts
//!
//! This crate implements the live-recording lifecycle for a digital video
//! recorder host: when the user tunes the live view to a channel, an instant
//! recording is started and capped at a configurable length; when the user
//! tunes away, or lets an idle-confirmation prompt expire, the recording and
//! its timer are stopped and cleaned up again.
//!
//! The host owns the channel list, timer list, recording index and recording
//! engine. This crate consumes them through port traits and is driven
//! entirely by the host's notification dispatch on its main control thread.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core state and value objects (clock time, configuration,
//!   the live session) and domain errors
//! - **Application**: The live-recording controller, the host-event
//!   interface it implements, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (TOML settings store)

pub mod application;
pub mod domain;
pub mod infrastructure;
