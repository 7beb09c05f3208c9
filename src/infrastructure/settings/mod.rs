//! Settings persistence adapters

pub mod xdg;

pub use xdg::XdgSettingsStore;
