//! Configuration management for passkeep.
//!
//! Provides XDG-compliant paths and application settings, including the
//! default email and backing-file override.

mod settings;

pub use settings::{AppSettings, Paths};
