//! Credential persistence.
//!
//! Provides the JSON-file-backed vault mapping website names to
//! credential records.

mod json_store;

pub use json_store::{Credential, Vault};
