//! # Passkeep - A Minimal Local Credential Manager
//!
//! Passkeep generates strong random passwords and stores
//! website/email/password records in a single local JSON file.
//!
//! ## Features
//!
//! - **Password Generation**: Random passwords mixing letters, digits, and
//!   a fixed symbol set, drawn from a cryptographically secure RNG
//! - **Credential Storage**: Merge-on-write persistence to one
//!   human-readable JSON file, created lazily on first save
//! - **Lookup by Website**: Distinguishes "no store yet" from "website not
//!   stored" so front ends can react appropriately
//! - **Clipboard Integration**: Optional copy of generated or retrieved
//!   passwords
//! - **Multiple Output Formats**: Plain text and JSON
//!
//! The store is intentionally plain: no encryption, no multi-process
//! coordination. Concurrent writers race (last writer wins); this is a
//! documented limitation, not a supported mode.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use passkeep::generator::generate_password;
//! use passkeep::store::Vault;
//!
//! fn main() {
//!     let vault = Vault::new("data.json");
//!     let password = generate_password();
//!
//!     vault.save("example.com", "user@example.com", &password).unwrap();
//!
//!     let credential = vault.find("example.com").unwrap();
//!     println!("{}: {}", credential.email, credential.password);
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`generator`] - Password generation with composition policies
//! - [`store`] - Credential persistence (the vault)
//! - [`config`] - Settings and XDG path management
//! - [`error`] - Comprehensive error types
//! - [`output`] - Output formatting utilities
//! - [`clipboard`] - System clipboard access
//! - [`cli`] - Command-line front end

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod store;

// Re-export commonly used types
pub use error::{CliError, StorageError, ValidationError, VaultError};
pub use generator::{generate_password, PasswordPolicy};
pub use store::{Credential, Vault};
