//! Output formatting module.
//!
//! Provides formatters for plain text and JSON output of credentials.

mod json_format;
mod plain;

pub use json_format::print_json;
pub use plain::{print_credential, print_error, print_info, print_success, print_warning};

use crate::cli::OutputFormat;
use crate::store::Credential;
use std::io;

/// Format and print a credential according to the specified format.
pub fn format_credential(
    website: &str,
    credential: &Credential,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_credential(website, credential),
        OutputFormat::Json => json_format::print_json(website, credential),
    }
}
