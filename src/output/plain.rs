//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::store::Credential;
use console::style;
use std::io::{self, Write};

/// Print a credential in human-readable plain text format.
pub fn print_credential(website: &str, credential: &Credential) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    writeln!(out, "  {} {}", style("Website:").bold(), website)?;

    let email = if credential.email.is_empty() {
        style("(none)").dim().to_string()
    } else {
        credential.email.clone()
    };
    writeln!(out, "  {} {}", style("Email:").bold(), email)?;
    writeln!(
        out,
        "  {} {}",
        style("Password:").bold(),
        credential.password
    )?;
    writeln!(out)?;

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
