//! Generate subcommand implementation.
//!
//! Handles the `passkeep generate` command.

use crate::clipboard;
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::generator::generate_password;
use crate::output;
use clap::Parser;

/// Generate a random password.
#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Don't copy the generated password to the clipboard
    #[arg(long)]
    pub no_copy: bool,
}

impl GenerateCommand {
    /// Execute the generate command.
    ///
    /// The password is printed on its own line so output stays pipeable.
    pub fn execute(&self, settings: &AppSettings, quiet: bool) -> CliResult<()> {
        let password = generate_password();

        if settings.auto_copy && !self.no_copy {
            match clipboard::copy(&password) {
                Ok(()) => {
                    if !quiet {
                        output::print_info("Password copied to clipboard");
                    }
                }
                // Headless environments have no clipboard; the password
                // is still printed, so this is not fatal.
                Err(e) => output::print_warning(&e.to_string()),
            }
        }

        println!("{}", password);
        Ok(())
    }
}
