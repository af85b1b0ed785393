//! Add subcommand implementation.
//!
//! Handles the `passkeep add <website>` command for saving credentials.

use crate::clipboard;
use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::generator::generate_password;
use crate::output;
use crate::store::Vault;
use clap::Parser;

/// Save a credential for a website.
#[derive(Parser, Debug)]
pub struct AddCommand {
    /// Website the credential belongs to
    #[arg(value_name = "WEBSITE")]
    pub website: String,

    /// Email or username for the account (falls back to the configured
    /// default email)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password to store
    #[arg(short, long)]
    pub password: Option<String>,

    /// Generate the password instead of supplying one
    #[arg(short = 'g', long)]
    pub generate: bool,

    /// Copy the stored password to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(&self, vault: &Vault, settings: &AppSettings, quiet: bool) -> CliResult<()> {
        let email = self
            .email
            .clone()
            .unwrap_or_else(|| settings.default_email.clone());

        let (password, generated) = match &self.password {
            Some(p) => (p.clone(), false),
            None if self.generate => (generate_password(), true),
            None => {
                return Err(CliError::Other(
                    "no password given; pass --password or --generate".to_string(),
                ))
            }
        };

        vault.save(&self.website, &email, &password)?;

        if !quiet {
            output::print_success(&format!("Saved credentials for {}", self.website));
        }
        if generated && !quiet {
            output::print_info(&format!("Generated password: {}", password));
        }

        if self.copy {
            match clipboard::copy(&password) {
                Ok(()) => {
                    if !quiet {
                        output::print_info("Password copied to clipboard");
                    }
                }
                Err(e) => output::print_warning(&e.to_string()),
            }
        }

        Ok(())
    }
}
