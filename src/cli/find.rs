//! Find subcommand implementation.
//!
//! Handles the `passkeep find <website>` command for credential lookup.

use crate::cli::OutputFormat;
use crate::clipboard;
use crate::error::CliResult;
use crate::output;
use crate::store::Vault;
use clap::Parser;

/// Look up the credential stored for a website.
#[derive(Parser, Debug)]
pub struct FindCommand {
    /// Website to look up
    #[arg(value_name = "WEBSITE")]
    pub website: String,

    /// Output format for the credential
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Copy the password to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl FindCommand {
    /// Execute the find command.
    pub fn execute(&self, vault: &Vault, quiet: bool) -> CliResult<()> {
        let credential = vault.find(&self.website)?;

        if self.copy {
            match clipboard::copy(&credential.password) {
                Ok(()) => {
                    if !quiet {
                        output::print_info("Password copied to clipboard");
                    }
                }
                Err(e) => output::print_warning(&e.to_string()),
            }
        }

        output::format_credential(&self.website, &credential, self.output)?;
        Ok(())
    }
}
