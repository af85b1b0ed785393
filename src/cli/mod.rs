//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `passkeep generate` - Generate a random password
//! - `passkeep add <website>` - Save a credential
//! - `passkeep find <website>` - Look up a credential
//! - `passkeep list` - List stored websites

mod add;
mod find;
mod generate;

pub use add::AddCommand;
pub use find::FindCommand;
pub use generate::GenerateCommand;

use crate::error::CliResult;
use crate::store::Vault;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Passkeep - A minimal local credential manager.
///
/// Passkeep generates strong random passwords and stores
/// website/email/password records in a single local JSON file. Records
/// are looked up by website name.
#[derive(Parser, Debug)]
#[command(name = "passkeep")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A minimal local credential manager", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the credential backing file
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random password
    #[command(alias = "g")]
    Generate(GenerateCommand),

    /// Save a credential for a website
    #[command(alias = "a")]
    Add(AddCommand),

    /// Look up the credential stored for a website
    #[command(alias = "f")]
    Find(FindCommand),

    /// List stored websites
    #[command(alias = "l")]
    List(ListCommand),
}

/// List the websites with stored credentials.
#[derive(Parser, Debug)]
pub struct ListCommand {}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(&self, vault: &Vault) -> CliResult<()> {
        for website in vault.websites()? {
            println!("{}", website);
        }
        Ok(())
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}
