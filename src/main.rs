//! Passkeep binary entry point.
//!
//! Parses the CLI, loads settings, resolves the backing file, and
//! dispatches to the subcommand handlers.

use clap::Parser;
use passkeep::cli::{Cli, Commands};
use passkeep::config::AppSettings;
use passkeep::error::CliResult;
use passkeep::output;
use passkeep::store::Vault;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let settings = AppSettings::load()?;

    // Backing file precedence: --file flag, then settings override,
    // then the XDG data dir default.
    let vault = match (&cli.file, &settings.credentials_file) {
        (Some(path), _) => Vault::new(path),
        (None, Some(path)) => Vault::new(path),
        (None, None) => Vault::open_default(),
    };

    match &cli.command {
        Commands::Generate(cmd) => cmd.execute(&settings, cli.quiet),
        Commands::Add(cmd) => cmd.execute(&vault, &settings, cli.quiet),
        Commands::Find(cmd) => cmd.execute(&vault, cli.quiet),
        Commands::List(cmd) => cmd.execute(&vault),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "passkeep=debug" } else { "passkeep=warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
}
