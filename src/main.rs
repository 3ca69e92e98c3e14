//! dbcat CLI entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog (default command)
//! dbcat
//! dbcat browse
//!
//! # Write db-manifest.json for the configured root
//! dbcat build
//!
//! # Exact file-name search, optionally with an access code
//! dbcat search day1
//! dbcat search secret --code code3
//!
//! # Print the whole catalog
//! dbcat tree
//!
//! # Configuration
//! dbcat config show
//! dbcat config init -i
//! ```
//!
//! Configuration is read from the user config directory
//! (`~/.config/dbcat/config.toml` on Linux), then `./dbcat.toml`, then
//! `DBCAT_*` environment variables.

use dbcat::{
    DbcatError,
    cli::{Cli, Commands},
    commands,
    config::DbcatConfig,
    logging::{self, Verbosity},
    output::{OutputWriter, StdoutWriter},
};
use std::process::ExitCode;
use tracing::debug;

fn run(cli: &Cli, out: &dyn OutputWriter) -> Result<(), DbcatError> {
    let config = DbcatConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    debug!(root = %config.root.display(), manifest = %config.manifest.display(), "config loaded");

    match cli.get_command() {
        Commands::Browse => commands::browse(&config, out),
        Commands::Build => commands::build(&config, out, quiet).map(|_| ()),
        Commands::Search { query, code } => {
            commands::search(&config, &query, code.as_deref(), out).map(|_| ())
        }
        Commands::Tree { code } => commands::tree(&config, code.as_deref(), out),
        Commands::Config { command } => commands::config(&config, &command, out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet), cli.no_color);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let out = StdoutWriter::new();
    match run(&cli, &out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
