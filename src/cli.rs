//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **browse**: Interactive catalog navigator (default)
//! - **build**: Scan the content root and write the manifest
//! - **search**: Exact base-name search over the catalog
//! - **tree**: Print the catalog as an indented tree
//! - **config**: Show or create the configuration file
//!
//! Global `-q`/`-v` adjust log verbosity and `--no-color` disables ANSI
//! output on both stdout and stderr.

use clap::{Parser, Subcommand};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "dbcat")]
#[command(about = "Build and browse tag-annotated content catalogs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output and log only errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Navigate the catalog interactively (default)
    #[command(visible_alias = "b")]
    Browse,

    /// Scan the content root and write the manifest
    Build,

    /// Find files whose name, without extension, matches exactly
    #[command(visible_alias = "s")]
    Search {
        /// Base name to look for (case-insensitive)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Access code phrase (code1..code6) to include hidden files
        #[arg(long = "code", value_name = "PHRASE")]
        code: Option<String>,
    },

    /// Print the catalog as a tree
    Tree {
        /// Access code phrase (code1..code6) to include hidden entries
        #[arg(long = "code", value_name = "PHRASE")]
        code: Option<String>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Write a user config file if none exists
    Init {
        /// Prompt for each setting instead of writing defaults
        #[arg(short = 'i', long = "interactive")]
        interactive: bool,

        /// Overwrite an existing file
        #[arg(long = "force")]
        force: bool,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dbcat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_command_is_browse() {
        let cli = parse(&[]);
        assert_eq!(cli.get_command(), Commands::Browse);
        assert_eq!(parse(&["b"]).get_command(), Commands::Browse);
    }

    #[test]
    fn test_build_takes_no_arguments() {
        assert_eq!(parse(&["build"]).get_command(), Commands::Build);
        assert!(Cli::try_parse_from(["dbcat", "build", "somewhere"]).is_err());
    }

    #[test]
    fn test_search_with_code() {
        let cli = parse(&["search", "log", "--code", "code2"]);
        assert_eq!(
            cli.get_command(),
            Commands::Search {
                query: "log".into(),
                code: Some("code2".into()),
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["tree", "-v", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_config_init_flags() {
        let cli = parse(&["config", "init", "-i"]);
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Init {
                    interactive: true,
                    force: false,
                },
            }
        );
    }
}
