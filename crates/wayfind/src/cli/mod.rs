//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for wayfind using clap's
//! derive API. With a subcommand, wayfind answers one query against the
//! seeded graph and exits; with none, it starts the interactive session.
//!
//! # Commands
//!
//! - `route`: Find the shortest route between two locations
//! - `check`: Check whether an edge exists between two locations
//! - `vertices`: List every location in the graph
//! - (no subcommand): Interactive session with `add` and `clear` available
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--no-seed`: Start with an empty graph
//!
//! # Example
//!
//! ```bash
//! wayfind route Delhi Bangalore
//! wayfind --json vertices
//! wayfind --no-seed
//! ```

mod args;
mod execute;
mod session;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};

// Re-export argument structs
pub use args::{CheckArgs, RouteArgs};

// Re-export the session parser for library use
pub use session::{parse_command, SessionCommand};

// Re-export validators for external use
pub use validators::{validate_vertex, validate_weight};

/// Wayfind - shortest routes over a weighted location graph
///
/// Maintains an in-memory, undirected graph of named locations and answers
/// shortest-path queries between them. A built-in route network is installed
/// at startup unless --no-seed is given; the graph lives only for the
/// duration of the run.
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Start with an empty graph instead of the built-in route network
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Find the shortest route between two locations
    ///
    /// Prints the path as "A -> B -> C" with its total distance, or a
    /// "no path" message when the locations are not connected.
    Route(RouteArgs),

    /// Check whether an edge exists between two locations
    ///
    /// Reports the stored distance when the edge is present.
    Check(CheckArgs),

    /// List every location in the graph
    ///
    /// Locations are listed in lexicographic order. A location exists once
    /// it appears as an endpoint of at least one edge.
    Vertices,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let mut app = if self.no_seed {
            App::empty()
        } else {
            App::with_seed()
        };

        match &self.command {
            Some(Commands::Route(args)) => execute::execute_route(&app, args, output_mode),
            Some(Commands::Check(args)) => execute::execute_check(&app, args, output_mode),
            Some(Commands::Vertices) => execute::execute_vertices(&app, output_mode),
            None => execute::execute_session(&mut app, output_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== CLI Parsing Tests ==========

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["wayfind"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert!(!cli.no_seed);
    }

    #[test]
    fn test_parse_global_json_flag() {
        let cli = Cli::try_parse_from(["wayfind", "--json", "vertices"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Vertices)));
    }

    #[test]
    fn test_parse_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["wayfind", "vertices", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_parse_no_seed_flag() {
        let cli = Cli::try_parse_from(["wayfind", "--no-seed"]).unwrap();
        assert!(cli.no_seed);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_route() {
        let cli = Cli::try_parse_from(["wayfind", "route", "Delhi", "Bangalore"]).unwrap();
        match cli.command {
            Some(Commands::Route(args)) => {
                assert_eq!(args.from, "Delhi");
                assert_eq!(args.to, "Bangalore");
            }
            _ => panic!("Expected Route command"),
        }
    }

    #[test]
    fn test_parse_route_trims_arguments() {
        let cli = Cli::try_parse_from(["wayfind", "route", " Delhi ", "Bangalore"]).unwrap();
        match cli.command {
            Some(Commands::Route(args)) => assert_eq!(args.from, "Delhi"),
            _ => panic!("Expected Route command"),
        }
    }

    #[test]
    fn test_parse_route_allows_multi_word_names() {
        let cli = Cli::try_parse_from(["wayfind", "route", "New Delhi", "Navi Mumbai"]).unwrap();
        match cli.command {
            Some(Commands::Route(args)) => {
                assert_eq!(args.from, "New Delhi");
                assert_eq!(args.to, "Navi Mumbai");
            }
            _ => panic!("Expected Route command"),
        }
    }

    #[test]
    fn test_parse_route_rejects_empty_name() {
        let result = Cli::try_parse_from(["wayfind", "route", "", "Bangalore"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_route_missing_argument() {
        let result = Cli::try_parse_from(["wayfind", "route", "Delhi"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["wayfind", "check", "Delhi", "Mumbai"]).unwrap();
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.from, "Delhi");
                assert_eq!(args.to, "Mumbai");
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_parse_vertices() {
        let cli = Cli::try_parse_from(["wayfind", "vertices"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Vertices)));
    }

    #[test]
    fn test_parse_unknown_command() {
        let result = Cli::try_parse_from(["wayfind", "teleport"]);
        assert!(result.is_err());
    }
}
