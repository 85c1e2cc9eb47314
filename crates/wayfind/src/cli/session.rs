//! The interactive session.
//!
//! With no subcommand, wayfind seeds the graph and reads commands from
//! stdin until `quit` or end of input. The prompt and error messages go to
//! stderr; query results go to stdout, so piped scripts see clean output.
//!
//! Session commands:
//!
//! ```text
//! route <from> <to>       shortest route and total distance
//! add <from> <to> <km>    insert or overwrite an edge
//! check <from> <to>       whether an edge exists
//! vertices                list every location
//! clear                   remove every edge
//! help                    show the command list
//! quit                    end the session
//! ```

use anyhow::Result;
use std::io::{self, BufRead, Write};
use wayfind_graph::Distance;

use super::args::{CheckArgs, RouteArgs};
use super::execute;
use super::validators::{validate_vertex, validate_weight};
use crate::app::App;
use crate::error::Error;
use crate::output::{self, OutputMode};

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Find the shortest route between two locations.
    Route {
        /// Starting location.
        from: String,
        /// Destination location.
        to: String,
    },
    /// Insert or overwrite an edge.
    Add {
        /// First endpoint.
        from: String,
        /// Second endpoint.
        to: String,
        /// Distance in kilometres.
        km: Distance,
    },
    /// Check whether an edge exists.
    Check {
        /// First endpoint.
        from: String,
        /// Second endpoint.
        to: String,
    },
    /// List every location.
    Vertices,
    /// Remove every edge.
    Clear,
    /// Show the command list.
    Help,
    /// End the session.
    Quit,
}

/// Parse one input line into a session command.
///
/// Blank lines parse to `Ok(None)`. Keywords are case-insensitive;
/// location names keep their case. Names are single whitespace-delimited
/// tokens here; multi-word names are only reachable through the one-shot
/// CLI, where the shell quotes them.
pub fn parse_command(line: &str) -> crate::error::Result<Option<SessionCommand>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "route" | "path" => {
            let [from, to] = require(rest, "route <from> <to>")?;
            SessionCommand::Route {
                from: vertex(from)?,
                to: vertex(to)?,
            }
        }
        "add" => {
            let [from, to, km] = require(rest, "add <from> <to> <km>")?;
            SessionCommand::Add {
                from: vertex(from)?,
                to: vertex(to)?,
                km: validate_weight(km).map_err(Error::InvalidWeight)?,
            }
        }
        "check" => {
            let [from, to] = require(rest, "check <from> <to>")?;
            SessionCommand::Check {
                from: vertex(from)?,
                to: vertex(to)?,
            }
        }
        "vertices" | "list" => {
            let [] = require(rest, "vertices")?;
            SessionCommand::Vertices
        }
        "clear" => {
            let [] = require(rest, "clear")?;
            SessionCommand::Clear
        }
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(Error::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

/// Exactly `N` arguments, or a usage error.
fn require<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> crate::error::Result<[&'a str; N]> {
    <[&'a str; N]>::try_from(args).map_err(|_| Error::Usage(usage))
}

fn vertex(s: &str) -> crate::error::Result<String> {
    validate_vertex(s).map_err(Error::InvalidVertex)
}

/// Run the session loop over the given input until `quit` or EOF.
///
/// Bad input is reported to stderr and the loop continues; only I/O
/// failures end the session early.
pub fn run<R: BufRead>(app: &mut App, mut input: R, mode: OutputMode) -> Result<()> {
    if mode == OutputMode::Text {
        eprintln!("wayfind interactive session. Type 'help' for commands, 'quit' to leave.");
    }

    let mut line = String::new();
    loop {
        eprint!("wayfind> ");
        io::stderr().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => dispatch(app, command, mode)?,
            Err(err) => eprintln!("{err}"),
        }
    }

    Ok(())
}

fn dispatch(app: &mut App, command: SessionCommand, mode: OutputMode) -> Result<()> {
    match command {
        SessionCommand::Route { from, to } => {
            execute::execute_route(app, &RouteArgs { from, to }, mode)?;
        }
        SessionCommand::Check { from, to } => {
            execute::execute_check(app, &CheckArgs { from, to }, mode)?;
        }
        SessionCommand::Vertices => {
            execute::execute_vertices(app, mode)?;
        }
        SessionCommand::Add { from, to, km } => {
            app.graph_mut().add_edge(from.as_str(), to.as_str(), km);
            output::print_edge_added(&from, &to, km, mode)?;
        }
        SessionCommand::Clear => {
            app.graph_mut().clear();
            output::print_cleared(mode)?;
        }
        SessionCommand::Help => print_help(),
        // Handled by the session loop before dispatch.
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  route <from> <to>     Shortest route and total distance");
    println!("  add <from> <to> <km>  Insert or overwrite an edge");
    println!("  check <from> <to>     Whether an edge exists");
    println!("  vertices              List every location");
    println!("  clear                 Remove every edge");
    println!("  help                  Show this list");
    println!("  quit                  End the session");
    println!();
    println!("Location names are single words here and case-sensitive.");
}
