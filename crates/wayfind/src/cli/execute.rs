//! Command execution logic.
//!
//! Each function takes the [`App`](crate::app::App) context, invokes exactly
//! one graph query, and renders the return value. The interactive session
//! reuses these for the commands it shares with the one-shot CLI.

use anyhow::Result;
use std::io;

use super::args::{CheckArgs, RouteArgs};
use super::session;
use crate::app::App;
use crate::output::{self, OutputMode};

/// Execute the `route` command.
pub fn execute_route(app: &App, args: &RouteArgs, output_mode: OutputMode) -> Result<()> {
    let graph = app.graph();
    let path = graph.shortest_path(&args.from, &args.to);
    let distance = graph.path_distance(&args.from, &args.to);

    output::print_route(&args.from, &args.to, path.as_deref(), distance, output_mode)?;
    Ok(())
}

/// Execute the `check` command.
pub fn execute_check(app: &App, args: &CheckArgs, output_mode: OutputMode) -> Result<()> {
    let graph = app.graph();
    let exists = graph.edge_exists(&args.from, &args.to);
    let weight = exists
        .then(|| graph.edge_weight(&args.from, &args.to))
        .flatten();

    output::print_edge_check(&args.from, &args.to, weight, output_mode)?;
    Ok(())
}

/// Execute the `vertices` command.
pub fn execute_vertices(app: &App, output_mode: OutputMode) -> Result<()> {
    output::print_vertices(&app.graph().vertices(), output_mode)?;
    Ok(())
}

/// Execute the interactive session on stdin.
pub fn execute_session(app: &mut App, output_mode: OutputMode) -> Result<()> {
    let stdin = io::stdin();
    session::run(app, stdin.lock(), output_mode)
}
