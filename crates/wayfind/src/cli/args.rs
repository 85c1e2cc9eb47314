//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;

use super::validators::validate_vertex;

/// Arguments for the `route` command
#[derive(Parser, Debug, Clone)]
pub struct RouteArgs {
    /// Starting location
    #[arg(value_parser = validate_vertex)]
    pub from: String,

    /// Destination location
    #[arg(value_parser = validate_vertex)]
    pub to: String,
}

/// Arguments for the `check` command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// First endpoint
    #[arg(value_parser = validate_vertex)]
    pub from: String,

    /// Second endpoint
    #[arg(value_parser = validate_vertex)]
    pub to: String,
}
