//! Wayfind CLI binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use wayfind::cli::Cli;

/// Main entry point for the wayfind CLI.
///
/// Everything here is synchronous: the graph is in-memory and every command
/// is a single request/response exchange on the main thread.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=wayfind=debug,wayfind_graph=trace wayfind
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wayfind=info,wayfind_graph=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting wayfind CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Wayfind CLI completed successfully");
    Ok(())
}
