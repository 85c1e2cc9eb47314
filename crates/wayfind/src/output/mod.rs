//! Output formatting for CLI commands.
//!
//! This module renders every query result in both human-readable text and
//! JSON for programmatic use. The graph core only returns values; all
//! message wording lives here.

pub mod color;

use color::{bold, error, info, missing_icon, ok_icon};
use serde::Serialize;
use std::env;
use std::io::{self, Write};
use wayfind_graph::{Distance, VertexId};

// ============================================================================
// Output Configuration
// ============================================================================

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 80;

/// Configuration for output formatting.
///
/// Holds the settings that control how output is formatted: content width
/// for wrapping, ASCII fallback mode, and color output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for text wrapping.
    pub max_width: usize,
    /// Whether to use ASCII-only icons instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    pub fn new(max_width: usize, use_ascii: bool, use_colors: bool) -> Self {
        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `WAYFIND_MAX_WIDTH`: Maximum content width (default: 80)
    /// - `WAYFIND_ASCII`: Set to "1" or "true" for ASCII-only icons
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables)
    /// - `WAYFIND_COLOR`: Set to "0" or "false" to disable colors
    pub fn from_env() -> Self {
        let max_width = match env::var("WAYFIND_MAX_WIDTH") {
            Ok(s) if !s.is_empty() => match s.parse() {
                Ok(width) => width,
                Err(_) => {
                    tracing::warn!(
                        env_var = "WAYFIND_MAX_WIDTH",
                        value = %s,
                        default = DEFAULT_MAX_CONTENT_WIDTH,
                        "Invalid value, using default"
                    );
                    DEFAULT_MAX_CONTENT_WIDTH
                }
            },
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        let use_ascii = match env::var("WAYFIND_ASCII") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "WAYFIND_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        // Respect NO_COLOR standard (https://no-color.org/)
        // Also support WAYFIND_COLOR for explicit control
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("WAYFIND_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH as usize)
}

/// Wrap text to the given width, keeping a small floor so pathological
/// terminal sizes never produce one-character columns.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(20))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print a serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(handle, "{json}")
}

/// Print a shortest-route result.
///
/// `path` and `distance` are both `None` exactly when the core found no
/// route; a found route prints as `A -> B -> C` plus its total distance.
pub fn print_route(
    from: &str,
    to: &str,
    path: Option<&[VertexId]>,
    distance: Option<Distance>,
    mode: OutputMode,
) -> io::Result<()> {
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Json => {
            let value = match (path, distance) {
                (Some(path), Some(km)) => serde_json::json!({
                    "from": from,
                    "to": to,
                    "found": true,
                    "path": path.iter().map(VertexId::as_str).collect::<Vec<_>>(),
                    "distance_km": km,
                }),
                _ => serde_json::json!({
                    "from": from,
                    "to": to,
                    "found": false,
                }),
            };
            print_json(&value)
        }
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();

            let Some(path) = path else {
                let message = format!("No path found from {from} to {to}");
                return writeln!(handle, "{}", error(&message, &config));
            };

            let joined = path
                .iter()
                .map(VertexId::as_str)
                .collect::<Vec<_>>()
                .join(" -> ");
            let line = format!("Shortest path from {from} to {to}: {joined}");
            let width = get_terminal_width().min(config.max_width);
            for wrapped in wrap_text(&line, width) {
                writeln!(handle, "{wrapped}")?;
            }

            if let Some(km) = distance {
                writeln!(
                    handle,
                    "Total distance: {} km",
                    bold(&km.to_string(), &config)
                )?;
            }
            Ok(())
        }
    }
}

/// Print the result of an edge-existence check.
pub fn print_edge_check(
    from: &str,
    to: &str,
    weight: Option<Distance>,
    mode: OutputMode,
) -> io::Result<()> {
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Json => {
            let value = match weight {
                Some(km) => serde_json::json!({
                    "from": from,
                    "to": to,
                    "exists": true,
                    "weight_km": km,
                }),
                None => serde_json::json!({
                    "from": from,
                    "to": to,
                    "exists": false,
                }),
            };
            print_json(&value)
        }
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            match weight {
                Some(km) => writeln!(
                    handle,
                    "{} Edge exists: {} <-> {} ({} km)",
                    ok_icon(&config),
                    info(from, &config),
                    info(to, &config),
                    km
                ),
                None => writeln!(
                    handle,
                    "{} Edge does not exist: {} <-> {}",
                    missing_icon(&config),
                    info(from, &config),
                    info(to, &config)
                ),
            }
        }
    }
}

/// Print the vertex listing.
pub fn print_vertices(vertices: &[VertexId], mode: OutputMode) -> io::Result<()> {
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Json => {
            let value = serde_json::json!({
                "count": vertices.len(),
                "vertices": vertices.iter().map(VertexId::as_str).collect::<Vec<_>>(),
            });
            print_json(&value)
        }
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();

            if vertices.is_empty() {
                return writeln!(handle, "No vertices found.");
            }

            writeln!(handle, "Vertices in the graph:")?;
            for vertex in vertices {
                writeln!(handle, "  {}", info(vertex.as_str(), &config))?;
            }
            Ok(())
        }
    }
}

/// Print confirmation of an edge insertion.
pub fn print_edge_added(
    from: &str,
    to: &str,
    km: Distance,
    mode: OutputMode,
) -> io::Result<()> {
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "action": "add",
            "from": from,
            "to": to,
            "weight_km": km,
        })),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(
                handle,
                "{} Edge added: {} <-> {} ({} km)",
                ok_icon(&config),
                info(from, &config),
                info(to, &config),
                km
            )
        }
    }
}

/// Print confirmation of a bulk clear.
pub fn print_cleared(mode: OutputMode) -> io::Result<()> {
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({ "action": "clear" })),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{} All edges cleared", ok_icon(&config))
        }
    }
}
