//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success:  green  (edges added, graph cleared)
//!   - Error:    red    (no path, missing edges)
//!   - Info:     cyan   (location names)
//!   - Muted:    dimmed (connectors, counts)
//!   - Emphasis: bold   (distance totals)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Apply bold emphasis to text.
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Icon for positive results, with ASCII fallback support.
pub(crate) fn ok_icon(config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "+" } else { "✓" };
    success(icon, config)
}

/// Icon for negative results, with ASCII fallback support.
pub(crate) fn missing_icon(config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "x" } else { "✗" };
    error(icon, config)
}
