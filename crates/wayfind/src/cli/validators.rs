//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute and by the
//! interactive session parser. The graph core accepts any strings and any
//! weight, so rejecting empty names and zero distances here is what keeps
//! unusual values out of the graph.

use wayfind_graph::Distance;

/// Validate a location name.
///
/// Names must be non-empty after trimming and printable on one line.
/// Case is preserved: `delhi` and `Delhi` are different locations.
pub fn validate_vertex(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Location name cannot be empty".to_string());
    }

    if s.contains('\n') || s.contains('\r') {
        return Err("Location name cannot contain newline characters".to_string());
    }

    // Control characters (0x00-0x1F except tab, and 0x7F-0x9F) cause display
    // issues and are likely paste accidents.
    if let Some(pos) = s.chars().position(|c| {
        let code = c as u32;
        (code < 0x20 && code != 0x09) || (0x7F..=0x9F).contains(&code)
    }) {
        return Err(format!(
            "Location name contains invalid control character at position {}",
            pos
        ));
    }

    Ok(s.to_string())
}

/// Validate a distance in kilometres.
///
/// Must parse as a whole number and be greater than zero.
pub fn validate_weight(s: &str) -> Result<Distance, String> {
    let s = s.trim();

    let km: Distance = s
        .parse()
        .map_err(|_| format!("Expected a whole number of kilometres, got '{}'", s))?;

    if km == 0 {
        return Err("Distance must be greater than zero".to_string());
    }

    Ok(km)
}
