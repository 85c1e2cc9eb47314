//! Vertex identifiers.
//!
//! Vertices are named locations. They exist implicitly: a name becomes a
//! vertex the first time it appears as an edge endpoint, and there is no
//! separate vertex-creation operation.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a location in the route graph.
///
/// Names are case-sensitive and compared byte-wise, so `"delhi"` and
/// `"Delhi"` are distinct vertices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub String);

impl VertexId {
    /// Create a new vertex identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// Allows `&str` lookups in maps keyed by `VertexId` without allocating.
impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        let v = VertexId::new("Delhi");
        assert_eq!(v.to_string(), "Delhi");
        assert_eq!(v.as_str(), "Delhi");
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(VertexId::new("delhi"), VertexId::new("Delhi"));
    }

    #[test]
    fn test_ordering_matches_str() {
        let mut names = vec![
            VertexId::new("Mumbai"),
            VertexId::new("Chennai"),
            VertexId::new("Bangalore"),
        ];
        names.sort();
        assert_eq!(names[0].as_str(), "Bangalore");
        assert_eq!(names[2].as_str(), "Mumbai");
    }
}
