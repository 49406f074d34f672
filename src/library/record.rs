//! Field path resolution over library records.
//!
//! Records exchanged with the library API are arbitrarily nested key/value
//! mappings. This module provides the `FieldPath` type used to navigate into
//! them, both for ordering (`order by: artist.name`) and for search filtering.

use std::fmt::{Display, Formatter, Result as FmtResult};

use {
    serde::{Deserialize, Serialize},
    serde_json::Value,
};

/// A library record: an arbitrarily nested key/value mapping as returned
/// by the library API.
///
/// Records are supplied by the data layer and treated as immutable by the
/// browsing core. Fields may be of any JSON type; only strings and numbers
/// participate in ordering (see the sort/filter engine).
pub type Record = Value;

/// Dotted sequence of keys used to navigate into a nested record.
///
/// `"artist.name"` parses into the segments `["artist", "name"]`. Paths are
/// cheap to clone and hash, and serialize as their dotted form so they can
/// live directly in settings files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FieldPath {
    /// Ordered traversal segments, outermost key first.
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses a dotted path string into a `FieldPath`.
    ///
    /// Empty segments produced by stray dots are discarded, so `"a..b"`
    /// resolves the same way as `"a.b"`.
    ///
    /// # Arguments
    ///
    /// * `dotted` - Path in dotted notation, e.g. `"artist.name"`.
    ///
    /// # Returns
    ///
    /// The parsed `FieldPath`.
    #[must_use]
    pub fn parse(dotted: &str) -> Self {
        Self {
            segments: dotted
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Gets the traversal segments, outermost key first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolves this path against a record.
    ///
    /// Traverses the record segment by segment. If any intermediate value is
    /// absent or not a mapping, resolution stops and `None` is returned; this
    /// function never panics. An empty path resolves to the record itself.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to navigate into.
    ///
    /// # Returns
    ///
    /// The resolved value, or `None` if the path does not fully resolve.
    #[must_use]
    pub fn project<'a>(&self, record: &'a Record) -> Option<&'a Value> {
        let mut current = record;
        for segment in &self.segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for FieldPath {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

impl From<String> for FieldPath {
    fn from(dotted: String) -> Self {
        Self::parse(&dotted)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::library::record::FieldPath;

    #[test]
    fn test_parse_and_display_round_trip() {
        let path = FieldPath::parse("artist.name");
        assert_eq!(path.segments(), ["artist", "name"]);
        assert_eq!(path.to_string(), "artist.name");
    }

    #[test]
    fn test_parse_discards_empty_segments() {
        let path = FieldPath::parse("artist..name");
        assert_eq!(path.segments(), ["artist", "name"]);
    }

    #[test]
    fn test_project_top_level_field() {
        let record = json!({"id": 1, "name": "Tool"});
        let value = FieldPath::parse("name").project(&record);
        assert_eq!(value, Some(&json!("Tool")));
    }

    #[test]
    fn test_project_nested_field() {
        let record = json!({"title": "Lateralus", "artist": {"name": "Tool"}});
        let value = FieldPath::parse("artist.name").project(&record);
        assert_eq!(value, Some(&json!("Tool")));
    }

    #[test]
    fn test_project_missing_segment_is_none() {
        let record = json!({"title": "Lateralus"});
        assert_eq!(FieldPath::parse("artist.name").project(&record), None);
    }

    #[test]
    fn test_project_through_non_mapping_is_none() {
        // "title" resolves to a string, so the traversal cannot continue.
        let record = json!({"title": "Lateralus"});
        assert_eq!(FieldPath::parse("title.length").project(&record), None);
    }

    #[test]
    fn test_project_empty_path_yields_record() {
        let record = json!({"id": 1});
        assert_eq!(FieldPath::parse("").project(&record), Some(&record));
    }

    #[test]
    fn test_serde_as_dotted_string() {
        let path: FieldPath = serde_json::from_str("\"artist.name\"").expect("valid path json");
        assert_eq!(path, FieldPath::parse("artist.name"));
        let encoded = serde_json::to_string(&path).expect("path serializes");
        assert_eq!(encoded, "\"artist.name\"");
    }
}
