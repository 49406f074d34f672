//! Ordering and filtering for library list views.
//!
//! This module implements the engine behind every browsable list: records are
//! ordered by a user-selectable, possibly nested field path and narrowed by a
//! free-text search term. Collections here are library-sized UI lists, so the
//! result is recomputed on every call rather than indexed or cached.

use std::cmp::Ordering;

use serde_json::Value;

use crate::library::record::{FieldPath, Record};

/// Comparable key projected out of a record for ordering.
///
/// Only strings and numbers take part in ordering. String comparison is
/// lowercase-normalized so that `"alice in chains"` and `"Alice in Chains"`
/// order identically; numbers compare numerically. A record whose projection
/// is absent or of any other type has no key and orders after all keyed
/// records, equal to its fellow keyless records.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    /// Numeric field, e.g. an album year or a record id.
    Number(f64),
    /// Textual field, stored lowercase.
    Text(String),
}

impl SortKey {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            // Mixed-type columns order all numbers before all text.
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

/// Orders and filters records for display.
///
/// Produces a new collection; the caller-owned input is borrowed and never
/// reordered in place. The copy is first sorted ascending by `sort_path`,
/// then narrowed to records whose `search_path` projection contains
/// `search_term` as a case-insensitive substring. An empty term matches
/// every record, including records on which `search_path` does not resolve.
///
/// The sort is stable: records with equal keys keep their input order.
/// Missing or non-comparable fields never fail; they follow the ordering
/// policy of [`SortKey`].
///
/// # Arguments
///
/// * `records` - Records to display, in data-layer order.
/// * `sort_path` - Field path to order by.
/// * `search_path` - Field path the search term is matched against.
/// * `search_term` - Free-text filter; empty disables filtering.
///
/// # Returns
///
/// The ordered, filtered records.
#[must_use]
pub fn sort_filter(
    records: &[Record],
    sort_path: &FieldPath,
    search_path: &FieldPath,
    search_term: &str,
) -> Vec<Record> {
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| compare_by_path(a, b, sort_path));

    let needle = search_term.to_lowercase();
    ordered.retain(|record| matches_search(record, search_path, &needle));
    ordered
}

/// Compares two records by their projections under `path`.
fn compare_by_path(a: &Record, b: &Record, path: &FieldPath) -> Ordering {
    match (sort_key(a, path), sort_key(b, path)) {
        (Some(key_a), Some(key_b)) => key_a.compare(&key_b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sort_key(record: &Record, path: &FieldPath) -> Option<SortKey> {
    match path.project(record)? {
        Value::String(text) => Some(SortKey::Text(text.to_lowercase())),
        Value::Number(number) => number.as_f64().map(SortKey::Number),
        _ => None,
    }
}

/// Checks whether a record passes the search filter.
///
/// `needle` must already be lowercased. A record whose search projection is
/// absent or not a string only matches the empty needle.
fn matches_search(record: &Record, search_path: &FieldPath, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    search_path
        .project(record)
        .and_then(Value::as_str)
        .is_some_and(|text| text.to_lowercase().contains(needle))
}
