//! Music library browsing data layer.
//!
//! This module provides the data side of the browsing core: record and
//! field path types, the sort/filter engine behind every list view, the
//! domain models, and catalog loading.

pub mod catalog;
pub mod models;
pub mod record;
pub mod sort_filter;

pub use {
    catalog::{Catalog, CatalogError},
    models::{Album, Artist},
    record::{FieldPath, Record},
    sort_filter::sort_filter,
};
