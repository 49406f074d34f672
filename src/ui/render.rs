//! Declarative render boundary between the browsing core and the host.
//!
//! The core never touches a display surface. Each interaction leaves the
//! views holding fresh frame descriptions — plain data the host renderer
//! (web shell, toolkit, or the demo's text renderer) turns into pixels.

use std::sync::Arc;

use crate::library::record::{FieldPath, Record};

/// Capability: renders one record into its display form.
///
/// Supplied by the caller per view; the core invokes it once per visible
/// record and is agnostic to anything beyond the produced text.
pub type ItemDisplay = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// Capability: receives the view title when a view is mounted.
///
/// Stands in for the browser's `document.title`; the host decides what a
/// "window title" means, the view only reports it.
pub type TitleHook = Arc<dyn Fn(&str) + Send + Sync>;

/// One sortable field offered by the order selector.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderOption {
    /// Field path the option orders by.
    pub value: FieldPath,
    /// Human-readable label.
    pub label: String,
}

impl OrderOption {
    /// Builds an option from a dotted path and a label.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: FieldPath::parse(value),
            label: label.to_string(),
        }
    }
}

/// Declarative description of the list header controls.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFrame {
    /// Currently selected ordering.
    pub order_by: FieldPath,
    /// Options offered by the order selector.
    pub order_options: Vec<OrderOption>,
    /// Current search box text.
    pub search_value: String,
    /// Whether the search drawer is unfolded.
    pub search_open: bool,
}

/// Declarative description of one fully derived list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFrame {
    /// View title ("Artists", "Albums").
    pub title: String,
    /// Header controls.
    pub header: HeaderFrame,
    /// Display form of each visible record, in final order.
    pub items: Vec<String>,
}
