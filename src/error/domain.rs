//! Domain-specific error types using `thiserror`.
//!
//! This module defines the main error enums for the two fallible areas of
//! the browsing core: data loading (catalog, settings) and view
//! configuration. The engines and state machines themselves are total and
//! never produce errors; a missing record field is a policy, not a failure.

use std::result::Result as StdResult;

use {anyhow::Error, thiserror::Error};

use crate::{config::settings::SettingsError, library::catalog::CatalogError};

/// Library data errors.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Catalog loading error.
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),
    /// Settings loading or persistence error.
    #[error("Settings error: {0}")]
    SettingsError(#[from] SettingsError),
}

/// UI-related errors.
#[derive(Error, Debug)]
pub enum UiError {
    /// A view was configured without a required capability. This is a
    /// programmer error surfaced at construction time, never at render time.
    #[error("Invalid view configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl UiError {
    /// Builds an `InvalidConfiguration` error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Operational error context propagation with `anyhow`.
///
/// This type is used for operational errors that need rich context
/// but don't require specific handling logic.
pub type Result<T> = StdResult<T, Error>;

#[cfg(test)]
mod tests {
    use std::io::{Error as IoError, ErrorKind};

    use crate::{
        error::domain::{LibraryError, UiError},
        library::catalog::CatalogError,
    };

    #[test]
    fn test_invalid_configuration_display() {
        let error = UiError::invalid_configuration("item display capability is required");
        assert_eq!(
            error.to_string(),
            "Invalid view configuration: item display capability is required"
        );
    }

    #[test]
    fn test_library_error_wraps_catalog_error() {
        let io = IoError::new(ErrorKind::NotFound, "no catalog");
        let error = LibraryError::from(CatalogError::from(io));
        assert_eq!(error.to_string(), "Catalog error: IO error: no catalog");
    }
}
