//! Operational error context propagation with `anyhow`.
//!
//! This module provides extension traits for enhancing error context on
//! the way up to the shell, plus the logging fallback used when the demo
//! shell degrades gracefully instead of aborting.

use std::{error::Error as StdError, fmt::Display};

use {
    anyhow::{Context, Result as AnyhowResult},
    tracing::warn,
};

/// Extension trait for enhanced error context.
pub trait ResultExt<T, E> {
    /// Adds context to an error with a static string.
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;

    /// Adds context to an error with a formatted string.
    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;

    /// Logs the error at warn level and discards it, for call sites that
    /// have a sensible fallback.
    fn or_warn(self, context: &'static str) -> Option<T>
    where
        E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(context)
    }

    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(format.to_string())
    }

    fn or_warn(self, context: &'static str) -> Option<T>
    where
        E: Display,
    {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(context = context, error = %error, "Recoverable error");
                None
            }
        }
    }
}
