//! Error handling system using `thiserror` and `anyhow`.
//!
//! This module provides domain-specific error types for precise error
//! handling and operational error context propagation for the shell.

pub mod domain;
pub mod operational;

pub use {
    domain::{LibraryError, UiError},
    operational::ResultExt,
};
