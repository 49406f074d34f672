//! User preferences and settings management.
//!
//! This module provides user preference management with XDG Base Directory
//! compliance. Only durable preferences live here; ephemeral view state is
//! owned by the views themselves.

pub mod settings;

pub use settings::{BrowserSettings, SettingsError, SettingsManager, get_config_path};
