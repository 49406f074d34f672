//! Alba Browse - Music Library Browsing Core
//!
//! The client-side core of the alba music library browser: the sort/filter
//! engine behind every list, the disclosure panel state machine used by
//! drawers and quick menus, and the list view controllers that own the
//! ephemeral sort/search state. Rendering stays with the host; the core
//! yields declarative frames and never touches a display surface.

pub mod config;
pub mod error;
pub mod library;
pub mod ui;

// Re-export key types for convenience
pub use {
    config::{BrowserSettings, SettingsError, SettingsManager},
    error::{LibraryError, ResultExt, UiError},
    library::{Album, Artist, Catalog, FieldPath, Record, sort_filter},
    ui::{
        AlbumListView, ArtistListView, DisclosurePanel, InteractionHub, ListFrame,
        ListViewController, OrderOption, Sidebar, ViewState,
    },
};
