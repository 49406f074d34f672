//! Browsing user interface core.
//!
//! This module holds everything between the data layer and the host
//! renderer: the disclosure components, the list view controllers, the
//! declarative frame types, and the outside-interaction capability.

pub mod components;
pub mod interaction;
pub mod render;
pub mod views;

pub use {
    components::{DisclosurePanel, ListHeader, Sidebar},
    interaction::{InteractionHub, OutsideInteractionSource, OutsideSubscription, RegionId},
    render::{HeaderFrame, ItemDisplay, ListFrame, OrderOption, TitleHook},
    views::{AlbumListView, ArtistListView, ListViewController, ListViewEvent, ViewState},
};
