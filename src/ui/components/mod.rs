//! Reusable UI components of the browsing core.


pub mod disclosure;
pub mod list_header;
pub mod sidebar;

pub use {
    disclosure::{DisclosurePanel, DisclosurePanelBuilder, PanelCallback},
    list_header::ListHeader,
    sidebar::{NavEntry, Sidebar, SidebarFrame},
};
