//! Application navigation sidebar.
//!
//! The sidebar is the standalone use of the disclosure panel: a drawer of
//! navigation entries that (unless pinned by preference) folds away as
//! soon as the user interacts anywhere else.

use crate::ui::{
    components::disclosure::DisclosurePanel,
    interaction::{OutsideInteractionSource, RegionId},
};

/// One navigation entry in the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    /// Icon identifier understood by the host renderer.
    pub icon: String,
    /// Entry label.
    pub label: String,
    /// Route the entry navigates to.
    pub route: String,
    /// Secondary entries render in the sidebar footer.
    pub secondary: bool,
}

/// Declarative description of the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarFrame {
    /// Whether the drawer is unfolded.
    pub open: bool,
    /// Entries, primary first.
    pub entries: Vec<NavEntry>,
}

/// Navigation sidebar backed by a disclosure panel.
pub struct Sidebar {
    panel: DisclosurePanel,
    entries: Vec<NavEntry>,
}

impl Sidebar {
    /// Creates the sidebar and mounts it for outside-interaction detection.
    ///
    /// # Arguments
    ///
    /// * `region` - The rendered region the sidebar occupies.
    /// * `source` - Host capability delivering outside interactions.
    /// * `persistent` - Whether the sidebar stays open on outside clicks.
    #[must_use]
    pub fn mount(
        region: RegionId,
        source: &dyn OutsideInteractionSource,
        persistent: bool,
    ) -> Self {
        Self {
            panel: DisclosurePanel::builder()
                .persistent(persistent)
                .mount(region, source),
            entries: default_entries(),
        }
    }

    /// Handles an activation of the menu button.
    pub fn toggle(&self) {
        self.panel.trigger();
    }

    /// Handles an activation of the close button.
    pub fn close(&self) {
        if self.panel.is_open() {
            self.panel.trigger();
        }
    }

    /// Whether the drawer is unfolded.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Describes the sidebar for the host renderer.
    #[must_use]
    pub fn frame(&self) -> SidebarFrame {
        SidebarFrame {
            open: self.panel.is_open(),
            entries: self.entries.clone(),
        }
    }
}

fn default_entries() -> Vec<NavEntry> {
    vec![
        entry("person", "Artists", "/artists", false),
        entry("album", "Albums", "/albums", false),
        entry("fingerprint", "Genres", "/genres", false),
        entry("playlist_play", "Playlists", "/playlists", false),
        entry("settings", "Settings", "/settings", true),
    ]
}

fn entry(icon: &str, label: &str, route: &str, secondary: bool) -> NavEntry {
    NavEntry {
        icon: icon.to_string(),
        label: label.to_string(),
        route: route.to_string(),
        secondary,
    }
}
