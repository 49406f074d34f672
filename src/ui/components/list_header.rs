//! List header: order selector plus a disclosure-wrapped search box.
//!
//! The header is where the two halves of the browsing core meet. The order
//! selector feeds `set_sort_path`, the search box feeds `set_search_term`,
//! and the search box itself sits inside a disclosure panel whose
//! `on_close` clears the search. Collapsing the affordance resetting the
//! filter is a product decision, not an accident of wiring.

use crate::{
    library::record::FieldPath,
    ui::{
        components::disclosure::DisclosurePanel,
        interaction::{OutsideInteractionSource, RegionId},
        render::HeaderFrame,
        views::list_view::ListViewController,
    },
};

/// Header controls for one list view.
pub struct ListHeader {
    /// Controller the header's interactions feed into.
    controller: ListViewController,
    /// Disclosure panel wrapping the search box.
    search_panel: DisclosurePanel,
}

impl ListHeader {
    /// Creates a header wired to a controller.
    ///
    /// # Arguments
    ///
    /// * `controller` - The controller receiving order/search changes.
    /// * `search_persistent` - Whether the search drawer ignores outside
    ///   interactions.
    #[must_use]
    pub fn new(controller: &ListViewController, search_persistent: bool) -> Self {
        let closer = controller.clone();
        let search_panel = DisclosurePanel::builder()
            .persistent(search_persistent)
            .on_close(move || closer.clear_search())
            .build();
        Self {
            controller: controller.clone(),
            search_panel,
        }
    }

    /// Registers the search drawer on an outside-interaction source.
    ///
    /// Only meaningful for non-persistent configurations.
    pub fn mount_outside(&mut self, region: RegionId, source: &dyn OutsideInteractionSource) {
        self.search_panel.mount_outside(region, source);
    }

    /// Handles an activation of the search toggle.
    pub fn toggle_search(&self) {
        self.search_panel.trigger();
    }

    /// Handles a selection in the order selector.
    pub fn change_order(&self, path: FieldPath) {
        self.controller.set_sort_path(path);
    }

    /// Handles a keystroke in the search box.
    pub fn change_search(&self, term: &str) {
        self.controller.set_search_term(term);
    }

    /// Handles an interaction outside the search drawer.
    pub fn outside_interaction(&self) {
        self.search_panel.outside_interaction();
    }

    /// Whether the search drawer is unfolded.
    #[must_use]
    pub fn is_search_open(&self) -> bool {
        self.search_panel.is_open()
    }

    /// Describes the header controls for the host renderer.
    #[must_use]
    pub fn frame(&self) -> HeaderFrame {
        let state = self.controller.view_state();
        HeaderFrame {
            order_by: state.sort_path,
            order_options: self.controller.order_options(),
            search_value: state.search_term,
            search_open: self.search_panel.is_open(),
        }
    }
}
