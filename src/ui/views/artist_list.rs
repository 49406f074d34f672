//! Artist browsing view.

use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::domain::UiError,
    library::{
        models::Artist,
        record::{FieldPath, Record},
    },
    ui::{
        components::list_header::ListHeader,
        interaction::{OutsideInteractionSource, RegionId},
        render::{ItemDisplay, ListFrame, OrderOption, TitleHook},
        views::list_view::ListViewController,
    },
};

/// The artist list: orderable by name or id, searchable by name.
pub struct ArtistListView {
    controller: ListViewController,
    header: ListHeader,
}

impl ArtistListView {
    /// Creates the artist view over a catalog snapshot.
    ///
    /// # Arguments
    ///
    /// * `artists` - Artists to browse.
    /// * `default_order` - Initial ordering, typically from settings.
    /// * `search_persistent` - Whether the search drawer survives outside
    ///   interactions.
    /// * `title_hook` - Optional hook receiving the view title on mount.
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfiguration` on an invalid view setup.
    pub fn new(
        artists: &[Artist],
        default_order: FieldPath,
        search_persistent: bool,
        title_hook: Option<TitleHook>,
    ) -> Result<Self, UiError> {
        let mut builder = ListViewController::builder()
            .items(artists.iter().map(Artist::to_record).collect())
            .order_options(vec![
                OrderOption::new("name", "name"),
                OrderOption::new("id", "id"),
            ])
            .default_order(default_order)
            .search_property(FieldPath::parse("name"))
            .item_display(artist_teaser())
            .title("Artists");
        if let Some(hook) = title_hook {
            builder = builder.title_hook(hook);
        }
        let controller = builder.build()?;
        let header = ListHeader::new(&controller, search_persistent);
        Ok(Self { controller, header })
    }

    /// Gets the controller driving this view.
    #[must_use]
    pub fn controller(&self) -> &ListViewController {
        &self.controller
    }

    /// Gets the header controls.
    #[must_use]
    pub fn header(&self) -> &ListHeader {
        &self.header
    }

    /// Registers the search drawer on an outside-interaction source.
    pub fn mount_search(&mut self, region: RegionId, source: &dyn OutsideInteractionSource) {
        self.header.mount_outside(region, source);
    }

    /// Describes the whole view for the host renderer.
    #[must_use]
    pub fn frame(&self) -> ListFrame {
        ListFrame {
            title: self.controller.title(),
            header: self.header.frame(),
            items: self.controller.render_items(),
        }
    }
}

/// Display capability for one artist row.
fn artist_teaser() -> ItemDisplay {
    Arc::new(|record: &Record| {
        record
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("Unknown artist")
            .to_string()
    })
}
