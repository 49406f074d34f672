//! Album browsing view.

use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::domain::UiError,
    library::{
        models::Album,
        record::{FieldPath, Record},
    },
    ui::{
        components::list_header::ListHeader,
        interaction::{OutsideInteractionSource, RegionId},
        render::{ItemDisplay, ListFrame, OrderOption, TitleHook},
        views::list_view::ListViewController,
    },
};

/// The album list: orderable by title, year, or the artist's name,
/// searchable by title.
pub struct AlbumListView {
    controller: ListViewController,
    header: ListHeader,
}

impl AlbumListView {
    /// Creates the album view over a catalog snapshot.
    ///
    /// # Arguments
    ///
    /// * `albums` - Albums to browse.
    /// * `default_order` - Initial ordering, typically from settings.
    /// * `search_persistent` - Whether the search drawer survives outside
    ///   interactions.
    /// * `title_hook` - Optional hook receiving the view title on mount.
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfiguration` on an invalid view setup.
    pub fn new(
        albums: &[Album],
        default_order: FieldPath,
        search_persistent: bool,
        title_hook: Option<TitleHook>,
    ) -> Result<Self, UiError> {
        let mut builder = ListViewController::builder()
            .items(albums.iter().map(Album::to_record).collect())
            .order_options(vec![
                OrderOption::new("title", "title"),
                OrderOption::new("year", "year"),
                OrderOption::new("artist.name", "artist"),
            ])
            .default_order(default_order)
            .search_property(FieldPath::parse("title"))
            .item_display(album_teaser())
            .title("Albums");
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

/// Display capability for one album row: title, year, artist.
fn album_teaser() -> ItemDisplay {
    Arc::new(|record: &Record| {
        let title = record
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("Untitled");
        let mut teaser = title.to_string();
        if let Some(year) = record.get("year").and_then(Value::as_i64) {
            teaser.push_str(&format!(" ({year})"));
        }
        if let Some(artist) = record.pointer("/artist/name").and_then(Value::as_str) {
            teaser.push_str(&format!(" by {artist}"));
        }
        teaser
    })
}
