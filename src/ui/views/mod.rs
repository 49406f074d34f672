//! Browsable list views.


pub mod album_list;
pub mod artist_list;
pub mod list_view;

pub use {
    album_list::AlbumListView,
    artist_list::ArtistListView,
    list_view::{ListViewBuilder, ListViewController, ListViewEvent, ViewState},
};
