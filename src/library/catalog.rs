//! Catalog loading for the browsing views.
//!
//! The catalog is the in-memory snapshot of the library the views browse:
//! every artist and every album, as fetched in one shot from the library
//! API or loaded from a JSON export. Filtering and ordering stay entirely
//! client-side, so this is the only data access the browsing core needs.

use std::{fs::read_to_string, io::Error as IoError, path::Path};

use {
    serde::{Deserialize, Serialize},
    serde_json::Error as SerdeJsonError,
    thiserror::Error,
    tracing::debug,
};

use crate::library::{
    models::{Album, Artist},
    record::Record,
};

/// Error type for catalog loading.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("IO error: {0}")]
    IoError(#[from] IoError),
    /// The catalog file is not valid catalog JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
}

/// In-memory snapshot of the browsable library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    /// All artists in the library.
    pub artists: Vec<Artist>,
    /// All albums in the library.
    pub albums: Vec<Album>,
}

impl Catalog {
    /// Loads a catalog from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON export with `artists` and `albums` arrays.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        debug!("Loading catalog from file: {:?}", path);
        let contents = read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Converts all artists into the generic record form.
    #[must_use]
    pub fn artist_records(&self) -> Vec<Record> {
        self.artists.iter().map(Artist::to_record).collect()
    }

    /// Converts all albums into the generic record form.
    #[must_use]
    pub fn album_records(&self) -> Vec<Record> {
        self.albums.iter().map(Album::to_record).collect()
    }

    /// Builds the built-in demo catalog.
    ///
    /// Used by the demo shell when no catalog file is given, and by tests
    /// that need a realistic, library-sized data set.
    #[must_use]
    pub fn sample() -> Self {
        let artists = vec![
            artist(1, "Tool"),
            artist(2, "Alice in Chains"),
            artist(3, "Prodigy"),
            artist(4, "Queens of the Stone Age"),
            artist(5, "Arctic Monkeys"),
            artist(6, "All Them Witches"),
            artist(7, "Kool & the Gang"),
            artist(8, "Marilyn Manson"),
        ];
        let albums = vec![
            album(1, "Lateralus", Some(2001), &artists[0]),
            album(2, "Dirt", Some(1992), &artists[1]),
            album(3, "The Fat of the Land", Some(1997), &artists[2]),
            album(4, "Songs for the Deaf", Some(2002), &artists[3]),
            album(5, "AM", Some(2013), &artists[4]),
            album(6, "Dying Surfer Meets His Maker", Some(2015), &artists[5]),
            album(7, "Wild and Peaceful", Some(1973), &artists[6]),
            album(8, "Antichrist Superstar", Some(1996), &artists[7]),
            album(9, "Fear Inoculum", Some(2019), &artists[0]),
        ];
        Self { artists, albums }
    }
}

fn artist(id: i64, name: &str) -> Artist {
    Artist {
        id,
        name: name.to_string(),
    }
}

fn album(id: i64, title: &str, year: Option<i64>, by: &Artist) -> Album {
    Album {
        id,
        title: title.to_string(),
        year,
        artist: Some(by.clone()),
    }
}
