//! Data models for the music library browsing views.
//!
//! This module defines the shapes the library API hands to the browsing
//! core: artists and albums, with an album embedding its artist so that
//! nested order keys such as `artist.name` resolve client-side.

use {
    serde::{Deserialize, Serialize},
    serde_json::json,
};

use crate::library::record::Record;

/// Represents a musical artist in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Artist {
    /// Unique library ID.
    pub id: i64,
    /// Artist name.
    pub name: String,
}

/// Represents a musical album in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Album {
    /// Unique library ID.
    pub id: i64,
    /// Album title.
    pub title: String,
    /// Release year (if available).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    /// The artist the album belongs to (if resolved by the data layer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
}

impl Artist {
    /// Converts the artist into the generic record form consumed by the
    /// sort/filter engine.
    #[must_use]
    pub fn to_record(&self) -> Record {
        json!({
            "id": self.id,
            "name": self.name,
        })
    }
}

impl Album {
    /// Converts the album into the generic record form consumed by the
    /// sort/filter engine. The embedded artist, when present, lands under
    /// the `artist` key so `artist.name` order keys resolve.
    #[must_use]
    pub fn to_record(&self) -> Record {
        let mut record = json!({
            "id": self.id,
            "title": self.title,
        });
        if let Some(year) = self.year {
            record["year"] = json!(year);
        }
        if let Some(artist) = &self.artist {
            record["artist"] = artist.to_record();
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::library::models::{Album, Artist};

    #[test]
    fn test_artist_record_shape() {
        let artist = Artist {
            id: 1,
            name: "Tool".to_string(),
        };
        assert_eq!(artist.to_record(), json!({"id": 1, "name": "Tool"}));
    }

    #[test]
    fn test_album_record_embeds_artist() {
        let album = Album {
            id: 10,
            title: "Lateralus".to_string(),
            year: Some(2001),
            artist: Some(Artist {
                id: 1,
                name: "Tool".to_string(),
            }),
        };
        assert_eq!(
            album.to_record(),
            json!({
                "id": 10,
                "title": "Lateralus",
                "year": 2001,
                "artist": {"id": 1, "name": "Tool"},
            })
        );
    }

    #[test]
    fn test_album_record_omits_absent_fields() {
        let album = Album {
            id: 11,
            title: "Unknown Pleasures".to_string(),
            year: None,
            artist: None,
        };
        let record = album.to_record();
        assert!(record.get("year").is_none());
        assert!(record.get("artist").is_none());
    }
}
