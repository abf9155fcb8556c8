use serde::{Deserialize, Serialize};

use crate::{AnimationSettings, Result};

/// Read-only source of track seek positions, keyed by album and track index.
///
/// `seek_position` answers in turns within `[0, 1)` — the platter angle at
/// which the track's groove begins. Unknown indices yield `None`; the
/// coordinator then simply holds the affected animation rather than faulting.
pub trait TrackCatalog {
    fn seek_position(&self, album: i32, track: i32) -> Option<f64>;
}

/// A single track within an album's metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackEntry {
    pub title: String,
    /// Audio file name, relative to the album directory.
    pub filename: String,
    /// Offset into the album side where the track starts, in seconds.
    pub seek_seconds: f64,
}

/// Album metadata in the shape of the `metadata.json` files shipped with
/// album archives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    /// Cover image file name, if the album ships one.
    #[serde(default)]
    pub image: Option<String>,
    pub tracks: Vec<TrackEntry>,
}

/// Parsed collection of albums, indexed the way the coordinator addresses
/// them: by integer album and track position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumLibrary {
    pub albums: Vec<Album>,
}

impl AlbumLibrary {
    /// Parses a library from its JSON representation.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn album(&self, index: i32) -> Option<&Album> {
        usize::try_from(index).ok().and_then(|i| self.albums.get(i))
    }

    pub fn track(&self, album: i32, track: i32) -> Option<&TrackEntry> {
        let entry = usize::try_from(track).ok()?;
        self.album(album)?.tracks.get(entry)
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}

/// Binds an [`AlbumLibrary`] to the playback rotation period so it can answer
/// seek queries in turns.
#[derive(Debug, Clone)]
pub struct LibraryCatalog {
    library: AlbumLibrary,
    rotation_period_ms: f64,
}

impl LibraryCatalog {
    pub fn new(library: AlbumLibrary, settings: &AnimationSettings) -> Self {
        Self {
            library,
            rotation_period_ms: settings.rotation_period_ms(),
        }
    }

    pub fn library(&self) -> &AlbumLibrary {
        &self.library
    }
}

impl TrackCatalog for LibraryCatalog {
    fn seek_position(&self, album: i32, track: i32) -> Option<f64> {
        let entry = self.library.track(album, track)?;
        if !entry.seek_seconds.is_finite() || entry.seek_seconds < 0.0 {
            return None;
        }
        // Seconds into the side, reduced to a fraction of one rotation.
        Some((entry.seek_seconds * 1000.0 / self.rotation_period_ms).fract())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBRARY_JSON: &str = r#"{
        "albums": [
            {
                "title": "Side A",
                "artist": "The Grooves",
                "image": "cover.png",
                "tracks": [
                    { "title": "Opener", "filename": "01.mp3", "seek_seconds": 0.0 },
                    { "title": "Deep Cut", "filename": "02.mp3", "seek_seconds": 191.7 }
                ]
            },
            {
                "title": "Side B",
                "tracks": [
                    { "title": "Closer", "filename": "01.mp3", "seek_seconds": 42.3 }
                ]
            }
        ]
    }"#;

    fn catalog() -> LibraryCatalog {
        let library = AlbumLibrary::from_json(LIBRARY_JSON).unwrap();
        LibraryCatalog::new(library, &AnimationSettings::default())
    }

    #[test]
    fn parses_library_metadata() {
        let catalog = catalog();
        assert_eq!(catalog.library().len(), 2);
        let album = catalog.library().album(0).unwrap();
        assert_eq!(album.artist.as_deref(), Some("The Grooves"));
        assert_eq!(album.tracks.len(), 2);
        assert!(catalog.library().album(1).unwrap().artist.is_none());
    }

    #[test]
    fn rejects_malformed_metadata() {
        assert!(AlbumLibrary::from_json("{\"albums\": [{}]}").is_err());
        assert!(AlbumLibrary::from_json("not json").is_err());
    }

    #[test]
    fn seek_positions_are_fractions_of_a_turn() {
        let catalog = catalog();
        assert_eq!(catalog.seek_position(0, 0), Some(0.0));
        // 191.7s at 1.8s per turn is 106.5 turns; the groove sits half way
        // around the platter.
        let position = catalog.seek_position(0, 1).unwrap();
        assert!((position - 0.5).abs() < 1e-9);
        let other = catalog.seek_position(1, 0).unwrap();
        assert!((0.0..1.0).contains(&other));
    }

    #[test]
    fn unknown_indices_have_no_position() {
        let catalog = catalog();
        assert_eq!(catalog.seek_position(-1, 0), None);
        assert_eq!(catalog.seek_position(0, -1), None);
        assert_eq!(catalog.seek_position(5, 0), None);
        assert_eq!(catalog.seek_position(0, 9), None);
    }
}
