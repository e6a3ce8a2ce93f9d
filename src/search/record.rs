//! Track records and decoding of the search service's response body.

use serde::Deserialize;

use super::error::SearchError;
use crate::audio::AudioSource;

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub title: String,
    pub artist_name: String,
    /// Locator of the short preview clip, if the service offers one
    pub preview_uri: Option<String>,
    /// Small album cover image
    pub cover_uri: Option<String>,
}

impl TrackRecord {
    /// Display label, "title - artist".
    pub fn label(&self) -> String {
        if self.artist_name.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.artist_name)
        }
    }

    /// Turn this record into a remote preview audio source.
    pub fn to_audio_source(&self) -> Result<AudioSource, SearchError> {
        AudioSource::try_from(self)
    }
}

impl TryFrom<&TrackRecord> for AudioSource {
    type Error = SearchError;

    fn try_from(record: &TrackRecord) -> Result<Self, Self::Error> {
        match record.preview_uri.as_deref() {
            Some(uri) => Ok(AudioSource::remote_preview(uri, record.label())),
            None => Err(SearchError::MissingPreview {
                title: record.title.clone(),
            }),
        }
    }
}

// Wire format of the Deezer search endpoint. Only the fields we show are
// decoded; everything else in the body is ignored.

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    data: Option<Vec<WireTrack>>,
    #[serde(default)]
    error: Option<WireError>,
}

#[derive(Debug, Deserialize)]
struct WireTrack {
    #[serde(default)]
    title: String,
    #[serde(default)]
    artist: Option<WireArtist>,
    #[serde(default)]
    preview: Option<String>,
    #[serde(default)]
    album: Option<WireAlbum>,
}

#[derive(Debug, Deserialize)]
struct WireArtist {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct WireAlbum {
    #[serde(default)]
    cover_small: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    message: String,
}

impl From<WireTrack> for TrackRecord {
    fn from(track: WireTrack) -> Self {
        Self {
            title: track.title,
            artist_name: track.artist.map(|a| a.name).unwrap_or_default(),
            preview_uri: non_empty(track.preview),
            cover_uri: non_empty(track.album.and_then(|a| a.cover_small)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Decode a search response body, keeping at most `limit` records.
///
/// # Returns
///
/// The records in service order, `NoResults` when `data` is missing or
/// empty, `Api` when the body carries an error object instead.
pub fn parse_search_response(body: &str, limit: usize) -> Result<Vec<TrackRecord>, SearchError> {
    let parsed: SearchBody =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;

    if let Some(error) = parsed.error {
        return Err(SearchError::Api {
            kind: error.kind,
            message: error.message,
        });
    }

    let records: Vec<TrackRecord> = parsed
        .data
        .unwrap_or_default()
        .into_iter()
        .take(limit)
        .map(TrackRecord::from)
        .collect();

    if records.is_empty() {
        return Err(SearchError::NoResults);
    }
    Ok(records)
}
