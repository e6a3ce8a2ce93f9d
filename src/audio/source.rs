//! Audio source descriptors.

use std::path::Path;

use super::error::AudioError;
use crate::search::{SearchError, TrackRecord};

/// File extensions accepted as local audio.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "oga", "flac", "m4a", "aac", "opus"];

/// Where an audio source comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioKind {
    /// A file owned by this session; its locator is released on replacement
    Local,
    /// A remote preview clip found through track search
    RemotePreview,
}

/// The audio track played alongside the slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSource {
    pub kind: AudioKind,
    /// Locator handed to the audio output (path or URL), never interpreted here
    pub uri: String,
    /// Display string
    pub label: String,
}

impl AudioSource {
    pub fn local(uri: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: AudioKind::Local,
            uri: uri.into(),
            label: label.into(),
        }
    }

    pub fn remote_preview(uri: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: AudioKind::RemotePreview,
            uri: uri.into(),
            label: label.into(),
        }
    }

    /// Build a local source from a file path.
    ///
    /// Only the extension is checked; the file is not opened here.
    pub fn from_local_file(path: &Path) -> Result<Self, AudioError> {
        if !is_audio_path(path) {
            return Err(AudioError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::local(path.to_string_lossy(), label))
    }

    /// Build a remote preview source from a search hit, labelled "title - artist".
    pub fn from_track(record: &TrackRecord) -> Result<Self, SearchError> {
        Self::try_from(record)
    }

    /// Whether replacing this source must release its locator.
    pub fn is_owned(&self) -> bool {
        self.kind == AudioKind::Local
    }
}

/// Check whether `path` has a known audio file extension.
pub fn is_audio_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
