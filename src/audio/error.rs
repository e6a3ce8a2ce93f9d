//! Audio errors.

use std::path::PathBuf;

/// Errors reported by audio outputs and audio source construction.
///
/// Playback failures never stop the visuals: the binding logs them and
/// carries on silently.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Unsupported audio format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Audio source '{uri}' is unavailable: {reason}")]
    SourceUnavailable { uri: String, reason: String },

    #[error("Audio playback failed: {0}")]
    PlaybackFailed(String),

    #[error("Audio device error: {0}")]
    Device(String),

    #[error("No audio source loaded")]
    NoSource,

    #[error("Failed to read audio: {0}")]
    Io(#[from] std::io::Error),
}
