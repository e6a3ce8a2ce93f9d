//! Playback errors.

/// Errors reported when starting playback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("Nothing to play: add at least one image first")]
    EmptyTimeline,
}
