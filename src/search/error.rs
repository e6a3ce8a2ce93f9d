//! Track search errors.

/// Errors that can occur while searching for a track.
///
/// Payloads are plain strings so outcomes can be cloned and compared
/// after crossing the worker channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Search query is empty")]
    EmptyQuery,

    #[error("No results found")]
    NoResults,

    #[error("Track '{title}' has no preview clip")]
    MissingPreview { title: String },

    #[error("Search request failed: {0}")]
    Request(String),

    #[error("Unexpected search response: {0}")]
    Decode(String),

    #[error("Search service error ({kind}): {message}")]
    Api { kind: String, message: String },

    #[error("Search worker is no longer running")]
    WorkerGone,
}
