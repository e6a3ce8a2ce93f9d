//! Slide store errors.

/// Errors raised by slide store mutations.
///
/// These indicate a caller bug rather than a user-facing condition: the
/// command layer validates its input before touching the store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Slide index {index} is out of range (store holds {len} slides)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid slide duration {0}: must be a finite number of seconds greater than zero")]
    InvalidDuration(f64),
}
