//! AudioOutput trait and the silent fallback output.

use tracing::debug;

use super::error::AudioError;

/// An audio playback object.
///
/// Each implementation wraps one playback backend. The binding treats
/// every failure as non-fatal, so implementations should report problems
/// through the returned error rather than panicking.
pub trait AudioOutput {
    /// Point the output at a new locator.
    fn set_source(&mut self, uri: &str) -> Result<(), AudioError>;

    /// Start (or resume) playback of the current source.
    fn play(&mut self) -> Result<(), AudioError>;

    /// Pause playback, keeping the position.
    fn pause(&mut self) -> Result<(), AudioError>;

    /// Rewind to the beginning of the current source.
    fn reset_position(&mut self) -> Result<(), AudioError>;

    /// Release whatever the output holds for `uri`.
    ///
    /// Called when a locally owned source is replaced.
    fn release(&mut self, _uri: &str) {}
}

/// Output that plays nothing.
///
/// Used when the binary is built without an audio backend. Every call
/// succeeds so the visuals run exactly as they would with sound.
#[derive(Debug, Default)]
pub struct SilentOutput {
    source: Option<String>,
}

impl SilentOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl AudioOutput for SilentOutput {
    fn set_source(&mut self, uri: &str) -> Result<(), AudioError> {
        debug!(uri, "silent output: source set");
        self.source = Some(uri.to_string());
        Ok(())
    }

    fn play(&mut self) -> Result<(), AudioError> {
        debug!("silent output: play");
        Ok(())
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn reset_position(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn release(&mut self, uri: &str) {
        if self.source.as_deref() == Some(uri) {
            self.source = None;
        }
    }
}
