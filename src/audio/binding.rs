//! Binding of the active audio source to an audio output.

use tracing::{debug, info, warn};

use super::output::AudioOutput;
use super::source::AudioSource;
use crate::player::AudioCue;

/// Holds the one active [`AudioSource`] and drives an [`AudioOutput`].
///
/// Audio is best effort: a failure to load or start the source is logged
/// and remembered, and playback continues without sound.
#[derive(Debug)]
pub struct AudioBinding<O: AudioOutput> {
    output: O,
    source: Option<AudioSource>,
    loaded: Option<String>,
    last_failure: Option<String>,
}

impl<O: AudioOutput> AudioBinding<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            source: None,
            loaded: None,
            last_failure: None,
        }
    }

    /// Replace the active source; `None` makes playback silent.
    ///
    /// A replaced locally owned source is released through the output.
    /// Returns the previous source.
    pub fn bind(&mut self, source: Option<AudioSource>) -> Option<AudioSource> {
        let previous = std::mem::replace(&mut self.source, source);

        if let Some(prev) = &previous {
            let same = self.source.as_ref().map(|s| s.uri.as_str()) == Some(prev.uri.as_str());
            if prev.is_owned() && !same {
                debug!(uri = %prev.uri, "releasing replaced local audio");
                self.output.release(&prev.uri);
                if self.loaded.as_deref() == Some(prev.uri.as_str()) {
                    self.loaded = None;
                }
            }
        }

        match &self.source {
            Some(source) => info!(label = %source.label, kind = ?source.kind, "audio bound"),
            None => debug!("audio unbound"),
        }
        self.last_failure = None;
        previous
    }

    pub fn source(&self) -> Option<&AudioSource> {
        self.source.as_ref()
    }

    /// The most recent swallowed playback failure, if any.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn record_failure(&mut self, action: &str, message: String) {
        warn!(action, error = %message, "audio playback failure, continuing without sound");
        self.last_failure = Some(message);
    }
}

impl<O: AudioOutput> AudioCue for AudioBinding<O> {
    fn cue_prepare(&mut self) {
        let Some(uri) = self.source.as_ref().map(|s| s.uri.clone()) else {
            return;
        };
        if self.loaded.as_deref() == Some(uri.as_str()) {
            return;
        }

        match self.output.set_source(&uri) {
            Ok(()) => self.loaded = Some(uri),
            Err(err) => {
                self.loaded = None;
                self.record_failure("load", err.to_string());
            }
        }
    }

    fn cue_start(&mut self) {
        let Some(source) = &self.source else {
            debug!("no audio bound, playing visuals silently");
            return;
        };
        // Loading happens in cue_prepare, before the clock starts.
        if self.loaded.as_deref() != Some(source.uri.as_str()) {
            debug!(uri = %source.uri, "audio not loaded, playing visuals silently");
            return;
        }

        if let Err(err) = self.output.play() {
            self.record_failure("play", err.to_string());
        }
    }

    fn cue_stop(&mut self) {
        if let Err(err) = self.output.pause() {
            debug!(error = %err, "ignoring audio pause failure");
        }
        if let Err(err) = self.output.reset_position() {
            debug!(error = %err, "ignoring audio rewind failure");
        }
    }
}
