//! Audio output backed by `rodio`.
//!
//! Sources are read fully into memory (local files from disk, remote
//! previews over HTTP) so that every start can decode from the top again.

use std::fs;
use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::debug;

use super::error::AudioError;
use super::output::AudioOutput;

/// Plays the bound source on the default output device.
pub struct RodioOutput {
    /// The output stream (must be kept alive for audio to play).
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
    loaded: Option<(String, Vec<u8>)>,
    http: reqwest::blocking::Client,
}

impl RodioOutput {
    /// Open the default output device.
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
            loaded: None,
            http: reqwest::blocking::Client::new(),
        })
    }

    fn fetch(&self, uri: &str) -> Result<Vec<u8>, AudioError> {
        let unavailable = |reason: String| AudioError::SourceUnavailable {
            uri: uri.to_string(),
            reason,
        };

        if is_remote(uri) {
            let response = self
                .http
                .get(uri)
                .send()
                .and_then(|r| r.error_for_status())
                .map_err(|e| unavailable(e.to_string()))?;
            let bytes = response.bytes().map_err(|e| unavailable(e.to_string()))?;
            Ok(bytes.to_vec())
        } else {
            Ok(fs::read(uri)?)
        }
    }

    fn fresh_sink(&self, data: &[u8]) -> Result<Sink, AudioError> {
        let source = Decoder::new(Cursor::new(data.to_vec()))
            .map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;
        let sink =
            Sink::try_new(&self.handle).map_err(|e| AudioError::Device(e.to_string()))?;
        sink.append(source);
        Ok(sink)
    }
}

impl AudioOutput for RodioOutput {
    fn set_source(&mut self, uri: &str) -> Result<(), AudioError> {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        let data = self.fetch(uri)?;
        // Decode once up front so a bad file fails here, not on play.
        Decoder::new(Cursor::new(data.clone())).map_err(|e| AudioError::SourceUnavailable {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;
        debug!(uri, bytes = data.len(), "audio source loaded");
        self.loaded = Some((uri.to_string(), data));
        Ok(())
    }

    fn play(&mut self) -> Result<(), AudioError> {
        if let Some(sink) = &self.sink {
            sink.play();
            return Ok(());
        }
        let (_, data) = self.loaded.as_ref().ok_or(AudioError::NoSource)?;
        let sink = self.fresh_sink(data)?;
        sink.play();
        self.sink = Some(sink);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        match &self.sink {
            Some(sink) => {
                sink.pause();
                Ok(())
            }
            None => Err(AudioError::NoSource),
        }
    }

    fn reset_position(&mut self) -> Result<(), AudioError> {
        // Dropping the sink rewinds: the next play decodes from the top.
        match self.sink.take() {
            Some(sink) => {
                sink.stop();
                Ok(())
            }
            None => Err(AudioError::NoSource),
        }
    }

    fn release(&mut self, uri: &str) {
        if self.loaded.as_ref().map(|(loaded, _)| loaded.as_str()) == Some(uri) {
            if let Some(sink) = self.sink.take() {
                sink.stop();
            }
            self.loaded = None;
            debug!(uri, "audio source released");
        }
    }
}

fn is_remote(uri: &str) -> bool {
    uri.starts_with("http://") || uri.starts_with("https://")
}
