//! The slideshow composer.
//!
//! Owns the slide store, the audio binding and the frame scheduler, and
//! wires them together for play and stop. All state lives here and is
//! passed explicitly; nothing is global.

use tracing::info;

use crate::audio::{AudioBinding, AudioOutput, AudioSource};
use crate::player::{
    FrameHost, FrameRequest, FrameScheduler, FrameSink, PlaybackError, TickOutcome, TimeSource,
};
use crate::slides::SlideStore;

/// A slideshow being edited and played.
pub struct Composer<O: AudioOutput, H: FrameHost, T: TimeSource> {
    store: SlideStore,
    audio: AudioBinding<O>,
    scheduler: FrameScheduler<H, T>,
}

impl<O: AudioOutput, H: FrameHost, T: TimeSource> Composer<O, H, T> {
    pub fn new(store: SlideStore, output: O, host: H, time: T) -> Self {
        Self {
            store,
            audio: AudioBinding::new(output),
            scheduler: FrameScheduler::new(host, time),
        }
    }

    /// Play the current slides from the beginning.
    ///
    /// The timeline is built from the store now; edits made while the
    /// session runs only take effect on the next `play`. A running
    /// session is stopped first.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::EmptyTimeline`] when there are no slides.
    pub fn play<S>(&mut self, sink: &mut S) -> Result<TickOutcome, PlaybackError>
    where
        S: FrameSink + ?Sized,
    {
        let timeline = self.store.timeline();
        info!(
            slides = timeline.len(),
            total = timeline.total_seconds(),
            revision = self.store.revision(),
            "play"
        );
        self.scheduler.start(timeline, sink, &mut self.audio)
    }

    /// Deliver a frame request granted by the host.
    pub fn tick<S>(&mut self, request: FrameRequest, sink: &mut S) -> TickOutcome
    where
        S: FrameSink + ?Sized,
    {
        self.scheduler.tick(request, sink, &mut self.audio)
    }

    /// Stop playback. Returns `false` when nothing was playing.
    pub fn stop(&mut self) -> bool {
        self.scheduler.stop(&mut self.audio)
    }

    /// Bind a new audio source (or none). Takes effect at the next `play`.
    pub fn bind_audio(&mut self, source: Option<AudioSource>) -> Option<AudioSource> {
        self.audio.bind(source)
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn store(&self) -> &SlideStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SlideStore {
        &mut self.store
    }

    pub fn audio(&self) -> &AudioBinding<O> {
        &self.audio
    }

    pub fn scheduler(&self) -> &FrameScheduler<H, T> {
        &self.scheduler
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.scheduler.host_mut()
    }
}
