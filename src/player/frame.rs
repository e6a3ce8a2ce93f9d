//! Frame data and the callbacks the scheduler drives.

use crate::slides::SlideId;

/// What the render collaborator needs for one scheduling tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Slide to show
    pub slide: SlideId,
    /// Position of the slide on the timeline (0-based)
    pub index: usize,
    /// Number of slides on the timeline
    pub count: usize,
    /// Seconds since the session started (may exceed `total` on the last frame)
    pub elapsed: f64,
    /// Total duration of the session's timeline
    pub total: f64,
}

impl Frame {
    /// Playback progress in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.total > 0.0 {
            (self.elapsed / self.total).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Whether this is the final frame of the session.
    pub fn is_final(&self) -> bool {
        self.elapsed >= self.total
    }
}

/// Receives one frame per scheduler tick.
///
/// Implementations update on-screen state and must return promptly.
pub trait FrameSink {
    fn on_frame(&mut self, frame: &Frame);
}

impl<F> FrameSink for F
where
    F: FnMut(&Frame),
{
    fn on_frame(&mut self, frame: &Frame) {
        self(frame)
    }
}

/// Audio side effects issued in step with the scheduler.
pub trait AudioCue {
    /// Playback is about to start; get the source ready to play.
    ///
    /// Called before the session clock starts, so however long loading
    /// takes is not counted as playback time.
    fn cue_prepare(&mut self) {}

    /// Playback started; begin audio from the top.
    ///
    /// Must return promptly: the session clock is already running.
    fn cue_start(&mut self);

    /// Playback stopped or finished; pause and rewind.
    fn cue_stop(&mut self);
}

/// An [`AudioCue`] that does nothing, for visual-only playback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAudio;

impl AudioCue for NoAudio {
    fn cue_start(&mut self) {}

    fn cue_stop(&mut self) {}
}
