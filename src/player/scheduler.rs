//! Frame scheduler: the `Idle -> Running -> Idle` playback loop.
//!
//! Each tick re-reads elapsed time from the clock and resolves the active
//! slide from the session's timeline snapshot, rather than reacting to
//! slide boundary events. A tick either requests the next frame from the
//! host or, once elapsed time reaches the total, stops the session.
//!
//! At most one session and one outstanding frame request exist at a
//! time. Starting while running performs a full stop first, and ticks
//! carrying any request other than the outstanding one are ignored, so
//! nothing from an earlier session can fire after a restart or stop.

use tracing::{debug, trace, warn};

use super::clock::{PlaybackClock, PlaybackSession, TimeSource};
use super::error::PlaybackError;
use super::frame::{AudioCue, Frame, FrameSink};
use super::host::{FrameHost, FrameRequest};
use crate::timeline::Timeline;

/// Scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    /// No session running
    #[default]
    Idle,
    /// A session is running and a frame is outstanding
    Running,
}

/// Result of delivering a frame request to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame rendered, next frame requested
    Scheduled(FrameRequest),
    /// Frame rendered, session reached its end and stopped
    Finished,
    /// Request did not belong to the running session; nothing happened
    Stale,
}

/// The running session's state.
#[derive(Debug)]
struct Run {
    session: PlaybackSession,
    timeline: Timeline,
    pending: Option<FrameRequest>,
}

/// Drives playback: one frame per host scheduling opportunity.
#[derive(Debug)]
pub struct FrameScheduler<H: FrameHost, T: TimeSource> {
    host: H,
    clock: PlaybackClock<T>,
    run: Option<Run>,
}

impl<H: FrameHost, T: TimeSource> FrameScheduler<H, T> {
    pub fn new(host: H, time: T) -> Self {
        Self {
            host,
            clock: PlaybackClock::new(time),
            run: None,
        }
    }

    /// Start playing `timeline`.
    ///
    /// An empty timeline is refused with [`PlaybackError::EmptyTimeline`]
    /// and leaves the scheduler exactly as it was. Otherwise any running
    /// session is fully stopped, `audio` is prepared, a new clock session
    /// starts, `audio` is cued once and the first frame is rendered before
    /// returning.
    ///
    /// The timeline is a snapshot: later slide edits do not reach the
    /// session.
    pub fn start<S, A>(
        &mut self,
        timeline: Timeline,
        sink: &mut S,
        audio: &mut A,
    ) -> Result<TickOutcome, PlaybackError>
    where
        S: FrameSink + ?Sized,
        A: AudioCue + ?Sized,
    {
        if timeline.total_seconds() <= 0.0 {
            warn!("refusing to start playback: timeline is empty");
            return Err(PlaybackError::EmptyTimeline);
        }

        self.stop(audio);
        audio.cue_prepare();

        let session = self.clock.start();
        debug!(
            session = session.id().value(),
            slides = timeline.len(),
            total = timeline.total_seconds(),
            "playback started"
        );
        self.run = Some(Run {
            session,
            timeline,
            pending: None,
        });

        audio.cue_start();
        Ok(self.advance(sink, audio))
    }

    /// Deliver a frame request granted by the host.
    ///
    /// Only the outstanding request of the running session is honoured;
    /// anything else is reported as [`TickOutcome::Stale`].
    pub fn tick<S, A>(&mut self, request: FrameRequest, sink: &mut S, audio: &mut A) -> TickOutcome
    where
        S: FrameSink + ?Sized,
        A: AudioCue + ?Sized,
    {
        match self.run.as_mut() {
            Some(run) if run.pending == Some(request) => {
                run.pending = None;
            }
            _ => {
                trace!(request = request.value(), "ignoring stale frame request");
                return TickOutcome::Stale;
            }
        }
        self.advance(sink, audio)
    }

    /// Stop playback.
    ///
    /// Cancels the outstanding frame, ends the clock session and cues the
    /// audio to stop. Safe to call in any state; from `Idle` it does
    /// nothing and returns `false`.
    pub fn stop<A>(&mut self, audio: &mut A) -> bool
    where
        A: AudioCue + ?Sized,
    {
        let Some(run) = self.run.take() else {
            return false;
        };
        if let Some(request) = run.pending {
            self.host.cancel_frame(request);
        }
        self.clock.stop();
        audio.cue_stop();
        debug!(session = run.session.id().value(), "playback stopped");
        true
    }

    pub fn state(&self) -> SchedulerState {
        if self.run.is_some() {
            SchedulerState::Running
        } else {
            SchedulerState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Timeline snapshot of the running session.
    pub fn timeline(&self) -> Option<&Timeline> {
        self.run.as_ref().map(|run| &run.timeline)
    }

    pub fn session(&self) -> Option<PlaybackSession> {
        self.run.as_ref().map(|run| run.session)
    }

    /// The outstanding frame request, if any.
    pub fn pending(&self) -> Option<FrameRequest> {
        self.run.as_ref().and_then(|run| run.pending)
    }

    /// Seconds elapsed in the running session.
    pub fn elapsed(&self) -> Option<f64> {
        self.run
            .as_ref()
            .map(|run| self.clock.elapsed_now(&run.session))
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn clock(&self) -> &PlaybackClock<T> {
        &self.clock
    }

    /// One scheduling step: render, then finish or request the next frame.
    fn advance<S, A>(&mut self, sink: &mut S, audio: &mut A) -> TickOutcome
    where
        S: FrameSink + ?Sized,
        A: AudioCue + ?Sized,
    {
        let Some(run) = self.run.as_mut() else {
            return TickOutcome::Stale;
        };

        let elapsed = self.clock.elapsed_now(&run.session);
        let total = run.timeline.total_seconds();

        if let Some((index, interval)) = run.timeline.locate(elapsed) {
            let frame = Frame {
                slide: interval.slide,
                index,
                count: run.timeline.len(),
                elapsed,
                total,
            };
            trace!(index, elapsed, "rendering frame");
            sink.on_frame(&frame);
        }

        if elapsed >= total {
            debug!(elapsed, total, "playback reached the end");
            self.stop(audio);
            return TickOutcome::Finished;
        }

        let request = self.host.request_frame();
        run.pending = Some(request);
        TickOutcome::Scheduled(request)
    }
}
