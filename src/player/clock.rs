//! Playback clock.
//!
//! Elapsed playback time is always derived from a monotonic source and
//! the epoch captured when the session started, never accumulated per
//! tick. There is no pause: every new session starts at 0.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::debug;

/// A monotonic time source.
///
/// `now` is measured from an arbitrary fixed origin and must never go
/// backwards. Wall-clock time is not acceptable here since it jumps when
/// the system clock is adjusted.
pub trait TimeSource {
    fn now(&self) -> Duration;
}

/// Time source backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually driven time source.
///
/// Clones share the same underlying time, so a host can keep one handle
/// and advance it while the clock reads another.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: Rc<Cell<Duration>>,
}

impl ManualTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Move time forward by `seconds`.
    pub fn advance_secs(&self, seconds: f64) {
        self.advance(Duration::from_secs_f64(seconds));
    }

    /// Jump to `to`. Earlier values are ignored to stay monotonic.
    pub fn set(&self, to: Duration) {
        if to > self.now.get() {
            self.now.set(to);
        }
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Identifier of one playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// One run of playback from 0 to completion or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSession {
    id: SessionId,
    start_epoch: Duration,
}

impl PlaybackSession {
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Time source reading captured when the session started.
    pub fn start_epoch(&self) -> Duration {
        self.start_epoch
    }
}

/// Session-scoped elapsed time over a [`TimeSource`].
///
/// At most one session is live. Starting a new one ends the previous.
#[derive(Debug)]
pub struct PlaybackClock<T: TimeSource> {
    source: T,
    live: Option<PlaybackSession>,
    next_id: u64,
}

impl<T: TimeSource> PlaybackClock<T> {
    pub fn new(source: T) -> Self {
        Self {
            source,
            live: None,
            next_id: 1,
        }
    }

    /// Start a new session at elapsed 0, ending any live one.
    pub fn start(&mut self) -> PlaybackSession {
        if let Some(previous) = self.live.take() {
            debug!(session = previous.id.0, "replacing live playback session");
        }
        let session = PlaybackSession {
            id: SessionId(self.next_id),
            start_epoch: self.source.now(),
        };
        self.next_id += 1;
        self.live = Some(session);
        debug!(session = session.id.0, "playback session started");
        session
    }

    /// End the live session, if any, and return it.
    pub fn stop(&mut self) -> Option<PlaybackSession> {
        let stopped = self.live.take();
        if let Some(session) = stopped {
            debug!(session = session.id.0, "playback session stopped");
        }
        stopped
    }

    /// Seconds between the session start and `now`.
    ///
    /// Saturates at 0 for readings taken before the session started.
    pub fn elapsed(&self, session: &PlaybackSession, now: Duration) -> f64 {
        now.saturating_sub(session.start_epoch).as_secs_f64()
    }

    /// Seconds elapsed in `session` as of the current time source reading.
    pub fn elapsed_now(&self, session: &PlaybackSession) -> f64 {
        self.elapsed(session, self.source.now())
    }

    /// Whether `session` is the live one.
    pub fn is_live(&self, session: &PlaybackSession) -> bool {
        self.live.map(|live| live.id) == Some(session.id)
    }

    pub fn live_session(&self) -> Option<PlaybackSession> {
        self.live
    }

    pub fn now(&self) -> Duration {
        self.source.now()
    }

    pub fn source(&self) -> &T {
        &self.source
    }
}
