//! Frame hosts: where scheduling opportunities come from.
//!
//! The scheduler never loops on its own. It asks a [`FrameHost`] for the
//! next scheduling opportunity and the host hands the granted request
//! back through `FrameScheduler::tick` when the time comes, one discrete
//! callback per frame on a single thread.

use std::thread;
use std::time::{Duration, Instant};

use tracing::trace;

/// Handle for one requested scheduling opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(u64);

impl FrameRequest {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Provider of per-frame scheduling opportunities.
pub trait FrameHost {
    /// Ask for one future tick.
    fn request_frame(&mut self) -> FrameRequest;

    /// Withdraw a request. After this returns the host must not deliver it.
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Fixed-cadence host for terminal playback.
///
/// Holds at most one outstanding request and delivers it when its
/// deadline, one frame interval after the request, has passed.
#[derive(Debug)]
pub struct CadenceHost {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameRequest, Instant)>,
}

impl CadenceHost {
    /// Create a host ticking `frame_rate` times per second (minimum 1).
    pub fn new(frame_rate: u32) -> Self {
        let rate = frame_rate.max(1);
        Self {
            interval: Duration::from_secs_f64(1.0 / f64::from(rate)),
            next_id: 1,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending.map(|(request, _)| request)
    }

    /// Block until the outstanding request is due and hand it out.
    ///
    /// Returns `None` right away when nothing is outstanding, which is how
    /// a playback loop learns that the scheduler went idle.
    pub fn next_due(&mut self) -> Option<FrameRequest> {
        let (request, deadline) = self.pending.take()?;
        let wait = deadline.saturating_duration_since(Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        Some(request)
    }
}

impl FrameHost for CadenceHost {
    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_id);
        self.next_id += 1;
        self.pending = Some((request, Instant::now() + self.interval));
        trace!(request = request.0, "frame requested");
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending() == Some(request) {
            self.pending = None;
            trace!(request = request.0, "frame cancelled");
        }
    }
}

/// Host whose requests are delivered by hand.
///
/// Useful when the embedding environment owns the frame loop, and for
/// tests that need to control exactly when and which ticks fire.
#[derive(Debug, Default)]
pub struct ManualHost {
    next_id: u64,
    pending: Vec<FrameRequest>,
    cancelled: Vec<FrameRequest>,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest outstanding request.
    pub fn take_pending(&mut self) -> Option<FrameRequest> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    /// Outstanding requests, oldest first.
    pub fn pending(&self) -> &[FrameRequest] {
        &self.pending
    }

    /// Every request cancelled so far.
    pub fn cancelled(&self) -> &[FrameRequest] {
        &self.cancelled
    }
}

impl FrameHost for ManualHost {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.pending.retain(|pending| *pending != request);
        self.cancelled.push(request);
    }
}
