//! Playback engine.
//!
//! Keeps a rendered frame and an audio output in step with a session
//! clock while a timeline plays from 0 to its end.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `clock`: monotonic time sources, `PlaybackClock` and sessions
//! - `scheduler`: `FrameScheduler`, the `Idle -> Running -> Idle` tick loop
//! - `host`: where scheduling opportunities come from (`FrameHost`)
//! - `frame`: the `Frame` handed to renderers, `FrameSink` and `AudioCue`
//! - `render/`: terminal status line and progress bar
//!
//! # Usage
//!
//! ```no_run
//! use slidesync::player::{CadenceHost, FrameScheduler, MonotonicTime, NoAudio, Frame};
//! use slidesync::slides::{ImageRef, SlideStore};
//!
//! let mut store = SlideStore::new();
//! store.insert_many(vec![ImageRef::new("a.jpg"), ImageRef::new("b.jpg")]);
//!
//! let mut scheduler = FrameScheduler::new(CadenceHost::new(60), MonotonicTime::new());
//! let mut show = |frame: &Frame| println!("{} at {:.2}s", frame.index, frame.elapsed);
//! scheduler.start(store.timeline(), &mut show, &mut NoAudio).unwrap();
//! while let Some(request) = scheduler.host_mut().next_due() {
//!     scheduler.tick(request, &mut show, &mut NoAudio);
//! }
//! ```

mod clock;
mod error;
mod frame;
mod host;
pub mod render;
mod scheduler;

pub use clock::{
    ManualTime, MonotonicTime, PlaybackClock, PlaybackSession, SessionId, TimeSource,
};
pub use error::PlaybackError;
pub use frame::{AudioCue, Frame, FrameSink, NoAudio};
pub use host::{CadenceHost, FrameHost, FrameRequest, ManualHost};
pub use scheduler::{FrameScheduler, SchedulerState, TickOutcome};
