//! slidesync - image slideshows kept in step with an audio track
//!
//! The engine maps slides with individual durations onto a continuous
//! timeline and drives a playback clock that keeps the shown slide and
//! an audio output in lock-step, across stops, replays and edits.
//!
//! - [`slides`]: the ordered, editable slide collection
//! - [`timeline`]: slides to contiguous time intervals
//! - [`player`]: clock, frame scheduler and terminal rendering
//! - [`audio`]: the bound audio source and its output
//! - [`search`]: remote track search for preview clips
//! - [`composer`]: the above wired together

pub mod audio;
pub mod cli;
pub mod composer;
pub mod config;
pub mod logging;
pub mod player;
pub mod search;
pub mod slides;
pub mod timeline;

pub use composer::Composer;
pub use config::Config;
