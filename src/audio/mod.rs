//! Audio track binding.
//!
//! One [`AudioSource`] at a time is bound to an [`AudioOutput`] through an
//! [`AudioBinding`], which starts and stops it in step with the frame
//! scheduler. Audio never holds up the visuals: load or play failures are
//! logged and playback carries on silently.
//!
//! Outputs:
//! - [`SilentOutput`]: plays nothing, always available
//! - `RodioOutput`: real playback through `rodio` (feature `audio`)

mod binding;
mod error;
mod output;
#[cfg(feature = "audio")]
mod rodio_output;
mod source;

pub use binding::AudioBinding;
pub use error::AudioError;
pub use output::{AudioOutput, SilentOutput};
#[cfg(feature = "audio")]
pub use rodio_output::RodioOutput;
pub use source::{is_audio_path, AudioKind, AudioSource};
