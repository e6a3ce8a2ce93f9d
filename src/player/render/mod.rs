//! Terminal rendering for playback.
//!
//! - `progress`: progress bar with slide boundaries and the `MM:SS` clock
//! - `status`: the single status line drawn once per visible frame change

mod progress;
mod status;

pub use progress::{build_progress_bar_chars, format_clock, render_progress_bar};
pub use status::{count_digits, format_slide_label, StatusLine};
