//! Single-line status rendering for terminal playback.
//!
//! Shows which slide is on screen, its position, and the progress bar.

use std::collections::HashMap;
use std::io::Write;

use tracing::warn;

use super::progress::render_progress_bar;
use crate::player::frame::{Frame, FrameSink};
use crate::slides::{SlideId, SlideStore};

/// Columns reserved for the slide label and counter.
const LABEL_COLUMNS: usize = 32;
/// Narrowest progress bar worth drawing.
const MIN_BAR_WIDTH: usize = 10;

/// Count digits in a number (for width calculation).
#[inline]
pub fn count_digits(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        (n as f64).log10().floor() as usize + 1
    }
}

/// Build the plain-text head of the status line: `[ 2/12] beach.jpg`.
///
/// The counter is padded to the width of `count` so the line does not
/// jitter as the index grows, and long labels are cut with `…`.
pub fn format_slide_label(index: usize, count: usize, label: &str, max_chars: usize) -> String {
    let width = count_digits(count);
    let counter = format!("[{:>width$}/{}]", index + 1, count, width = width);
    let room = max_chars.saturating_sub(counter.chars().count() + 1);
    let label: String = if label.chars().count() > room {
        let mut cut: String = label.chars().take(room.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        label.to_string()
    };
    format!("{} {}", counter, label)
}

/// [`FrameSink`] that redraws one terminal line per visible change.
pub struct StatusLine<W: Write> {
    out: W,
    labels: HashMap<SlideId, String>,
    boundaries: Vec<f64>,
    bar_width: usize,
    last_drawn: Option<(usize, u64, usize)>,
    failed: bool,
}

impl<W: Write> StatusLine<W> {
    /// Create a status line for the slides currently in `store`.
    ///
    /// # Arguments
    /// * `out` - Where to draw (usually stdout)
    /// * `store` - Slides being played, for labels and boundaries
    /// * `width` - Terminal width in columns
    pub fn new(out: W, store: &SlideStore, width: usize) -> Self {
        let labels = store
            .list()
            .iter()
            .map(|slide| (slide.id(), slide.image().label().to_string()))
            .collect();
        let boundaries = store
            .timeline()
            .intervals()
            .iter()
            .skip(1)
            .map(|interval| interval.start)
            .collect();
        // label + space + bar + " MM:SS / MM:SS"
        let bar_width = width
            .saturating_sub(LABEL_COLUMNS + 1 + 14)
            .max(MIN_BAR_WIDTH);

        Self {
            out,
            labels,
            boundaries,
            bar_width,
            last_drawn: None,
            failed: false,
        }
    }

    /// Compose the full line for `frame`, without control sequences.
    pub fn compose(&self, frame: &Frame) -> String {
        let label = self
            .labels
            .get(&frame.slide)
            .map(String::as_str)
            .unwrap_or("image");
        let head = format_slide_label(frame.index, frame.count, label, LABEL_COLUMNS);
        let bar = render_progress_bar(self.bar_width, frame.elapsed, frame.total, &self.boundaries);
        format!("{:<width$} {}", head, bar, width = LABEL_COLUMNS)
    }

    /// End the line so later output starts on a fresh row.
    pub fn finish(&mut self) {
        if self.last_drawn.take().is_some() {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, frame: &Frame) -> std::io::Result<()> {
        let line = self.compose(frame);
        write!(self.out, "\r\x1b[2K{}", line)?;
        self.out.flush()
    }
}

impl<W: Write> FrameSink for StatusLine<W> {
    fn on_frame(&mut self, frame: &Frame) {
        // Only redraw when something visible changed.
        let filled = (frame.progress() * self.bar_width as f64) as usize;
        let key = (frame.index, frame.elapsed.min(frame.total) as u64, filled);
        if self.last_drawn == Some(key) {
            return;
        }
        self.last_drawn = Some(key);

        if let Err(err) = self.draw(frame) {
            if !self.failed {
                warn!(error = %err, "failed to draw status line");
                self.failed = true;
            }
        }
    }
}
