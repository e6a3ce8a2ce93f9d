//! Timeline construction and time-to-slide resolution.
//!
//! A timeline lays the slides end to end on a single playback axis:
//! each slide owns the half-open interval `[start, end)` and the next
//! slide starts exactly where the previous one ends.
//!
//! Timelines are derived data. They are rebuilt from the slide store
//! whenever needed and a running playback session keeps its own copy,
//! so edits made after playback starts never reach that session.

use crate::slides::{Slide, SlideId};

/// The time span one slide occupies on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Inclusive start, in seconds
    pub start: f64,
    /// Exclusive end, in seconds
    pub end: f64,
    /// Slide shown during this span
    pub slide: SlideId,
}

impl Interval {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t < self.end
    }
}

/// Contiguous, non-overlapping slide intervals plus the total duration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    intervals: Vec<Interval>,
    total: f64,
}

impl Timeline {
    /// Lay out `slides` in order, starting at 0.
    ///
    /// # Arguments
    /// * `slides` - Slides in display order
    ///
    /// # Returns
    /// A timeline with one interval per slide. An empty input yields an
    /// empty timeline with a total of 0.
    pub fn build(slides: &[Slide]) -> Self {
        let mut intervals = Vec::with_capacity(slides.len());
        let mut cumulative = 0.0f64;

        for slide in slides {
            let end = cumulative + slide.duration();
            intervals.push(Interval {
                start: cumulative,
                end,
                slide: slide.id(),
            });
            cumulative = end;
        }

        Self {
            intervals,
            total: cumulative,
        }
    }

    /// Slide shown at time `t`.
    ///
    /// Times at or past the end resolve to the last slide, so the final
    /// image stays up when playback reaches the end instead of blanking.
    /// Returns `None` for an empty timeline and for negative or NaN times.
    pub fn resolve(&self, t: f64) -> Option<SlideId> {
        self.locate(t).map(|(_, interval)| interval.slide)
    }

    /// Like [`resolve`](Self::resolve), but also yields the interval index.
    pub fn locate(&self, t: f64) -> Option<(usize, &Interval)> {
        if self.total <= 0.0 {
            return None;
        }

        let idx = self.intervals.partition_point(|interval| interval.end <= t);
        match self.intervals.get(idx) {
            Some(interval) if interval.start <= t => Some((idx, interval)),
            Some(_) => None,
            None if t >= self.total => {
                let last = self.intervals.len() - 1;
                Some((last, &self.intervals[last]))
            }
            None => None,
        }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Total duration in seconds; 0 when empty.
    pub fn total_seconds(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
