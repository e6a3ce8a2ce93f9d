//! Ordered, mutable slide collection.

use tracing::debug;

use super::error::StoreError;
use super::slide::{is_valid_duration, ImageRef, Slide, SlideId, DEFAULT_SLIDE_SECONDS};
use crate::timeline::Timeline;

/// The ordered slide collection feeding the timeline.
///
/// All mutations are synchronous. Every effective mutation bumps
/// [`revision`](Self::revision), so a consumer holding a timeline built at
/// an older revision knows it has to rebuild.
#[derive(Debug, Clone)]
pub struct SlideStore {
    slides: Vec<Slide>,
    default_duration: f64,
    revision: u64,
}

impl SlideStore {
    /// Create an empty store using the 3 second default duration.
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            default_duration: DEFAULT_SLIDE_SECONDS,
            revision: 0,
        }
    }

    /// Create an empty store whose inserted slides start at `seconds`.
    pub fn with_default_duration(seconds: f64) -> Result<Self, StoreError> {
        if !is_valid_duration(seconds) {
            return Err(StoreError::InvalidDuration(seconds));
        }
        Ok(Self {
            default_duration: seconds,
            ..Self::new()
        })
    }

    /// Append one slide per image, in order, with the default duration.
    ///
    /// Returns the ids of the new slides.
    pub fn insert_many<I>(&mut self, items: I) -> Vec<SlideId>
    where
        I: IntoIterator<Item = ImageRef>,
    {
        let before = self.slides.len();
        let duration = self.default_duration;
        self.slides
            .extend(items.into_iter().map(|image| Slide::new(image, duration)));
        let added: Vec<SlideId> = self.slides[before..].iter().map(Slide::id).collect();
        if !added.is_empty() {
            self.bump();
            debug!(added = added.len(), total = self.slides.len(), "slides inserted");
        }
        added
    }

    /// Remove the slide at `index` and hand it back.
    ///
    /// The image locator is returned untouched; releasing it is the
    /// caller's business.
    pub fn remove(&mut self, index: usize) -> Result<Slide, StoreError> {
        self.check_index(index)?;
        let slide = self.slides.remove(index);
        self.bump();
        debug!(index, id = %slide.id, "slide removed");
        Ok(slide)
    }

    /// Move the slide at `from` so that it ends up at position `to`.
    ///
    /// `[A, B, C]` with `reorder(0, 2)` becomes `[B, C, A]`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }
        let slide = self.slides.remove(from);
        self.slides.insert(to, slide);
        self.bump();
        debug!(from, to, "slide reordered");
        Ok(())
    }

    /// Change the display duration of the slide at `index`.
    pub fn set_duration(&mut self, index: usize, seconds: f64) -> Result<(), StoreError> {
        self.check_index(index)?;
        if !is_valid_duration(seconds) {
            return Err(StoreError::InvalidDuration(seconds));
        }
        let slide = &mut self.slides[index];
        if slide.duration != seconds {
            slide.duration = seconds;
            self.bump();
            debug!(index, seconds, "slide duration changed");
        }
        Ok(())
    }

    /// Current slides in display order.
    pub fn list(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Position of the slide with `id`, if it is still in the store.
    pub fn position(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Duration applied to newly inserted slides.
    pub fn default_duration(&self) -> f64 {
        self.default_duration
    }

    /// Sum of all current slide durations.
    pub fn total_seconds(&self) -> f64 {
        self.slides.iter().map(Slide::duration).sum()
    }

    /// Build a timeline from the current contents.
    pub fn timeline(&self) -> Timeline {
        Timeline::build(&self.slides)
    }

    /// Mutation counter; changes whenever the contents change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.slides.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.slides.len(),
            })
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

impl Default for SlideStore {
    fn default() -> Self {
        Self::new()
    }
}
