//! Slide model and the ordered slide store.
//!
//! - `slide`: `Slide`, `SlideId` and the opaque `ImageRef` locator
//! - `store`: `SlideStore`, the mutable collection the timeline is built from
//! - `error`: `StoreError`

mod error;
mod slide;
mod store;

pub use error::StoreError;
pub use slide::{is_image_path, is_valid_duration, ImageRef, Slide, SlideId, DEFAULT_SLIDE_SECONDS};
pub use store::SlideStore;
