//! Track search.
//!
//! Finds preview clips on a remote music service so one can be bound as
//! the slideshow's audio.
//!
//! - `client`: the [`TrackSearch`] seam and the HTTP [`DeezerClient`]
//! - `record`: [`TrackRecord`] and response decoding
//! - `requests`: [`SearchRequests`], searches on a worker thread with
//!   tokens so only the latest query's results are ever delivered

mod client;
mod error;
mod record;
mod requests;

pub use client::{DeezerClient, TrackSearch};
pub use error::SearchError;
pub use record::{parse_search_response, TrackRecord};
pub use requests::{RequestToken, SearchOutcome, SearchRequests, SearchStatus};
