//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod play;
pub mod search;
pub mod timeline;

use anyhow::{bail, Context, Result};
use tracing::warn;

use slidesync::cli::SlideArgs;
use slidesync::slides::{is_image_path, ImageRef, SlideStore};
use slidesync::Config;

/// Build the slide store from command-line slides and apply the edits.
///
/// Non-image arguments are skipped with a warning. Moves are applied in
/// the order given; removals then refer to positions after the moves.
pub fn build_store(args: &SlideArgs, config: &Config) -> Result<SlideStore> {
    let default = args
        .duration
        .unwrap_or(config.playback.default_slide_seconds);
    let mut store = SlideStore::with_default_duration(default)
        .with_context(|| format!("Invalid slide duration {}", default))?;

    for spec in &args.images {
        if !is_image_path(&spec.path) {
            warn!(path = %spec.path.display(), "skipping non-image argument");
            eprintln!("Skipping {}: not an image file", spec.path.display());
            continue;
        }
        store.insert_many([ImageRef::from_path(&spec.path)]);
        if let Some(seconds) = spec.seconds {
            let index = store.len() - 1;
            store
                .set_duration(index, seconds)
                .with_context(|| format!("Invalid duration for {}", spec.path.display()))?;
        }
    }

    for mv in &args.moves {
        store
            .reorder(mv.from - 1, mv.to - 1)
            .with_context(|| format!("Cannot move slide {} to {}", mv.from, mv.to))?;
    }

    let mut removals = args.removals.clone();
    removals.sort_unstable();
    removals.dedup();
    for &position in removals.iter().rev() {
        if position == 0 {
            bail!("Slide positions start at 1");
        }
        store
            .remove(position - 1)
            .with_context(|| format!("Cannot remove slide {}", position))?;
    }

    Ok(store)
}
