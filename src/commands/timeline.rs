//! Timeline command handler

use anyhow::Result;

use slidesync::cli::SlideArgs;
use slidesync::player::render::format_clock;
use slidesync::slides::SlideStore;
use slidesync::Config;

use super::build_store;

/// Print the slideshow's intervals and total duration.
pub fn handle(args: &SlideArgs) -> Result<()> {
    let config = Config::load()?;
    let store = build_store(args, &config)?;
    print!("{}", render_timeline(&store));
    Ok(())
}

/// Render the timeline as an aligned table.
pub fn render_timeline(store: &SlideStore) -> String {
    let timeline = store.timeline();
    if timeline.is_empty() {
        return "No slides.\n".to_string();
    }

    let mut out = format!(
        "{:>3}  {:>8}  {:>8}  {:>7}  {}\n",
        "#", "START", "END", "SECS", "IMAGE"
    );
    for ((index, interval), slide) in timeline.intervals().iter().enumerate().zip(store.list()) {
        out.push_str(&format!(
            "{:>3}  {:>8.2}  {:>8.2}  {:>7.2}  {}\n",
            index + 1,
            interval.start,
            interval.end,
            interval.duration(),
            slide.image().label()
        ));
    }

    let count = timeline.len();
    out.push_str(&format!(
        "Total: {:.2}s ({}) across {} slide{}\n",
        timeline.total_seconds(),
        format_clock(timeline.total_seconds()),
        count,
        if count == 1 { "" } else { "s" }
    ));
    out
}
