//! Progress bar rendering for terminal playback.
//!
//! Displays the playhead position with slide boundary indicators.

/// ANSI color codes used by the bar.
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const WHITE: &str = "\x1b[97m";
const DARK_GREY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Playhead glyph
const PLAYHEAD: char = '⏺';
/// Slide boundary glyph
const BOUNDARY: char = '│';
/// Unplayed track glyph
const TRACK: char = '─';

/// Format a time in seconds as `MM:SS`.
///
/// Minutes are not wrapped at 60, fractional seconds are truncated and
/// negative input formats as zero.
///
/// # Arguments
/// * `seconds` - Time in seconds
///
/// # Returns
/// A string in MM:SS format
pub fn format_clock(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `elapsed` - Current playback time
/// * `total` - Total duration of the timeline
/// * `boundaries` - Times where one slide hands over to the next
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_progress_bar_chars(
    bar_width: usize,
    elapsed: f64,
    total: f64,
    boundaries: &[f64],
) -> (Vec<char>, usize) {
    let progress = if total > 0.0 {
        (elapsed / total).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec![TRACK; bar_width];

    if filled < bar_width {
        bar[filled] = PLAYHEAD;
    }

    if total > 0.0 {
        for &time in boundaries {
            let pos = ((time / total) * bar_width as f64) as usize;
            if pos > 0 && pos < bar_width && bar[pos] != PLAYHEAD {
                bar[pos] = BOUNDARY;
            }
        }
    }

    (bar, filled)
}

/// Render the progress bar followed by `elapsed / total` as one colored string.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `elapsed` - Current playback time
/// * `total` - Total duration of the timeline
/// * `boundaries` - Slide boundary times
pub fn render_progress_bar(bar_width: usize, elapsed: f64, total: f64, boundaries: &[f64]) -> String {
    let (bar, filled) = build_progress_bar_chars(bar_width, elapsed, total, boundaries);

    let mut output = String::with_capacity(bar_width * 4 + 32);
    output.push_str(GREEN);
    for (i, &c) in bar.iter().enumerate() {
        if i < filled {
            if c == BOUNDARY {
                output.push_str(YELLOW);
                output.push(c);
                output.push_str(GREEN);
            } else {
                output.push('━');
            }
        } else if i == filled {
            output.push_str(WHITE);
            output.push(c);
        } else if c == BOUNDARY {
            output.push_str(YELLOW);
            output.push(c);
        } else {
            output.push_str(DARK_GREY);
            output.push(c);
        }
    }
    output.push_str(RESET);
    output.push_str(&format!(
        " {} / {}",
        format_clock(elapsed.min(total)),
        format_clock(total)
    ));
    output
}
