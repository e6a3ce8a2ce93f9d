//! Log output setup.
//!
//! The library only emits `tracing` events; the binary installs a
//! subscriber writing to stderr so log lines never mix with command
//! output on stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive (e.g. `slidesync=debug`).
pub const LOG_ENV: &str = "SLIDESYNC_LOG";

/// Level used for a given number of `-v` flags.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `SLIDESYNC_LOG`, then `RUST_LOG`, then the `-v` level.
pub fn build_filter(verbosity: u8) -> EnvFilter {
    [LOG_ENV, "RUST_LOG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .filter(|directive| !directive.trim().is_empty())
        .find_map(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
