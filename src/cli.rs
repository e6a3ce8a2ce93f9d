//! Command-line interface definition.
//!
//! Lives in the library so the man page generator can reuse it.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string with build date and, for dev builds, the git commit.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SLIDESYNC_BUILD_DATE"),
    " ",
    env!("VERGEN_GIT_SHA"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SLIDESYNC_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "slidesync")]
#[command(version = VERSION)]
#[command(about = "Compose image slideshows and play them in step with an audio track")]
#[command(
    long_about = "Compose image slideshows and play them in step with an audio track.\n\n\
    Each image is shown for its own duration (3 seconds unless configured).\n\
    Audio can come from a local file or from a short preview clip found\n\
    through track search."
)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a slideshow in the terminal
    #[command(long_about = "Play a slideshow in the terminal.\n\n\
        Shows the current slide and a progress bar with slide boundaries.\n\
        Press Ctrl+C to stop.\n\n\
        EXAMPLES:\n  \
        slidesync play a.jpg b.jpg:5 c.png --audio song.mp3\n  \
        slidesync play *.jpg --duration 2 --track \"daft punk\" --pick 2")]
    Play(PlayArgs),

    /// Print the timeline of a slideshow without playing it
    #[command(long_about = "Print the timeline of a slideshow without playing it.\n\n\
        Lists each slide's start and end time and the total duration.\n\n\
        EXAMPLE:\n  \
        slidesync timeline a.jpg:3 b.jpg:5 c.jpg:2 --move 3:1")]
    Timeline(SlideArgs),

    /// Search for tracks with a preview clip
    Search {
        /// Free-text query (title, artist, ...)
        query: String,

        /// Maximum number of results to show
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Slides and edits shared by `play` and `timeline`.
#[derive(Args, Debug, Clone)]
pub struct SlideArgs {
    /// Images in order, each optionally with its own duration (photo.jpg:5)
    #[arg(required = true, value_name = "IMAGE[:SECS]")]
    pub images: Vec<SlideSpec>,

    /// Duration for images given without one, in seconds
    #[arg(short, long, value_name = "SECS")]
    pub duration: Option<f64>,

    /// Move the slide at position FROM to position TO (1-based, repeatable)
    #[arg(long = "move", value_name = "FROM:TO")]
    pub moves: Vec<MoveSpec>,

    /// Remove the slide at position N (1-based, after moves, repeatable)
    #[arg(long = "remove", value_name = "N")]
    pub removals: Vec<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub slides: SlideArgs,

    /// Local audio file to play along
    #[arg(short, long, value_name = "FILE", conflicts_with = "track")]
    pub audio: Option<PathBuf>,

    /// Search for a track and play its preview clip
    #[arg(short, long, value_name = "QUERY")]
    pub track: Option<String>,

    /// Which search result to use with --track (1-based)
    #[arg(long, value_name = "N", default_value_t = 1, requires = "track")]
    pub pick: usize,
}

/// An image argument: `path` or `path:seconds`.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSpec {
    pub path: PathBuf,
    pub seconds: Option<f64>,
}

impl FromStr for SlideSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("image path is empty".to_string());
        }
        // Only a numeric suffix counts as a duration, so paths containing
        // ':' (drive letters, URLs) pass through untouched.
        if let Some((path, secs)) = s.rsplit_once(':') {
            if let Ok(seconds) = secs.parse::<f64>() {
                if path.is_empty() {
                    return Err(format!("'{}' has a duration but no image path", s));
                }
                return Ok(Self {
                    path: PathBuf::from(path),
                    seconds: Some(seconds),
                });
            }
        }
        Ok(Self {
            path: PathBuf::from(s),
            seconds: None,
        })
    }
}

/// A `FROM:TO` move of slide positions (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSpec {
    pub from: usize,
    pub to: usize,
}

impl FromStr for MoveSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once(':')
            .ok_or_else(|| format!("expected FROM:TO, got '{}'", s))?;
        let parse = |part: &str| -> Result<usize, String> {
            match part.trim().parse::<usize>() {
                Ok(n) if n >= 1 => Ok(n),
                _ => Err(format!("'{}' is not a slide position (1, 2, ...)", part)),
            }
        };
        Ok(Self {
            from: parse(from)?,
            to: parse(to)?,
        })
    }
}
