//! Play command handler

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use terminal_size::{terminal_size, Width};
use tracing::{info, warn};

use slidesync::audio::{AudioOutput, AudioSource, SilentOutput};
use slidesync::cli::PlayArgs;
use slidesync::player::render::StatusLine;
use slidesync::player::{CadenceHost, FrameSink, MonotonicTime, TickOutcome};
use slidesync::search::DeezerClient;
use slidesync::slides::SlideStore;
use slidesync::{Composer, Config};

use super::build_store;
use super::search::{pick_record, run_search};

/// How a playback run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEnd {
    /// Played through to the end of the timeline
    Finished,
    /// Stopped early by Ctrl+C
    Interrupted,
}

/// Play the slideshow in the terminal until it ends or Ctrl+C.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    let config = Config::load()?;
    let store = build_store(&args.slides, &config)?;
    let source = resolve_audio(&args, &config)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("Failed to install Ctrl+C handler")?;

    let width = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(80);
    let mut status = StatusLine::new(io::stdout(), &store, width);
    let frame_rate = config.playback.frame_rate;

    // The device is only opened when there is something to play on it.
    #[cfg(feature = "audio")]
    let end = match source.as_ref().map(|_| slidesync::audio::RodioOutput::new()) {
        Some(Ok(output)) => {
            play_with(output, store, source, frame_rate, &mut status, &interrupted)
        }
        Some(Err(err)) => {
            warn!(error = %err, "no audio device, playing without sound");
            eprintln!("Audio unavailable ({}); playing without sound", err);
            play_with(SilentOutput::new(), store, source, frame_rate, &mut status, &interrupted)
        }
        None => play_with(SilentOutput::new(), store, None, frame_rate, &mut status, &interrupted),
    };

    #[cfg(not(feature = "audio"))]
    let end = {
        if source.is_some() {
            warn!("built without audio support, playing without sound");
            eprintln!("Built without audio support; playing without sound");
        }
        play_with(SilentOutput::new(), store, source, frame_rate, &mut status, &interrupted)
    };

    status.finish();
    match end? {
        PlayEnd::Finished => println!("Done."),
        PlayEnd::Interrupted => println!("Stopped."),
    }
    Ok(())
}

fn play_with<O: AudioOutput>(
    output: O,
    store: SlideStore,
    source: Option<AudioSource>,
    frame_rate: u32,
    status: &mut StatusLine<Stdout>,
    interrupted: &AtomicBool,
) -> Result<PlayEnd> {
    let mut composer = Composer::new(
        store,
        output,
        CadenceHost::new(frame_rate),
        MonotonicTime::new(),
    );
    composer.bind_audio(source);
    run(&mut composer, status, interrupted)
}

/// Work out the audio source from `--audio` or `--track`.
fn resolve_audio(args: &PlayArgs, config: &Config) -> Result<Option<AudioSource>> {
    if let Some(path) = &args.audio {
        if !path.exists() {
            bail!("Audio file not found: {}", path.display());
        }
        let source = AudioSource::from_local_file(path)?;
        return Ok(Some(source));
    }

    let Some(query) = &args.track else {
        return Ok(None);
    };
    let client = DeezerClient::from_config(&config.search)?;
    let records = run_search(client, query)
        .with_context(|| format!("Search for \"{}\" failed", query))?;
    let record = pick_record(&records, args.pick)?;
    let source = record.to_audio_source()?;
    println!("Audio: {}", source.label);
    Ok(Some(source))
}

/// Drive `composer` from start to finish on its cadence host.
///
/// Checks `interrupted` before every frame and stops playback (audio
/// included) as soon as it is set.
pub fn run<O, S>(
    composer: &mut Composer<O, CadenceHost, MonotonicTime>,
    sink: &mut S,
    interrupted: &AtomicBool,
) -> Result<PlayEnd>
where
    O: AudioOutput,
    S: FrameSink + ?Sized,
{
    if let TickOutcome::Finished = composer.play(sink)? {
        return Ok(PlayEnd::Finished);
    }

    while let Some(request) = composer.host_mut().next_due() {
        if interrupted.load(Ordering::SeqCst) {
            composer.stop();
            info!("playback interrupted");
            return Ok(PlayEnd::Interrupted);
        }
        if composer.tick(request, sink) == TickOutcome::Finished {
            break;
        }
    }
    Ok(PlayEnd::Finished)
}
