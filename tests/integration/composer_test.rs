//! Integration tests for playback through the composer

use std::cell::RefCell;
use std::rc::Rc;

use slidesync::audio::{AudioError, AudioOutput, AudioSource};
use slidesync::player::{Frame, ManualHost, ManualTime, PlaybackError, TickOutcome};
use slidesync::slides::{ImageRef, SlideId, SlideStore};
use slidesync::Composer;

/// Audio output that appends every call to a shared log.
#[derive(Clone, Default)]
struct LoggedOutput {
    log: Rc<RefCell<Vec<String>>>,
    fail_play: bool,
}

impl LoggedOutput {
    fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    fn push(&self, call: String) {
        self.log.borrow_mut().push(call);
    }
}

impl AudioOutput for LoggedOutput {
    fn set_source(&mut self, uri: &str) -> Result<(), AudioError> {
        self.push(format!("set_source {}", uri));
        Ok(())
    }

    fn play(&mut self) -> Result<(), AudioError> {
        self.push("play".to_string());
        if self.fail_play {
            return Err(AudioError::PlaybackFailed("device busy".to_string()));
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        self.push("pause".to_string());
        Ok(())
    }

    fn reset_position(&mut self) -> Result<(), AudioError> {
        self.push("reset".to_string());
        Ok(())
    }

    fn release(&mut self, uri: &str) {
        self.push(format!("release {}", uri));
    }
}

type TestComposer = Composer<LoggedOutput, ManualHost, ManualTime>;

struct Harness {
    composer: TestComposer,
    time: ManualTime,
    output: LoggedOutput,
    ids: Vec<SlideId>,
}

fn harness(durations: &[f64]) -> Harness {
    harness_with(durations, LoggedOutput::default())
}

fn harness_with(durations: &[f64], output: LoggedOutput) -> Harness {
    let mut store = SlideStore::new();
    let ids = store.insert_many(
        (0..durations.len())
            .map(|i| ImageRef::new(format!("photos/{}.jpg", i)))
            .collect::<Vec<_>>(),
    );
    for (i, seconds) in durations.iter().enumerate() {
        store.set_duration(i, *seconds).unwrap();
    }
    let time = ManualTime::new();
    let composer = Composer::new(store, output.clone(), ManualHost::new(), time.clone());
    Harness {
        composer,
        time,
        output,
        ids,
    }
}

/// Deliver the next outstanding request, if any.
fn step(h: &mut Harness, frames: &mut Vec<Frame>) -> Option<TickOutcome> {
    let request = h.composer.host_mut().take_pending()?;
    let mut sink = |frame: &Frame| frames.push(*frame);
    Some(h.composer.tick(request, &mut sink))
}

#[test]
fn frames_follow_the_clock_across_slides() {
    let mut h = harness(&[3.0, 5.0, 2.0]);
    let mut frames = Vec::new();
    {
        let mut sink = |frame: &Frame| frames.push(*frame);
        h.composer.play(&mut sink).unwrap();
    }

    for at in [2.9, 3.0, 7.99, 8.0, 9.5, 12.0] {
        h.time.set(std::time::Duration::from_secs_f64(at));
        step(&mut h, &mut frames);
    }

    let shown: Vec<SlideId> = frames.iter().map(|f| f.slide).collect();
    let ids = &h.ids;
    assert_eq!(
        shown,
        vec![ids[0], ids[0], ids[1], ids[1], ids[2], ids[2], ids[2]]
    );
    assert!(frames.last().unwrap().is_final());
    assert!(!h.composer.is_running());
    assert!(h.composer.host_mut().take_pending().is_none());
}

#[test]
fn audio_starts_once_and_stops_once_per_session() {
    let mut h = harness(&[1.0]);
    h.composer
        .bind_audio(Some(AudioSource::local("music/song.mp3", "song.mp3")));
    let mut frames = Vec::new();
    {
        let mut sink = |frame: &Frame| frames.push(*frame);
        h.composer.play(&mut sink).unwrap();
    }

    h.time.advance_secs(0.5);
    step(&mut h, &mut frames);
    h.time.advance_secs(0.6);
    assert_eq!(step(&mut h, &mut frames), Some(TickOutcome::Finished));

    assert_eq!(
        h.output.calls(),
        vec!["set_source music/song.mp3", "play", "pause", "reset"]
    );
}

#[test]
fn restart_cancels_previous_session() {
    let mut h = harness(&[3.0, 5.0]);
    let mut frames = Vec::new();
    {
        let mut sink = |frame: &Frame| frames.push(*frame);
        h.composer.play(&mut sink).unwrap();
    }
    h.time.advance_secs(4.0);
    let old_request = h.composer.host_mut().take_pending().unwrap();

    frames.clear();
    {
        let mut sink = |frame: &Frame| frames.push(*frame);
        h.composer.play(&mut sink).unwrap();
    }
    // The new session starts at 0 on the first slide.
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].elapsed, 0.0);
    assert_eq!(frames[0].slide, h.ids[0]);

    let mut sink = |frame: &Frame| frames.push(*frame);
    assert_eq!(h.composer.tick(old_request, &mut sink), TickOutcome::Stale);
    assert_eq!(frames.len(), 1);
    assert!(h.composer.is_running());
}

#[test]
fn stop_is_final_and_idempotent() {
    let mut h = harness(&[3.0]);
    let mut frames = Vec::new();
    {
        let mut sink = |frame: &Frame| frames.push(*frame);
        h.composer.play(&mut sink).unwrap();
    }
    let pending = h.composer.scheduler().pending().unwrap();

    assert!(h.composer.stop());
    assert!(!h.composer.stop());

    let mut sink = |frame: &Frame| frames.push(*frame);
    assert_eq!(h.composer.tick(pending, &mut sink), TickOutcome::Stale);
    assert_eq!(frames.len(), 1);
    assert_eq!(h.output.calls(), vec!["pause", "reset"]);
}

#[test]
fn edits_only_apply_to_the_next_play() {
    let mut h = harness(&[3.0, 5.0, 2.0]);
    let mut frames = Vec::new();
    {
        let mut sink = |frame: &Frame| frames.push(*frame);
        h.composer.play(&mut sink).unwrap();
    }

    h.composer.store_mut().reorder(0, 2).unwrap();
    h.composer.store_mut().set_duration(0, 1.0).unwrap();
    h.time.set(std::time::Duration::from_secs_f64(4.0));
    step(&mut h, &mut frames);

    // Running session still uses [3, 5, 2]: t=4 is the second slide.
    assert_eq!(frames.last().unwrap().slide, h.ids[1]);
    assert_eq!(frames.last().unwrap().total, 10.0);

    h.composer.stop();
    frames.clear();
    {
        let mut sink = |frame: &Frame| frames.push(*frame);
        h.composer.play(&mut sink).unwrap();
    }
    // New order [B(1s), C(2s), A(3s)]
    assert_eq!(frames[0].slide, h.ids[1]);
    assert_eq!(frames[0].total, 6.0);
}

#[test]
fn empty_store_cannot_play() {
    let mut h = harness(&[]);
    let mut sink = |_: &Frame| {};
    assert_eq!(h.composer.play(&mut sink), Err(PlaybackError::EmptyTimeline));
    assert!(h.output.calls().is_empty());
}

#[test]
fn audio_failure_does_not_stop_visuals() {
    let output = LoggedOutput {
        fail_play: true,
        ..Default::default()
    };
    let mut h = harness_with(&[1.0, 1.0], output);
    h.composer
        .bind_audio(Some(AudioSource::remote_preview("https://cdn.example/p.mp3", "p")));
    let mut frames = Vec::new();
    {
        let mut sink = |frame: &Frame| frames.push(*frame);
        h.composer.play(&mut sink).unwrap();
    }

    assert!(h.composer.is_running());
    assert!(h.composer.audio().last_failure().is_some());

    h.time.advance_secs(1.5);
    step(&mut h, &mut frames);
    assert_eq!(frames.last().unwrap().slide, h.ids[1]);
}

#[test]
fn replacing_local_audio_releases_previous() {
    let mut h = harness(&[1.0]);
    h.composer
        .bind_audio(Some(AudioSource::local("first.mp3", "first")));
    h.composer
        .bind_audio(Some(AudioSource::local("second.mp3", "second")));

    assert_eq!(h.output.calls(), vec!["release first.mp3"]);
    assert_eq!(h.composer.audio().source().unwrap().uri, "second.mp3");
}

/// Output whose loading takes two seconds of clock time.
struct SlowLoadOutput {
    time: ManualTime,
    log: Rc<RefCell<Vec<String>>>,
}

impl AudioOutput for SlowLoadOutput {
    fn set_source(&mut self, uri: &str) -> Result<(), AudioError> {
        self.time.advance_secs(2.0);
        self.log.borrow_mut().push(format!("set_source {}", uri));
        Ok(())
    }

    fn play(&mut self) -> Result<(), AudioError> {
        self.log.borrow_mut().push("play".to_string());
        Ok(())
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn reset_position(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

#[test]
fn slow_audio_load_does_not_skip_ahead() {
    let mut store = SlideStore::new();
    let ids = store.insert_many(vec![ImageRef::new("a.jpg"), ImageRef::new("b.jpg")]);
    store.set_duration(0, 1.5).unwrap();
    store.set_duration(1, 3.0).unwrap();

    let time = ManualTime::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let output = SlowLoadOutput {
        time: time.clone(),
        log: Rc::clone(&log),
    };
    let mut composer = Composer::new(store, output, ManualHost::new(), time.clone());
    composer.bind_audio(Some(AudioSource::remote_preview("https://cdn.example/p.mp3", "p")));

    let mut frames = Vec::new();
    {
        let mut sink = |frame: &Frame| frames.push(*frame);
        composer.play(&mut sink).unwrap();
    }

    // Audio and visuals both start at 0 on the first slide.
    assert_eq!(
        *log.borrow(),
        vec!["set_source https://cdn.example/p.mp3", "play"]
    );
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].elapsed, 0.0);
    assert_eq!(frames[0].slide, ids[0]);
    assert!(composer.is_running());
}
