//! Integration tests for the slidesync CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, run_slidesync};

/// Temp dir plus a config path inside it that does not exist yet.
fn isolated_config() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    (dir, path)
}

fn slidesync(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("slidesync").unwrap();
    cmd.env("SLIDESYNC_CONFIG", config)
        .env_remove("SLIDESYNC_LOG")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (_dir, config) = isolated_config();
    slidesync(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("timeline"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_includes_package_version() {
    let (_dir, config) = isolated_config();
    slidesync(&config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "slidesync {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn play_help_shows_audio_options() {
    let (_dir, config) = isolated_config();
    let (stdout, _stderr, exit_code) = run_slidesync(&["play", "--help"], &config);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("IMAGE[:SECS]"));
    assert!(stdout.contains("--audio"));
    assert!(stdout.contains("--track"));
    assert!(stdout.contains("--pick"));
}

// ============================================================================
// Timeline
// ============================================================================

#[test]
fn timeline_prints_intervals_and_total() {
    let (_dir, config) = isolated_config();
    let (stdout, _stderr, exit_code) =
        run_slidesync(&["timeline", "a.jpg:3", "b.jpg:5", "c.jpg:2"], &config);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("  2      3.00      8.00     5.00  b.jpg"));
    assert!(stdout.contains("Total: 10.00s (00:10) across 3 slides"));
}

#[test]
fn timeline_applies_move_and_remove() {
    let (_dir, config) = isolated_config();
    let (stdout, _stderr, exit_code) = run_slidesync(
        &[
            "timeline", "a.jpg:3", "b.jpg:5", "c.jpg:2", "--move", "1:3", "--remove", "1",
        ],
        &config,
    );

    // [a b c] -> move 1:3 -> [b c a] -> remove 1 -> [c a]
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("  1      0.00      2.00     2.00  c.jpg"));
    assert!(stdout.contains("  2      2.00      5.00     3.00  a.jpg"));
    assert!(stdout.contains("across 2 slides"));
}

#[test]
fn timeline_uses_duration_flag_for_plain_images() {
    let (_dir, config) = isolated_config();
    let (stdout, _stderr, exit_code) =
        run_slidesync(&["timeline", "a.jpg", "b.jpg:1", "--duration", "4"], &config);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Total: 5.00s (00:05) across 2 slides"));
}

#[test]
fn timeline_skips_non_images_with_warning() {
    let (_dir, config) = isolated_config();
    let (stdout, stderr, exit_code) =
        run_slidesync(&["timeline", "notes.txt", "a.png"], &config);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("Skipping notes.txt"));
    assert!(stdout.contains("across 1 slide\n"));
}

#[test]
fn timeline_uses_configured_default_duration() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[playback]\ndefault_slide_seconds = 2.5\n").unwrap();

    let (stdout, _stderr, exit_code) = run_slidesync(&["timeline", "a.jpg", "b.jpg"], &config);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Total: 5.00s"));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn timeline_without_images_is_usage_error() {
    let (_dir, config) = isolated_config();
    let (_stdout, stderr, exit_code) = run_slidesync(&["timeline"], &config);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required"));
}

#[test]
fn out_of_range_move_fails() {
    let (_dir, config) = isolated_config();
    let (_stdout, stderr, exit_code) =
        run_slidesync(&["timeline", "a.jpg", "--move", "1:2"], &config);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Cannot move slide 1 to 2"));
}

#[test]
fn invalid_slide_duration_fails() {
    let (_dir, config) = isolated_config();
    let (_stdout, stderr, exit_code) = run_slidesync(&["timeline", "a.jpg:0"], &config);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid duration for a.jpg"));
}

#[test]
fn play_with_no_images_reports_empty_timeline() {
    let (_dir, config) = isolated_config();
    slidesync(&config)
        .args(["play", "notes.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Nothing to play"));
}

#[test]
fn play_with_missing_audio_file_fails() {
    let (_dir, config) = isolated_config();
    slidesync(&config)
        .args(["play", "a.jpg", "--audio", "/nonexistent/song.mp3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Audio file not found"));
}

#[test]
fn play_with_non_audio_file_fails() {
    let (_dir, config) = isolated_config();
    let notes = fixtures_dir().join("config_partial.toml");
    slidesync(&config)
        .args(["play", "a.jpg", "--audio"])
        .arg(&notes)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported audio format"));
}

#[test]
fn audio_and_track_are_exclusive() {
    let (_dir, config) = isolated_config();
    let (_stdout, stderr, exit_code) = run_slidesync(
        &["play", "a.jpg", "--audio", "x.mp3", "--track", "abba"],
        &config,
    );

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn blank_search_query_fails_without_network() {
    let (_dir, config) = isolated_config();
    slidesync(&config)
        .args(["search", "   "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Search query is empty"));
}

// ============================================================================
// Playback
// ============================================================================

#[test]
fn play_runs_to_completion() {
    let (_dir, config) = isolated_config();
    slidesync(&config)
        .args(["play", "a.jpg:0.1", "b.jpg:0.1"])
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stdout(predicate::str::contains("b.jpg"))
        .stdout(predicate::str::contains("Done."));
}

#[test]
fn play_without_audio_never_mentions_sound() {
    let (_dir, config) = isolated_config();
    slidesync(&config)
        .args(["play", "a.jpg:0.1"])
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stderr(predicate::str::contains("without sound").not())
        .stderr(predicate::str::contains("Audio unavailable").not());
}

// ============================================================================
// Config and Completions
// ============================================================================

#[test]
fn config_path_honours_override() {
    let (_dir, config) = isolated_config();
    let (stdout, _stderr, exit_code) = run_slidesync(&["config", "path"], &config);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), config.display().to_string());
}

#[test]
fn config_init_writes_once() {
    let (_dir, config) = isolated_config();

    let (_stdout, _stderr, exit_code) = run_slidesync(&["config", "init"], &config);
    assert_eq!(exit_code, 0);
    assert!(config.exists());

    let (_stdout, stderr, exit_code) = run_slidesync(&["config", "init"], &config);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("already exists"));

    let (_stdout, _stderr, exit_code) = run_slidesync(&["config", "init", "--force"], &config);
    assert_eq!(exit_code, 0);
}

#[test]
fn config_show_merges_file_with_defaults() {
    let config = fixtures_dir().join("config_partial.toml");
    let (stdout, _stderr, exit_code) = run_slidesync(&["config", "show"], &config);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("frame_rate = 30"));
    assert!(stdout.contains("default_slide_seconds = 3.0"));
    assert!(stdout.contains("result_limit = 5"));
    assert!(stdout.contains("endpoint = \"https://api.deezer.com/search\""));
}

#[test]
fn completions_for_bash() {
    let (_dir, config) = isolated_config();
    slidesync(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slidesync"));
}
