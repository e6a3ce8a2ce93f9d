//! Integration tests for configuration loading

use slidesync::config::{Config, SearchConfig};

use crate::helpers::temp_fixture;

#[test]
fn partial_fixture_loads_with_defaults() {
    let (_dir, path) = temp_fixture("config_partial.toml");
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.playback.frame_rate, 30);
    assert_eq!(config.playback.default_slide_seconds, 3.0);
    assert_eq!(config.search.result_limit, 5);
    assert_eq!(config.search.endpoint, SearchConfig::default().endpoint);
}

#[test]
fn saved_config_reloads_identically() {
    let (dir, path) = temp_fixture("config_partial.toml");
    let mut config = Config::load_from(&path).unwrap();
    config.search.timeout_secs = Some(8);

    let out = dir.path().join("saved.toml");
    config.save_to(&out).unwrap();

    assert_eq!(Config::load_from(&out).unwrap(), config);
}
