//! Integration tests for track search

use std::thread;
use std::time::Duration;

use slidesync::audio::{AudioKind, AudioSource};
use slidesync::search::{
    parse_search_response, SearchError, SearchRequests, SearchStatus, TrackRecord, TrackSearch,
};

use crate::helpers::load_fixture;

/// Search that answers from a fixture body, like the HTTP client would.
struct FixtureSearch {
    body: String,
    limit: usize,
}

impl TrackSearch for FixtureSearch {
    fn search(&self, _query: &str) -> Result<Vec<TrackRecord>, SearchError> {
        parse_search_response(&self.body, self.limit)
    }
}

/// Search whose latency depends on the query.
struct SlowWhenAsked;

impl TrackSearch for SlowWhenAsked {
    fn search(&self, query: &str) -> Result<Vec<TrackRecord>, SearchError> {
        if query.starts_with("slow") {
            thread::sleep(Duration::from_millis(200));
        }
        Ok(vec![TrackRecord {
            title: query.to_string(),
            artist_name: "Tester".to_string(),
            preview_uri: Some(format!("https://cdn.example/{}.mp3", query)),
            cover_uri: None,
        }])
    }
}

#[test]
fn fixture_is_cut_to_ten_results() {
    let records = parse_search_response(&load_fixture("deezer_search.json"), 10).unwrap();

    assert_eq!(records.len(), 10);
    assert_eq!(records[0].title, "Dancing Queen");
    assert_eq!(records[0].artist_name, "ABBA");
    assert!(records[0].cover_uri.as_deref().unwrap().contains("56x56"));
    assert_eq!(records[9].title, "Money, Money, Money");
}

#[test]
fn empty_fixture_is_no_results() {
    let result = parse_search_response(&load_fixture("deezer_empty.json"), 10);
    assert_eq!(result, Err(SearchError::NoResults));
}

#[test]
fn error_fixture_is_api_error() {
    let result = parse_search_response(&load_fixture("deezer_error.json"), 10);
    assert!(matches!(result, Err(SearchError::Api { ref kind, .. }) if kind == "QuotaException"));
}

#[test]
fn picking_a_record_binds_its_preview() {
    let records = parse_search_response(&load_fixture("deezer_search.json"), 10).unwrap();

    let source = AudioSource::from_track(&records[2]).unwrap();
    assert_eq!(source.kind, AudioKind::RemotePreview);
    assert_eq!(source.label, "Waterloo - ABBA");
    assert!(source.uri.ends_with("preview-3.mp3"));

    // "SOS" has an empty preview in the fixture.
    assert_eq!(
        AudioSource::from_track(&records[3]),
        Err(SearchError::MissingPreview {
            title: "SOS".to_string()
        })
    );
}

#[test]
fn requests_deliver_fixture_results() {
    let mut requests = SearchRequests::new(FixtureSearch {
        body: load_fixture("deezer_search.json"),
        limit: 10,
    });
    requests.submit("abba").unwrap();

    let outcome = requests.wait().unwrap();
    assert_eq!(outcome.result.unwrap().len(), 10);
    assert_eq!(requests.status(), &SearchStatus::Ready(10));
}

#[test]
fn requests_report_no_results() {
    let mut requests = SearchRequests::new(FixtureSearch {
        body: load_fixture("deezer_empty.json"),
        limit: 10,
    });
    requests.submit("zzzz").unwrap();

    requests.wait().unwrap();
    assert_eq!(requests.status().message(), "No results found");
}

#[test]
fn slow_earlier_query_never_overrides_later_one() {
    let mut requests = SearchRequests::new(SlowWhenAsked);
    requests.submit("slow query").unwrap();
    let latest = requests.submit("fast query").unwrap();

    let outcome = requests.wait().unwrap();
    assert_eq!(outcome.token, latest);
    assert_eq!(outcome.result.unwrap()[0].title, "fast query");

    // The superseded result was dropped, nothing else is pending.
    assert!(requests.poll().is_none());
    assert!(requests.wait().is_none());
}
