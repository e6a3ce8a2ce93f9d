//! Search service clients.

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use super::error::SearchError;
use super::record::{parse_search_response, TrackRecord};
use crate::config::SearchConfig;

/// Something that can look up tracks by free text.
///
/// Calls block until the service answers; [`super::SearchRequests`] runs
/// them on a worker thread.
pub trait TrackSearch {
    fn search(&self, query: &str) -> Result<Vec<TrackRecord>, SearchError>;
}

impl<F> TrackSearch for F
where
    F: Fn(&str) -> Result<Vec<TrackRecord>, SearchError>,
{
    fn search(&self, query: &str) -> Result<Vec<TrackRecord>, SearchError> {
        self(query)
    }
}

/// HTTP client for the Deezer public search endpoint.
#[derive(Debug, Clone)]
pub struct DeezerClient {
    http: reqwest::blocking::Client,
    endpoint: Url,
    proxy_prefix: Option<String>,
    result_limit: usize,
}

impl DeezerClient {
    /// Create a client from the `[search]` configuration section.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|e| SearchError::Request(e.to_string()))?;
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("slidesync/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| SearchError::Request(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            proxy_prefix: config.proxy_prefix.clone().filter(|p| !p.is_empty()),
            result_limit: config.result_limit.max(1),
        })
    }

    /// The full URL requested for `query`.
    ///
    /// The proxy prefix, when set, is prepended verbatim to the service URL.
    pub fn request_url(&self, query: &str) -> String {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        match &self.proxy_prefix {
            Some(prefix) => format!("{}{}", prefix, url),
            None => url.to_string(),
        }
    }

    pub fn result_limit(&self) -> usize {
        self.result_limit
    }
}

impl TrackSearch for DeezerClient {
    fn search(&self, query: &str) -> Result<Vec<TrackRecord>, SearchError> {
        let url = self.request_url(query);
        debug!(%url, "searching tracks");

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| SearchError::Request(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| SearchError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(SearchError::Request(format!("HTTP {}", status)));
        }

        let records = parse_search_response(&body, self.result_limit)?;
        debug!(count = records.len(), "search results decoded");
        Ok(records)
    }
}
