//! Non-blocking search requests with stale result suppression.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use tracing::{debug, info};

use super::client::TrackSearch;
use super::error::SearchError;
use super::record::TrackRecord;

/// Identifies one submitted search. Later submissions get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A finished search for the latest submitted query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub token: RequestToken,
    pub query: String,
    pub result: Result<Vec<TrackRecord>, SearchError>,
}

/// Where the latest search stands, for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Searching,
    /// Results arrived (number of records)
    Ready(usize),
    /// The search failed; the payload is the user-facing reason
    Failed(String),
}

impl SearchStatus {
    /// One-line status message.
    pub fn message(&self) -> &str {
        match self {
            SearchStatus::Idle => "",
            SearchStatus::Searching => "Searching…",
            SearchStatus::Ready(_) => "Results ready",
            SearchStatus::Failed(reason) => reason,
        }
    }

    fn from_result(result: &Result<Vec<TrackRecord>, SearchError>) -> Self {
        match result {
            Ok(records) => SearchStatus::Ready(records.len()),
            Err(SearchError::NoResults) => SearchStatus::Failed("No results found".to_string()),
            Err(err) => SearchStatus::Failed(format!("Search failed: {}", err)),
        }
    }
}

struct Job {
    token: RequestToken,
    query: String,
}

struct Finished {
    job: Job,
    result: Result<Vec<TrackRecord>, SearchError>,
}

/// Worker thread body: run queued searches and send back each result.
///
/// When several queries are waiting only the newest one is run, since
/// results for the older ones would be discarded on arrival anyway.
/// Exits when the job channel closes or the owner stops listening.
fn search_loop<S: TrackSearch>(search: S, jobs: Receiver<Job>, results: Sender<Finished>) {
    while let Ok(mut job) = jobs.recv() {
        while let Ok(newer) = jobs.try_recv() {
            debug!(token = job.token.value(), "skipping superseded search");
            job = newer;
        }

        let result = match search.search(&job.query) {
            Ok(records) if records.is_empty() => Err(SearchError::NoResults),
            other => other,
        };
        if results.send(Finished { job, result }).is_err() {
            break;
        }
    }
}

/// Runs searches on a background thread.
///
/// Only the most recent submission counts: completions for older tokens
/// are dropped when they arrive, so a slow early query can never replace
/// the results of a later one.
pub struct SearchRequests {
    job_tx: Sender<Job>,
    result_rx: Receiver<Finished>,
    next_token: u64,
    latest: Option<RequestToken>,
    status: SearchStatus,
}

impl SearchRequests {
    /// Start the worker thread for `search`.
    ///
    /// The thread exits once this value is dropped and its current job
    /// (if any) has finished.
    pub fn new<S>(search: S) -> Self
    where
        S: TrackSearch + Send + 'static,
    {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (result_tx, result_rx) = mpsc::channel();

        thread::spawn(move || search_loop(search, job_rx, result_tx));

        Self {
            job_tx,
            result_rx,
            next_token: 0,
            latest: None,
            status: SearchStatus::Idle,
        }
    }

    /// Queue a search for `query` (trimmed).
    ///
    /// # Returns
    ///
    /// The token of the new request, which supersedes every earlier one.
    pub fn submit(&mut self, query: &str) -> Result<RequestToken, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.job_tx
            .send(Job {
                token,
                query: query.to_string(),
            })
            .map_err(|_| SearchError::WorkerGone)?;

        info!(query, token = token.value(), "search submitted");
        self.latest = Some(token);
        self.status = SearchStatus::Searching;
        Ok(token)
    }

    /// Collect the latest search's outcome if it has arrived. Never blocks.
    pub fn poll(&mut self) -> Option<SearchOutcome> {
        loop {
            match self.result_rx.try_recv() {
                Ok(done) => {
                    if let Some(outcome) = self.accept(done) {
                        return Some(outcome);
                    }
                }
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    self.worker_gone();
                    return None;
                }
            }
        }
    }

    /// Block until the latest search's outcome arrives.
    ///
    /// Returns `None` right away when no search is outstanding.
    pub fn wait(&mut self) -> Option<SearchOutcome> {
        while self.status == SearchStatus::Searching {
            match self.result_rx.recv() {
                Ok(done) => {
                    if let Some(outcome) = self.accept(done) {
                        return Some(outcome);
                    }
                }
                Err(_) => self.worker_gone(),
            }
        }
        None
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    /// Token of the most recent submission.
    pub fn latest(&self) -> Option<RequestToken> {
        self.latest
    }

    fn accept(&mut self, done: Finished) -> Option<SearchOutcome> {
        let token = done.job.token;
        if Some(token) != self.latest || self.status != SearchStatus::Searching {
            debug!(token = token.value(), "discarding stale search result");
            return None;
        }

        self.status = SearchStatus::from_result(&done.result);
        debug!(token = token.value(), status = ?self.status, "search finished");
        Some(SearchOutcome {
            token,
            query: done.job.query,
            result: done.result,
        })
    }

    fn worker_gone(&mut self) {
        if self.status == SearchStatus::Searching {
            self.status = SearchStatus::Failed(format!(
                "Search failed: {}",
                SearchError::WorkerGone
            ));
        }
    }
}
