//! Search command handler

use anyhow::{bail, Context, Result};

use slidesync::search::{DeezerClient, SearchError, SearchRequests, TrackRecord, TrackSearch};
use slidesync::Config;

/// Search for tracks and print the results.
#[cfg(not(tarpaulin_include))]
pub fn handle(query: &str, limit: Option<usize>) -> Result<()> {
    let config = Config::load()?;
    let mut search_config = config.search;
    if let Some(limit) = limit {
        if limit == 0 {
            bail!("--limit must be at least 1");
        }
        search_config.result_limit = limit;
    }

    let client = DeezerClient::from_config(&search_config)?;
    match run_search(client, query) {
        Ok(records) => {
            print!("{}", render_results(&records));
            Ok(())
        }
        Err(SearchError::NoResults) => {
            println!("No results found for \"{}\"", query.trim());
            Ok(())
        }
        Err(e) => Err(e).context("Search failed"),
    }
}

/// Run one search on the background worker and wait for its outcome.
///
/// Status messages go to stderr so stdout only carries results.
pub fn run_search<S>(search: S, query: &str) -> Result<Vec<TrackRecord>, SearchError>
where
    S: TrackSearch + Send + 'static,
{
    let mut requests = SearchRequests::new(search);
    requests.submit(query)?;
    eprintln!("{}", requests.status().message());

    let outcome = requests.wait().ok_or(SearchError::WorkerGone)?;
    if let Ok(records) = &outcome.result {
        eprintln!("{} ({})", requests.status().message(), records.len());
    }
    outcome.result
}

/// Render results as a numbered list, one record per entry.
pub fn render_results(records: &[TrackRecord]) -> String {
    let width = records.len().to_string().len();
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("{:>width$}. {}\n", i + 1, record.label(), width = width));
        match &record.preview_uri {
            Some(uri) => out.push_str(&format!("{:width$}  {}\n", "", uri, width = width)),
            None => out.push_str(&format!("{:width$}  (no preview)\n", "", width = width)),
        }
    }
    out
}

/// Pick the `pick`-th (1-based) record.
pub fn pick_record(records: &[TrackRecord], pick: usize) -> Result<&TrackRecord> {
    if pick == 0 || pick > records.len() {
        bail!(
            "--pick {} is out of range: the search returned {} result(s)",
            pick,
            records.len()
        );
    }
    Ok(&records[pick - 1])
}
