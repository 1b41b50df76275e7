//! Search execution against a single tracker.

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{debug, warn};

use crate::auth::{create_auth_strategy, RequestContext};
use crate::config::{QueryField, SearchSettings, TrackerDescriptor};
use crate::metrics;
use crate::parser::create_parser;

use super::{Query, SearchError, SearchOutcome, SearchResult};

/// Longest error-body excerpt kept in `SearchError::HttpStatus`.
const ERROR_BODY_LIMIT: usize = 200;

/// Search one tracker.
///
/// Never fails: transport, auth and parse problems are logged and captured
/// in the returned outcome. A tracker without a usable base URL is skipped
/// with an empty result list.
pub async fn search_tracker(
    tracker: &TrackerDescriptor,
    query: &Query,
    settings: &SearchSettings,
) -> SearchOutcome {
    let Some(url) = tracker.search_url() else {
        debug!(tracker = %tracker.name, "Tracker has no base_url or is disabled, skipping");
        return SearchOutcome {
            tracker: tracker.name.clone(),
            duration_ms: 0,
            result: Ok(Vec::new()),
        };
    };

    let start = Instant::now();
    let result = execute(tracker, url, query, settings).await;
    let elapsed = start.elapsed();

    metrics::TRACKER_SEARCH_DURATION
        .with_label_values(&[tracker.name.as_str()])
        .observe(elapsed.as_secs_f64());

    match &result {
        Ok(results) => {
            metrics::TRACKER_SEARCHES
                .with_label_values(&[tracker.name.as_str(), "success"])
                .inc();
            metrics::TRACKER_RESULTS
                .with_label_values(&[])
                .observe(results.len() as f64);
            debug!(
                tracker = %tracker.name,
                results = results.len(),
                duration_ms = elapsed.as_millis() as u64,
                "Tracker search complete"
            );
        }
        Err(e) => {
            metrics::TRACKER_SEARCHES
                .with_label_values(&[tracker.name.as_str(), "error"])
                .inc();
            warn!(tracker = %tracker.name, error = %e, "Tracker search failed");
        }
    }

    SearchOutcome {
        tracker: tracker.name.clone(),
        duration_ms: elapsed.as_millis() as u64,
        result,
    }
}

async fn execute(
    tracker: &TrackerDescriptor,
    url: &str,
    query: &Query,
    settings: &SearchSettings,
) -> Result<Vec<SearchResult>, SearchError> {
    let parser = create_parser(tracker)?;
    let client = build_client(tracker, settings)?;
    let mut ctx = RequestContext::new(&tracker.name, client, build_search_params(tracker, query));

    let auth = create_auth_strategy(tracker);
    if let Err(e) = auth.prepare(&mut ctx).await {
        warn!(
            tracker = %tracker.name,
            method = auth.method_name(),
            error = %e,
            "Authentication not applied, searching unauthenticated"
        );
    }

    debug!(tracker = %tracker.name, url = url, parser = parser.name(), "Searching tracker");

    let response = ctx.search_request(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SearchError::HttpStatus {
            status: status.as_u16(),
            body: body.chars().take(ERROR_BODY_LIMIT).collect(),
        });
    }

    let body = response.text().await?;

    // Parsing is CPU-bound; keep it off the async workers.
    let tracker_name = tracker.name.clone();
    let parsed = tokio::task::spawn_blocking(move || parser.parse(&tracker_name, &body))
        .await
        .map_err(|e| SearchError::Internal(format!("Parser task failed: {}", e)))?;

    Ok(parsed?)
}

/// Per-unit HTTP client with its own cookie jar.
fn build_client(
    tracker: &TrackerDescriptor,
    settings: &SearchSettings,
) -> Result<Client, SearchError> {
    Client::builder()
        .timeout(Duration::from_secs(tracker.timeout_secs(settings) as u64))
        .cookie_store(true)
        .user_agent(settings.user_agent.as_str())
        .build()
        .map_err(|e| SearchError::Internal(format!("Failed to create HTTP client: {}", e)))
}

/// Map the logical query onto the tracker's query-string keys.
pub fn build_search_params(tracker: &TrackerDescriptor, query: &Query) -> Vec<(String, String)> {
    let mut params = vec![
        (
            tracker.param_name(QueryField::Query).to_string(),
            query.query.clone(),
        ),
        (
            tracker.param_name(QueryField::Type).to_string(),
            query.media_type.as_str().to_string(),
        ),
    ];

    if !query.categories.is_empty() {
        let categories: Vec<&str> = query.categories.iter().map(String::as_str).collect();
        params.push((
            tracker.param_name(QueryField::Categories).to_string(),
            categories.join(","),
        ));
    }

    if let Some(min_seeders) = query.min_seeders {
        params.push((
            tracker.param_name(QueryField::MinSeeders).to_string(),
            min_seeders.to_string(),
        ));
    }

    params
}
