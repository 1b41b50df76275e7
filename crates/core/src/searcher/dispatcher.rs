//! Concurrent fan-out of one query to every tracker.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::config::{SearchSettings, TrackerDescriptor};

use super::executor::search_tracker;
use super::{Query, SearchOutcome};

/// Search every tracker concurrently and wait for all of them.
///
/// Each tracker runs on its own task, so a slow tracker never holds up the
/// others. Outcomes come back in completion order. A task that panics is
/// logged and contributes no outcome.
pub async fn dispatch(
    trackers: &[TrackerDescriptor],
    query: &Query,
    settings: &SearchSettings,
) -> Vec<SearchOutcome> {
    if trackers.is_empty() {
        return Vec::new();
    }

    let query = Arc::new(query.clone());
    let settings = Arc::new(settings.clone());

    let mut tasks = JoinSet::new();
    for tracker in trackers.iter().cloned() {
        let query = Arc::clone(&query);
        let settings = Arc::clone(&settings);
        tasks.spawn(async move { search_tracker(&tracker, &query, &settings).await });
    }

    debug!(trackers = trackers.len(), query = %query.query, "Dispatched tracker searches");

    let mut outcomes = Vec::with_capacity(trackers.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => error!(error = %e, "Tracker search task failed"),
        }
    }

    outcomes
}
