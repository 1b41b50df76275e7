//! Entry point for best-release searches.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::config::{Config, SearchSettings, StaticTrackerSource, TrackerSource};
use crate::metrics;

use super::aggregate::{flatten_results, select_best};
use super::dispatcher::dispatch;
use super::{Query, SearchReport, SearchResult, TrackerFailure};

/// Runs fan-out searches over the trackers its source provides.
///
/// Tracker descriptors are reloaded from the source on every search.
#[derive(Clone)]
pub struct ReleaseFinder {
    source: Arc<dyn TrackerSource>,
    settings: SearchSettings,
}

impl std::fmt::Debug for ReleaseFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseFinder")
            .field("source", &"<tracker source>")
            .field("settings", &self.settings)
            .finish()
    }
}

impl ReleaseFinder {
    pub fn new(source: impl TrackerSource + 'static, settings: SearchSettings) -> Self {
        Self {
            source: Arc::new(source),
            settings,
        }
    }

    /// Finder over the trackers listed in a loaded config.
    pub fn from_config(config: Config) -> Self {
        Self::new(StaticTrackerSource::new(config.trackers), config.search)
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// The highest-seeded release across all trackers, or `None`.
    pub async fn find_best_release(&self, query: &Query) -> Option<SearchResult> {
        self.search(query).await.best
    }

    /// Search all trackers and report every result and failure.
    pub async fn search(&self, query: &Query) -> SearchReport {
        let search_id = Uuid::new_v4();
        let span = info_span!("search", %search_id, query = %query.query);
        self.run_search(search_id, query).instrument(span).await
    }

    async fn run_search(&self, search_id: Uuid, query: &Query) -> SearchReport {
        let started_at = Utc::now();
        let start = Instant::now();

        let trackers = self.source.load_tracker_descriptors();
        let trackers_searched = trackers
            .iter()
            .filter(|tracker| tracker.search_url().is_some())
            .count();

        if trackers_searched == 0 {
            info!("No usable trackers configured");
        }

        let outcomes = dispatch(&trackers, query, &self.settings).await;

        let tracker_errors: Vec<TrackerFailure> = outcomes
            .iter()
            .filter_map(|outcome| match &outcome.result {
                Err(e) => Some(TrackerFailure {
                    tracker: outcome.tracker.clone(),
                    error: e.to_string(),
                }),
                Ok(_) => None,
            })
            .collect();

        let results = flatten_results(&outcomes);
        let best = select_best(&results).cloned();
        let duration_ms = start.elapsed().as_millis() as u64;

        metrics::SEARCHES
            .with_label_values(&[if best.is_some() { "found" } else { "not_found" }])
            .inc();

        match &best {
            Some(best) => info!(
                trackers = trackers_searched,
                failed = tracker_errors.len(),
                results = results.len(),
                best = %best.title,
                seeders = best.seeders_or_zero(),
                tracker = %best.tracker,
                duration_ms = duration_ms,
                "Search complete"
            ),
            None => info!(
                trackers = trackers_searched,
                failed = tracker_errors.len(),
                duration_ms = duration_ms,
                "Search complete, no release found"
            ),
        }

        SearchReport {
            search_id,
            query: query.clone(),
            started_at,
            duration_ms,
            trackers_searched,
            results,
            tracker_errors,
            best,
        }
    }
}
