//! Prometheus metrics for tracker searches.
//!
//! Collectors are process-wide statics; a host application registers them
//! with its own registry through [`all_metrics`].

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// Per-tracker metrics
// =============================================================================

/// Tracker searches total by tracker and status.
pub static TRACKER_SEARCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "seedpick_tracker_searches_total",
            "Total searches issued to trackers",
        ),
        &["tracker", "status"], // status: "success", "error"
    )
    .unwrap()
});

/// Tracker search duration in seconds.
pub static TRACKER_SEARCH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "seedpick_tracker_search_duration_seconds",
            "Duration of a single tracker search including login and parsing",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 15.0, 30.0]),
        &["tracker"],
    )
    .unwrap()
});

/// Results returned per successful tracker search.
pub static TRACKER_RESULTS: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "seedpick_tracker_results",
            "Number of results returned per tracker search",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0]),
        &[],
    )
    .unwrap()
});

// =============================================================================
// Fan-out metrics
// =============================================================================

/// Fan-out searches total by result.
pub static SEARCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("seedpick_searches_total", "Total fan-out searches"),
        &["result"], // "found", "not_found"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(TRACKER_SEARCHES.clone()),
        Box::new(TRACKER_SEARCH_DURATION.clone()),
        Box::new(TRACKER_RESULTS.clone()),
        Box::new(SEARCHES.clone()),
    ]
}
