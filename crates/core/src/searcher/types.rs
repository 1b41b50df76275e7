//! Types for the tracker search system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;
use uuid::Uuid;

use crate::parser::ParseError;

/// One logical search, sent unchanged to every tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Query {
    /// Free-text search query.
    pub query: String,
    /// Kind of release being searched for.
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Optional: tracker category ids, sent comma-joined.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub categories: BTreeSet<String>,
    /// Optional: minimum seeders, forwarded to trackers that support it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_seeders: Option<u32>,
}

impl Query {
    pub fn new(query: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            query: query.into(),
            media_type,
            categories: BTreeSet::new(),
            min_seeders: None,
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_seeders(mut self, min_seeders: u32) -> Self {
        self.min_seeders = Some(min_seeders);
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Movie,
    Show,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Show => "show",
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "movie" => Ok(MediaType::Movie),
            "show" => Ok(MediaType::Show),
            other => Err(format!("unknown media type: {}", other)),
        }
    }
}

/// A normalized release listing produced by a response parser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    /// Download or details link as reported by the tracker.
    pub link: String,
    /// Size in bytes, if the tracker reported one.
    pub size: Option<u64>,
    /// Seeders, if the tracker reported them.
    pub seeders: Option<u32>,
    /// Tracker that returned this result.
    pub tracker: String,
}

impl SearchResult {
    /// Ranking key: unknown seeders count as zero.
    pub fn seeders_or_zero(&self) -> u32 {
        self.seeders.unwrap_or(0)
    }
}

/// What one tracker contributed to a search.
#[derive(Debug)]
pub struct SearchOutcome {
    pub tracker: String,
    pub duration_ms: u64,
    pub result: Result<Vec<SearchResult>, SearchError>,
}

impl SearchOutcome {
    /// Results of a successful search, or nothing for a failed one.
    pub fn results(&self) -> &[SearchResult] {
        match &self.result {
            Ok(results) => results,
            Err(_) => &[],
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Full account of one fan-out search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub search_id: Uuid,
    pub query: Query,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    /// Trackers that took part (had a usable base URL).
    pub trackers_searched: usize,
    /// All results in collection order, duplicates preserved.
    pub results: Vec<SearchResult>,
    /// One entry per failed tracker, in collection order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tracker_errors: Vec<TrackerFailure>,
    pub best: Option<SearchResult>,
}

impl SearchReport {
    /// Error message of the first failure reported for `tracker`.
    pub fn error_for(&self, tracker: &str) -> Option<&str> {
        self.tracker_errors
            .iter()
            .find(|failure| failure.tracker == tracker)
            .map(|failure| failure.error.as_str())
    }
}

/// A tracker search that produced no results because it failed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrackerFailure {
    pub tracker: String,
    pub error: String,
}

/// Errors that can occur while searching a single tracker.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Tracker connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] ParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SearchError::Timeout
        } else if e.is_connect() {
            SearchError::ConnectionFailed(e.to_string())
        } else {
            SearchError::Request(e.to_string())
        }
    }
}
