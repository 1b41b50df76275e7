//! Authentication strategies exercised over real HTTP.

mod common;

use std::collections::HashMap;

use common::fixtures::{self, torznab_feed, FeedItem};
use seedpick_core::{
    AuthType, MediaType, Query, ReleaseFinder, SearchSettings, StaticTrackerSource,
    TrackerDescriptor,
};

fn one_item_feed(title: &str, seeders: u32) -> String {
    torznab_feed(&[FeedItem::new(title, "http://t/dl").seeders(seeders)])
}

async fn search(tracker: TrackerDescriptor) -> seedpick_core::SearchReport {
    ReleaseFinder::new(
        StaticTrackerSource::new(vec![tracker]),
        SearchSettings::default(),
    )
    .search(&Query::new("Blade Runner 2049", MediaType::Movie))
    .await
}

fn cookie_tracker_descriptor(base: &str, password: &str) -> TrackerDescriptor {
    let mut tracker = TrackerDescriptor::new("cookies", &format!("{}/search", base));
    tracker.auth_type = AuthType::CookieLogin;
    tracker.auth_url = Some(format!("{}/login", base));
    tracker.login_data = Some(HashMap::from([
        ("username".to_string(), "me".to_string()),
        ("password".to_string(), password.to_string()),
    ]));
    tracker
}

#[tokio::test]
async fn test_api_key_sent_under_default_name() {
    let url = common::api_key_tracker("apikey", "k3y", one_item_feed("Keyed", 9)).await;
    let report = search(fixtures::api_key_tracker("keyed", &url, "k3y")).await;

    assert!(report.tracker_errors.is_empty());
    assert_eq!(report.best.map(|r| r.title), Some("Keyed".to_string()));
}

#[tokio::test]
async fn test_api_key_sent_under_mapped_name() {
    let url = common::api_key_tracker("passkey", "k3y", one_item_feed("Mapped", 9)).await;
    let mut tracker = fixtures::api_key_tracker("mapped", &url, "k3y");
    tracker
        .param_map
        .insert("apikey".to_string(), "passkey".to_string());

    let report = search(tracker).await;

    assert_eq!(report.best.map(|r| r.title), Some("Mapped".to_string()));
}

#[tokio::test]
async fn test_missing_api_key_still_searches() {
    let url = common::api_key_tracker("apikey", "k3y", one_item_feed("Keyed", 9)).await;
    let mut tracker = fixtures::api_key_tracker("nokey", &url, "");
    tracker.api_key = None;

    let report = search(tracker).await;

    // The request goes out unauthenticated and the tracker refuses it.
    assert!(report.best.is_none());
    assert!(report.error_for("nokey").unwrap_or_default().contains("401"));
}

#[tokio::test]
async fn test_http_basic_credentials() {
    let url = common::basic_auth_tracker(one_item_feed("Basic", 40)).await;

    let ok = search(fixtures::basic_auth_tracker("basic", &url, "alice", "secret")).await;
    assert_eq!(ok.best.and_then(|r| r.seeders), Some(40));

    let wrong = search(fixtures::basic_auth_tracker("basic", &url, "alice", "nope")).await;
    assert!(wrong.best.is_none());
    assert!(wrong.error_for("basic").unwrap_or_default().contains("401"));
}

#[tokio::test]
async fn test_cookie_login_session_carries_to_search() {
    let base = common::cookie_tracker(one_item_feed("Members only", 12)).await;

    let report = search(cookie_tracker_descriptor(&base, "hunter2")).await;

    assert!(report.tracker_errors.is_empty(), "{:?}", report.tracker_errors);
    assert_eq!(report.best.map(|r| r.title), Some("Members only".to_string()));
}

#[tokio::test]
async fn test_failed_cookie_login_still_searches() {
    let base = common::cookie_tracker(one_item_feed("Members only", 12)).await;

    let report = search(cookie_tracker_descriptor(&base, "wrong")).await;

    // Login is rejected, the search is attempted anyway and refused.
    assert!(report.best.is_none());
    assert!(report.error_for("cookies").unwrap_or_default().contains("403"));
}

#[tokio::test]
async fn test_cookie_sessions_are_not_shared_between_searches() {
    let base = common::cookie_tracker(one_item_feed("Members only", 12)).await;

    let first = search(cookie_tracker_descriptor(&base, "hunter2")).await;
    assert!(first.best.is_some());

    let second = search(cookie_tracker_descriptor(&base, "wrong")).await;
    assert!(second.best.is_none());
}
