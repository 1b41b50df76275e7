//! Tracker descriptors loaded from a config file.

mod common;

use std::io::Write;

use common::fixtures::{torznab_feed, FeedItem};
use seedpick_core::{
    FileTrackerSource, MediaType, Query, ReleaseFinder, SearchSettings,
};

#[tokio::test]
async fn test_finder_rereads_file_between_searches() {
    let first = common::torznab_tracker(torznab_feed(&[
        FeedItem::new("First", "http://1/dl").seeders(3),
    ]))
    .await;
    let second = common::torznab_tracker(torznab_feed(&[
        FeedItem::new("Second", "http://2/dl").seeders(30),
    ]))
    .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[[trackers]]\nname = \"first\"\nbase_url = \"{}\"\n",
        first
    )
    .unwrap();
    file.flush().unwrap();

    let finder = ReleaseFinder::new(FileTrackerSource::new(file.path()), SearchSettings::default());
    let query = Query::new("dune", MediaType::Movie);

    let best = finder.find_best_release(&query).await.unwrap();
    assert_eq!(best.title, "First");

    writeln!(
        file,
        "[[trackers]]\nname = \"second\"\nbase_url = \"{}\"\n",
        second
    )
    .unwrap();
    file.flush().unwrap();

    let report = finder.search(&query).await;
    assert_eq!(report.trackers_searched, 2);
    assert_eq!(report.best.map(|r| r.title), Some("Second".to_string()));
}

#[tokio::test]
async fn test_missing_file_means_no_trackers() {
    let dir = tempfile::tempdir().unwrap();
    let finder = ReleaseFinder::new(
        FileTrackerSource::new(dir.path().join("absent.toml")),
        SearchSettings::default(),
    );

    let report = finder.search(&Query::new("dune", MediaType::Movie)).await;

    assert_eq!(report.trackers_searched, 0);
    assert!(report.best.is_none());
}
