//! Testing utilities for tracker search.
//!
//! Builders for the response bodies trackers send back and for tracker
//! descriptors, shared by unit tests and the integration tests under
//! `tests/`.
//!
//! # Example
//!
//! ```rust,ignore
//! use seedpick_core::testing::fixtures::{torznab_feed, FeedItem};
//!
//! let body = torznab_feed(&[
//!     FeedItem::new("Blade Runner 2049 2160p", "http://t/1").seeders(120),
//! ]);
//! ```

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::config::{AuthType, ParserType, TrackerDescriptor};
    use crate::searcher::SearchResult;

    /// One `<item>` of a Torznab feed.
    #[derive(Debug, Clone)]
    pub struct FeedItem {
        pub title: String,
        pub link: String,
        pub size: Option<u64>,
        pub seeders: Option<u32>,
    }

    impl FeedItem {
        pub fn new(title: &str, link: &str) -> Self {
            Self {
                title: title.to_string(),
                link: link.to_string(),
                size: None,
                seeders: None,
            }
        }

        pub fn size(mut self, size: u64) -> Self {
            self.size = Some(size);
            self
        }

        pub fn seeders(mut self, seeders: u32) -> Self {
            self.seeders = Some(seeders);
            self
        }
    }

    /// Render a Torznab RSS feed with the given items.
    pub fn torznab_feed(items: &[FeedItem]) -> String {
        let mut body = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:torznab="http://torznab.com/schemas/2015/feed">
<channel>
<title>seedpick fixture</title>
"#,
        );
        for item in items {
            body.push_str("<item>\n");
            body.push_str(&format!("<title>{}</title>\n", escape(&item.title)));
            body.push_str(&format!("<link>{}</link>\n", escape(&item.link)));
            if let Some(size) = item.size {
                body.push_str(&format!(
                    "<torznab:attr name=\"size\" value=\"{}\"/>\n",
                    size
                ));
            }
            if let Some(seeders) = item.seeders {
                body.push_str(&format!(
                    "<torznab:attr name=\"seeders\" value=\"{}\"/>\n",
                    seeders
                ));
            }
            body.push_str("</item>\n");
        }
        body.push_str("</channel>\n</rss>\n");
        body
    }

    /// One `tr.torrent-row` of the default HTML layout.
    #[derive(Debug, Clone)]
    pub struct HtmlRow {
        pub title: String,
        pub href: String,
        pub size: Option<String>,
        pub seeders: Option<String>,
    }

    impl HtmlRow {
        pub fn new(title: &str, href: &str) -> Self {
            Self {
                title: title.to_string(),
                href: href.to_string(),
                size: None,
                seeders: None,
            }
        }

        pub fn size(mut self, size: &str) -> Self {
            self.size = Some(size.to_string());
            self
        }

        pub fn seeders(mut self, seeders: &str) -> Self {
            self.seeders = Some(seeders.to_string());
            self
        }
    }

    /// Render a results page matching the default `HtmlSelectors`.
    pub fn html_page(rows: &[HtmlRow]) -> String {
        let mut body = String::from("<html><body><table>\n");
        for row in rows {
            body.push_str("<tr class=\"torrent-row\">");
            body.push_str(&format!(
                "<td><a class=\"torrent-title\" href=\"{}\">{}</a></td>",
                escape(&row.href),
                escape(&row.title)
            ));
            if let Some(size) = &row.size {
                body.push_str(&format!(
                    "<td><span class=\"torrent-size\">{}</span></td>",
                    escape(size)
                ));
            }
            if let Some(seeders) = &row.seeders {
                body.push_str(&format!(
                    "<td><span class=\"torrent-seeders\">{}</span></td>",
                    escape(seeders)
                ));
            }
            body.push_str("</tr>\n");
        }
        body.push_str("</table></body></html>\n");
        body
    }

    /// A Torznab tracker without authentication.
    pub fn torznab_tracker(name: &str, base_url: &str) -> TrackerDescriptor {
        TrackerDescriptor::new(name, base_url)
    }

    /// An HTML tracker using the default selectors.
    pub fn html_tracker(name: &str, base_url: &str) -> TrackerDescriptor {
        let mut tracker = TrackerDescriptor::new(name, base_url);
        tracker.parser_type = ParserType::Html;
        tracker
    }

    /// A Torznab tracker authenticated by API key.
    pub fn api_key_tracker(name: &str, base_url: &str, api_key: &str) -> TrackerDescriptor {
        let mut tracker = TrackerDescriptor::new(name, base_url);
        tracker.auth_type = AuthType::ApiKey;
        tracker.api_key = Some(api_key.to_string());
        tracker
    }

    /// A Torznab tracker behind HTTP Basic auth.
    pub fn basic_auth_tracker(
        name: &str,
        base_url: &str,
        username: &str,
        password: &str,
    ) -> TrackerDescriptor {
        let mut tracker = TrackerDescriptor::new(name, base_url);
        tracker.auth_type = AuthType::HttpBasic;
        tracker.username = Some(username.to_string());
        tracker.password = Some(password.to_string());
        tracker
    }

    /// A search result as a parser would produce it.
    pub fn search_result(tracker: &str, title: &str, seeders: Option<u32>) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            link: format!("http://{}/dl/{}", tracker, title.to_lowercase().replace(' ', "-")),
            size: Some(1024 * 1024 * 700), // 700 MiB
            seeders,
            tracker: tracker.to_string(),
        }
    }

    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }
}
