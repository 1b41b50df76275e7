//! Torznab/Newznab RSS feed parser.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use super::{ParseError, ResponseParser};
use crate::searcher::SearchResult;

/// Parser for Torznab-style XML feeds (`rss > channel > item`).
///
/// Title and link come from the `<title>`/`<link>` children of each item;
/// size and seeders from `<torznab:attr name=".." value=".."/>` extension
/// elements, with a plain `<size>` child as fallback for size.
#[derive(Debug, Default)]
pub struct TorznabParser;

impl TorznabParser {
    pub fn new() -> Self {
        Self
    }
}

impl ResponseParser for TorznabParser {
    fn name(&self) -> &'static str {
        "torznab_xml"
    }

    fn parse(&self, tracker: &str, body: &str) -> Result<Vec<SearchResult>, ParseError> {
        let mut reader = Reader::from_str(body);
        reader.config_mut().trim_text(true);

        let mut feed = FeedState::new(tracker);
        // Number of currently open elements.
        let mut depth = 0usize;
        let mut saw_root = false;

        loop {
            let event = reader.read_event().map_err(|e| {
                ParseError::Xml(format!("at byte {}: {}", reader.buffer_position(), e))
            })?;

            match event {
                Event::Start(e) => {
                    saw_root = true;
                    feed.start(&e, depth);
                    depth += 1;
                }
                Event::Empty(e) => {
                    saw_root = true;
                    feed.start(&e, depth);
                    feed.end(e.local_name().as_ref(), depth);
                }
                Event::End(e) => {
                    depth = depth.saturating_sub(1);
                    feed.end(e.local_name().as_ref(), depth);
                }
                Event::Text(t) => {
                    let text = t.unescape().map_err(|e| ParseError::Xml(e.to_string()))?;
                    feed.text(&text);
                }
                Event::CData(c) => {
                    feed.text(&String::from_utf8_lossy(&c.into_inner()));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !saw_root {
            return Err(ParseError::Xml("document has no root element".to_string()));
        }
        if depth > 0 {
            return Err(ParseError::Xml("unexpected end of document".to_string()));
        }

        if feed.discarded > 0 {
            debug!(
                tracker = tracker,
                discarded = feed.discarded,
                "Dropped feed items without title or link"
            );
        }

        Ok(feed.results)
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Link,
    Size,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"link" => Some(Field::Link),
            b"size" => Some(Field::Size),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct ItemBuilder {
    title: Option<String>,
    link: Option<String>,
    size_attr: Option<u64>,
    size_element: Option<u64>,
    seeders: Option<u32>,
}

impl ItemBuilder {
    fn set(&mut self, field: Field, text: &str) {
        let text = text.trim();
        match field {
            Field::Title => self.title = Some(text.to_string()),
            Field::Link => self.link = Some(text.to_string()),
            Field::Size => self.size_element = text.parse().ok(),
        }
    }

    fn apply_attr(&mut self, e: &BytesStart<'_>) {
        let mut name = None;
        let mut value = None;
        for attr in e.attributes().flatten() {
            let decoded = attr.unescape_value().ok().map(|v| v.trim().to_string());
            match attr.key.local_name().as_ref() {
                b"name" => name = decoded,
                b"value" => value = decoded,
                _ => {}
            }
        }

        match (name.as_deref(), value) {
            (Some("size"), Some(v)) => self.size_attr = v.parse().ok(),
            (Some("seeders"), Some(v)) => self.seeders = v.parse().ok(),
            _ => {}
        }
    }

    fn build(self, tracker: &str) -> Option<SearchResult> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let link = self.link.filter(|l| !l.is_empty())?;
        Some(SearchResult {
            title,
            link,
            size: self.size_attr.or(self.size_element),
            seeders: self.seeders,
            tracker: tracker.to_string(),
        })
    }
}

/// Tracks where the reader is in `root > channel > item > field`.
struct FeedState<'a> {
    tracker: &'a str,
    in_channel: bool,
    item: Option<ItemBuilder>,
    field: Option<Field>,
    text: String,
    results: Vec<SearchResult>,
    discarded: usize,
}

impl<'a> FeedState<'a> {
    fn new(tracker: &'a str) -> Self {
        Self {
            tracker,
            in_channel: false,
            item: None,
            field: None,
            text: String::new(),
            results: Vec::new(),
            discarded: 0,
        }
    }

    /// `depth` is the number of open ancestors of `e` (0 for the root).
    fn start(&mut self, e: &BytesStart<'_>, depth: usize) {
        let local = e.local_name();
        match (depth, local.as_ref()) {
            (1, b"channel") => self.in_channel = true,
            (2, b"item") if self.in_channel => self.item = Some(ItemBuilder::default()),
            (3, b"attr") => {
                if let Some(item) = self.item.as_mut() {
                    item.apply_attr(e);
                }
            }
            (3, name) if self.item.is_some() => {
                self.field = Field::from_name(name);
                self.text.clear();
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.field.is_some() {
            self.text.push_str(text);
        }
    }

    /// `depth` is the depth the closing element was opened at.
    fn end(&mut self, name: &[u8], depth: usize) {
        match (depth, name) {
            (3, _) => {
                if let (Some(field), Some(item)) = (self.field.take(), self.item.as_mut()) {
                    item.set(field, &self.text);
                }
            }
            (2, b"item") => {
                if let Some(item) = self.item.take() {
                    match item.build(self.tracker) {
                        Some(result) => self.results.push(result),
                        None => self.discarded += 1,
                    }
                }
            }
            (1, b"channel") => self.in_channel = false,
            _ => {}
        }
    }
}
