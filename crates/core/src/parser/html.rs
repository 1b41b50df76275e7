//! HTML results-page parser driven by per-tracker CSS selectors.

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::{parse_count, parse_size, ParseError, ResponseParser};
use crate::config::HtmlSelectors;
use crate::searcher::SearchResult;

/// Scrapes one torrent per `row` match.
///
/// A row needs title, size and seeders elements plus a link; rows missing
/// any of them are skipped without failing the page.
#[derive(Debug)]
pub struct HtmlParser {
    row: Selector,
    title: Selector,
    link: Selector,
    link_attr: String,
    size: Selector,
    seeders: Selector,
    base_url: Option<Url>,
}

impl HtmlParser {
    /// Compile the selector set. `base_url` resolves relative links.
    pub fn new(selectors: &HtmlSelectors, base_url: Option<&str>) -> Result<Self, ParseError> {
        Ok(Self {
            row: compile(&selectors.row)?,
            title: compile(&selectors.title)?,
            link: compile(&selectors.link)?,
            link_attr: selectors.link_attr.clone(),
            size: compile(&selectors.size)?,
            seeders: compile(&selectors.seeders)?,
            base_url: base_url.and_then(|url| Url::parse(url).ok()),
        })
    }

    fn resolve_link(&self, href: &str) -> String {
        match &self.base_url {
            Some(base) => base
                .join(href)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| href.to_string()),
            None => href.to_string(),
        }
    }

    fn parse_row(&self, tracker: &str, row: ElementRef<'_>) -> Option<SearchResult> {
        let title = element_text(row.select(&self.title).next()?);
        let size = element_text(row.select(&self.size).next()?);
        let seeders = element_text(row.select(&self.seeders).next()?);

        if title.is_empty() {
            return None;
        }

        let link = row
            .select(&self.link)
            .next()
            .and_then(|el| el.value().attr(&self.link_attr))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .map(|href| self.resolve_link(href))?;

        Some(SearchResult {
            title,
            link,
            size: parse_size(&size),
            seeders: parse_count(&seeders),
            tracker: tracker.to_string(),
        })
    }
}

impl ResponseParser for HtmlParser {
    fn name(&self) -> &'static str {
        "html"
    }

    fn parse(&self, tracker: &str, body: &str) -> Result<Vec<SearchResult>, ParseError> {
        let document = Html::parse_document(body);

        let mut results = Vec::new();
        let mut skipped = 0usize;
        for row in document.select(&self.row) {
            match self.parse_row(tracker, row) {
                Some(result) => results.push(result),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(
                tracker = tracker,
                skipped = skipped,
                "Skipped incomplete result rows"
            );
        }

        Ok(results)
    }
}

fn compile(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Element text with whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
