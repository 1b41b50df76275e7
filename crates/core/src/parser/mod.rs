//! Response parsers.
//!
//! Each tracker declares a `parser` type; this module turns a raw response
//! body into normalized `SearchResult`s through the `ResponseParser` trait.
//! Supporting a new response format means adding an implementation and an
//! arm in [`create_parser`].

mod html;
mod size;
mod torznab;

pub use html::HtmlParser;
pub use size::{parse_count, parse_size};
pub use torznab::TorznabParser;

use thiserror::Error;

use crate::config::{ParserType, TrackerDescriptor};
use crate::searcher::SearchResult;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed XML: {0}")]
    Xml(String),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// Converts a tracker response body into search results.
pub trait ResponseParser: Send + Sync {
    /// Parser type name for logging.
    fn name(&self) -> &'static str;

    /// Parse a response body. Records missing a title or link are dropped;
    /// only an unreadable document is an error.
    fn parse(&self, tracker: &str, body: &str) -> Result<Vec<SearchResult>, ParseError>;
}

/// Factory function to create the parser a tracker declares
pub fn create_parser(tracker: &TrackerDescriptor) -> Result<Box<dyn ResponseParser>, ParseError> {
    match tracker.parser_type {
        ParserType::TorznabXml => Ok(Box::new(TorznabParser::new())),
        ParserType::Html => {
            let selectors = tracker.html.clone().unwrap_or_default();
            Ok(Box::new(HtmlParser::new(&selectors, tracker.search_url())?))
        }
    }
}
