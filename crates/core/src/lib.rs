pub mod auth;
pub mod config;
pub mod metrics;
pub mod parser;
pub mod searcher;
pub mod testing;

pub use auth::{create_auth_strategy, AuthError, AuthStrategy, RequestContext};
pub use config::{
    load_config, load_config_from_str, tracker_warnings, validate_config, AuthType, Config,
    ConfigError, FileTrackerSource, HtmlSelectors, ParserType, SanitizedTrackerConfig,
    SearchSettings, StaticTrackerSource, TrackerDescriptor, TrackerSource,
};
pub use parser::{create_parser, ParseError, ResponseParser};
pub use searcher::{
    MediaType, Query, ReleaseFinder, SearchError, SearchOutcome, SearchReport, SearchResult,
    TrackerFailure,
};
