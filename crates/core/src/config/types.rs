use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub trackers: Vec<TrackerDescriptor>,
}

/// Settings shared by every tracker search
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchSettings {
    /// Per-request timeout in seconds (default: 15)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// User agent sent to trackers (default: "seedpick/<version>")
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u32 {
    15
}

fn default_user_agent() -> String {
    format!("seedpick/{}", env!("CARGO_PKG_VERSION"))
}

fn default_enabled() -> bool {
    true
}

/// Static configuration for one remote tracker.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerDescriptor {
    /// Display/log identifier.
    pub name: String,
    /// Search endpoint. A missing or empty URL disables the tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub auth_type: AuthType,
    /// Login endpoint for cookie auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
    /// Form payload posted to `auth_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_data: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, rename = "parser")]
    pub parser_type: ParserType,
    /// Logical query field -> tracker query-string key.
    #[serde(default, rename = "params")]
    pub param_map: HashMap<String, String>,
    /// Overrides `search.timeout_secs` for this tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
    /// CSS selectors for the HTML parser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<HtmlSelectors>,
}

impl TrackerDescriptor {
    /// Create a descriptor with defaults for everything but name and URL.
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: Some(base_url.into()),
            enabled: true,
            auth_type: AuthType::None,
            auth_url: None,
            login_data: None,
            username: None,
            password: None,
            api_key: None,
            parser_type: ParserType::TorznabXml,
            param_map: HashMap::new(),
            timeout_secs: None,
            html: None,
        }
    }

    /// The search URL, if this tracker can take part in a search.
    pub fn search_url(&self) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Query-string key for a logical field, falling back to the logical name.
    pub fn param_name(&self, field: QueryField) -> &str {
        self.param_map
            .get(field.logical_name())
            .map(String::as_str)
            .unwrap_or(field.logical_name())
    }

    /// Request timeout for this tracker. A zero override falls back to the
    /// shared setting.
    pub fn timeout_secs(&self, settings: &SearchSettings) -> u32 {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(settings.timeout_secs)
    }

    /// Credentials the configured auth type needs but does not have.
    ///
    /// Empty strings and empty login forms count as missing.
    pub fn missing_credentials(&self) -> Option<&'static str> {
        match self.auth_type {
            AuthType::None => None,
            AuthType::CookieLogin => {
                let has_url = self.auth_url.as_deref().is_some_and(|url| !url.trim().is_empty());
                let has_form = self.login_data.as_ref().is_some_and(|data| !data.is_empty());
                (!has_url || !has_form).then_some("auth_url and login_data")
            }
            AuthType::HttpBasic => {
                let complete = is_set(self.username.as_deref()) && is_set(self.password.as_deref());
                (!complete).then_some("username and password")
            }
            AuthType::ApiKey => (!is_set(self.api_key.as_deref())).then_some("api_key"),
        }
    }
}

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    #[default]
    None,
    #[serde(alias = "cookies")]
    CookieLogin,
    HttpBasic,
    ApiKey,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParserType {
    #[default]
    TorznabXml,
    Html,
}

/// Logical query fields a tracker can rename through `params`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
    Query,
    Type,
    Categories,
    MinSeeders,
    ApiKey,
}

impl QueryField {
    pub fn logical_name(self) -> &'static str {
        match self {
            QueryField::Query => "q",
            QueryField::Type => "t",
            QueryField::Categories => "cat",
            QueryField::MinSeeders => "min_seeders",
            QueryField::ApiKey => "apikey",
        }
    }
}

/// CSS selectors locating one torrent per row on a tracker's results page.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HtmlSelectors {
    #[serde(default = "default_row_selector")]
    pub row: String,
    #[serde(default = "default_title_selector")]
    pub title: String,
    #[serde(default = "default_title_selector")]
    pub link: String,
    #[serde(default = "default_link_attr")]
    pub link_attr: String,
    #[serde(default = "default_size_selector")]
    pub size: String,
    #[serde(default = "default_seeders_selector")]
    pub seeders: String,
}

impl Default for HtmlSelectors {
    fn default() -> Self {
        Self {
            row: default_row_selector(),
            title: default_title_selector(),
            link: default_title_selector(),
            link_attr: default_link_attr(),
            size: default_size_selector(),
            seeders: default_seeders_selector(),
        }
    }
}

fn default_row_selector() -> String {
    "tr.torrent-row".to_string()
}

fn default_title_selector() -> String {
    "a.torrent-title".to_string()
}

fn default_link_attr() -> String {
    "href".to_string()
}

fn default_size_selector() -> String {
    "span.torrent-size".to_string()
}

fn default_seeders_selector() -> String {
    "span.torrent-seeders".to_string()
}

/// Tracker config for logs (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedTrackerConfig {
    pub name: String,
    pub base_url: Option<String>,
    pub enabled: bool,
    pub auth_type: AuthType,
    pub parser_type: ParserType,
    pub credentials_configured: bool,
}

impl From<&TrackerDescriptor> for SanitizedTrackerConfig {
    fn from(tracker: &TrackerDescriptor) -> Self {
        Self {
            name: tracker.name.clone(),
            base_url: tracker.base_url.clone(),
            enabled: tracker.enabled,
            auth_type: tracker.auth_type,
            parser_type: tracker.parser_type,
            credentials_configured: tracker.missing_credentials().is_none(),
        }
    }
}
