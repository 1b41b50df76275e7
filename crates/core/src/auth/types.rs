use reqwest::{Client, RequestBuilder};

/// HTTP Basic credentials (password hidden from `Debug`).
#[derive(Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Everything one tracker search needs to issue its request.
///
/// Owned by a single unit of work: the client carries its own cookie jar, so
/// a cookie login never leaks into another tracker's requests.
#[derive(Debug)]
pub struct RequestContext {
    pub tracker: String,
    pub client: Client,
    /// Query-string parameters, in insertion order.
    pub params: Vec<(String, String)>,
    pub basic_auth: Option<BasicCredentials>,
}

impl RequestContext {
    pub fn new(tracker: impl Into<String>, client: Client, params: Vec<(String, String)>) -> Self {
        Self {
            tracker: tracker.into(),
            client,
            params,
            basic_auth: None,
        }
    }

    /// Value of a query parameter, if set.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Build the search GET request.
    pub fn search_request(&self, url: &str) -> RequestBuilder {
        let mut request = self.client.get(url).query(&self.params);
        if let Some(credentials) = &self.basic_auth {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }
        request
    }
}
