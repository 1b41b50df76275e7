//! HTTP Basic authentication.

use async_trait::async_trait;

use super::{AuthError, AuthStrategy, BasicCredentials, RequestContext};

/// Attaches HTTP Basic credentials when both username and password are
/// non-empty.
pub struct HttpBasicAuth {
    credentials: Option<BasicCredentials>,
}

impl HttpBasicAuth {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        let username = username.filter(|u| !u.is_empty());
        let password = password.filter(|p| !p.is_empty());
        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(BasicCredentials { username, password }),
            _ => None,
        };
        Self { credentials }
    }
}

#[async_trait]
impl AuthStrategy for HttpBasicAuth {
    async fn prepare(&self, ctx: &mut RequestContext) -> Result<(), AuthError> {
        let credentials = self
            .credentials
            .clone()
            .ok_or_else(|| AuthError::MissingCredentials("username and password".to_string()))?;

        ctx.basic_auth = Some(credentials);
        Ok(())
    }

    fn method_name(&self) -> &'static str {
        "http_basic"
    }
}
