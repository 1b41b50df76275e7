//! Form login with session cookies.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use super::{AuthError, AuthStrategy, RequestContext};

/// Posts a login form before the search; the session cookies it sets stay
/// in the context's cookie jar for the search request.
pub struct CookieLoginAuth {
    auth_url: Option<String>,
    login_data: Option<HashMap<String, String>>,
}

impl CookieLoginAuth {
    pub fn new(auth_url: Option<String>, login_data: Option<HashMap<String, String>>) -> Self {
        Self {
            auth_url: auth_url.filter(|url| !url.trim().is_empty()),
            login_data: login_data.filter(|data| !data.is_empty()),
        }
    }
}

#[async_trait]
impl AuthStrategy for CookieLoginAuth {
    async fn prepare(&self, ctx: &mut RequestContext) -> Result<(), AuthError> {
        let (Some(auth_url), Some(login_data)) = (&self.auth_url, &self.login_data) else {
            return Err(AuthError::MissingCredentials(
                "auth_url and login_data".to_string(),
            ));
        };

        let response = ctx
            .client
            .post(auth_url)
            .form(login_data)
            .send()
            .await
            .map_err(|e| AuthError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::LoginFailed(format!("HTTP {}", status)));
        }

        debug!(tracker = %ctx.tracker, "Cookie login successful");
        Ok(())
    }

    fn method_name(&self) -> &'static str {
        "cookie_login"
    }
}
