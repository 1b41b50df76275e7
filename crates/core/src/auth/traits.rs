//! The authentication seam between tracker descriptors and requests.

use async_trait::async_trait;
use thiserror::Error;

use super::types::RequestContext;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Login rejected: {0}")]
    LoginFailed(String),

    #[error("Authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Prepares a tracker request context before the search call.
///
/// Failures are never fatal: the executor logs the error and searches with
/// whatever the context holds.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    /// Add credentials, cookies or parameters to the request context
    async fn prepare(&self, ctx: &mut RequestContext) -> Result<(), AuthError>;

    /// Name of this authentication method
    fn method_name(&self) -> &'static str;
}
