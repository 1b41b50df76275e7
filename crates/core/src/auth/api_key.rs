//! API key authentication.

use async_trait::async_trait;

use super::{AuthError, AuthStrategy, RequestContext};

/// Sends the tracker's API key as a query parameter.
///
/// The parameter name comes from the tracker's `apikey` mapping
/// (Torznab endpoints expect `apikey`).
pub struct ApiKeyAuth {
    param_name: String,
    api_key: Option<String>,
}

impl ApiKeyAuth {
    pub fn new(param_name: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            param_name: param_name.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }
}

#[async_trait]
impl AuthStrategy for ApiKeyAuth {
    async fn prepare(&self, ctx: &mut RequestContext) -> Result<(), AuthError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| AuthError::MissingCredentials("api_key".to_string()))?;

        ctx.params.push((self.param_name.clone(), api_key.clone()));
        Ok(())
    }

    fn method_name(&self) -> &'static str {
        "api_key"
    }
}
