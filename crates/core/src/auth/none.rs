//! Pass-through strategy for trackers without authentication.

use async_trait::async_trait;

use super::{AuthError, AuthStrategy, RequestContext};

/// Leaves the request untouched
pub struct NoneAuth;

impl NoneAuth {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoneAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthStrategy for NoneAuth {
    async fn prepare(&self, _ctx: &mut RequestContext) -> Result<(), AuthError> {
        Ok(())
    }

    fn method_name(&self) -> &'static str {
        "none"
    }
}
