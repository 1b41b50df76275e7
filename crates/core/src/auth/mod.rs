//! Tracker authentication strategies.

mod api_key;
mod basic;
mod cookie_login;
mod none;
mod traits;
mod types;

pub use api_key::*;
pub use basic::*;
pub use cookie_login::*;
pub use none::*;
pub use traits::*;
pub use types::*;

use crate::config::{AuthType, QueryField, TrackerDescriptor};

/// Factory function to create the auth strategy a tracker declares
pub fn create_auth_strategy(tracker: &TrackerDescriptor) -> Box<dyn AuthStrategy> {
    match tracker.auth_type {
        AuthType::None => Box::new(NoneAuth::new()),
        AuthType::CookieLogin => Box::new(CookieLoginAuth::new(
            tracker.auth_url.clone(),
            tracker.login_data.clone(),
        )),
        AuthType::HttpBasic => Box::new(HttpBasicAuth::new(
            tracker.username.clone(),
            tracker.password.clone(),
        )),
        AuthType::ApiKey => Box::new(ApiKeyAuth::new(
            tracker.param_name(QueryField::ApiKey),
            tracker.api_key.clone(),
        )),
    }
}
