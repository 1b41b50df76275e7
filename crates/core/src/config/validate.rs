use std::collections::HashSet;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Search timeout is not 0
/// - Tracker names are unique
///
/// Incomplete trackers are not an error; see [`tracker_warnings`].
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.search.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "search.timeout_secs cannot be 0".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for tracker in &config.trackers {
        if tracker.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(format!(
                "trackers.{}.timeout_secs cannot be 0",
                tracker.name
            )));
        }
        if !seen.insert(tracker.name.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate tracker name: {}",
                tracker.name
            )));
        }
    }

    Ok(())
}

/// Describe trackers that will be skipped or searched unauthenticated.
pub fn tracker_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    for tracker in &config.trackers {
        if tracker.search_url().is_none() {
            warnings.push(format!(
                "tracker '{}' has no base_url or is disabled and will be skipped",
                tracker.name
            ));
            continue;
        }

        if let Some(missing) = tracker.missing_credentials() {
            warnings.push(format!(
                "tracker '{}' is missing {} and will search unauthenticated",
                tracker.name, missing
            ));
        }
    }

    warnings
}
