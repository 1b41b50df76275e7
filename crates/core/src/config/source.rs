//! Where tracker descriptors come from.
//!
//! A `TrackerSource` is asked for descriptors on every search, so a
//! file-backed source picks up edits without restarting the host process.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{load_config, TrackerDescriptor};

/// Supplies the tracker descriptors for one search.
pub trait TrackerSource: Send + Sync {
    /// Zero or more descriptors. Never fails: an unreadable source yields
    /// an empty list.
    fn load_tracker_descriptors(&self) -> Vec<TrackerDescriptor>;
}

/// Fixed, in-memory list of trackers.
#[derive(Debug, Clone, Default)]
pub struct StaticTrackerSource {
    trackers: Vec<TrackerDescriptor>,
}

impl StaticTrackerSource {
    pub fn new(trackers: Vec<TrackerDescriptor>) -> Self {
        Self { trackers }
    }
}

impl TrackerSource for StaticTrackerSource {
    fn load_tracker_descriptors(&self) -> Vec<TrackerDescriptor> {
        self.trackers.clone()
    }
}

/// Re-reads the `[[trackers]]` table of a config file on every call.
#[derive(Debug, Clone)]
pub struct FileTrackerSource {
    path: PathBuf,
}

impl FileTrackerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrackerSource for FileTrackerSource {
    fn load_tracker_descriptors(&self) -> Vec<TrackerDescriptor> {
        match load_config(&self.path) {
            Ok(config) => {
                debug!(
                    path = %self.path.display(),
                    trackers = config.trackers.len(),
                    "Loaded tracker descriptors"
                );
                config.trackers
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Could not load tracker descriptors, searching no trackers"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_static_source_returns_its_trackers() {
        let source = StaticTrackerSource::new(vec![
            TrackerDescriptor::new("a", "http://a"),
            TrackerDescriptor::new("b", "http://b"),
        ]);
        let trackers = source.load_tracker_descriptors();
        assert_eq!(trackers.len(), 2);
        assert_eq!(trackers[1].name, "b");
    }

    #[test]
    fn test_file_source_missing_file_is_empty() {
        let source = FileTrackerSource::new("/nonexistent/trackers.toml");
        assert!(source.load_tracker_descriptors().is_empty());
    }

    #[test]
    fn test_file_source_malformed_file_is_empty() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[[trackers]\nname = ").unwrap();

        let source = FileTrackerSource::new(temp_file.path());
        assert!(source.load_tracker_descriptors().is_empty());
    }

    #[test]
    fn test_file_source_rereads_on_every_call() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            "[[trackers]]\nname = \"first\"\nbase_url = \"http://first\"\n"
        )
        .unwrap();

        let source = FileTrackerSource::new(temp_file.path());
        assert_eq!(source.load_tracker_descriptors().len(), 1);

        writeln!(
            temp_file,
            "[[trackers]]\nname = \"second\"\nbase_url = \"http://second\"\n"
        )
        .unwrap();
        temp_file.flush().unwrap();

        let trackers = source.load_tracker_descriptors();
        assert_eq!(trackers.len(), 2);
        assert_eq!(trackers[1].name, "second");
    }
}
