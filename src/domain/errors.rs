//! Errors for a wiki publishing run.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::TrackerError;

/// Failed preconditions that end a publishing run with exit status 1.
///
/// A failed submission of a single document is not an error here; the
/// publisher records it as `PublishResult::Failed` and moves on.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Missing credential, malformed repository identifier or invalid config value
    #[error("{0}")]
    Configuration(String),

    /// The repository lookup failed (missing, misspelled, or not accessible)
    #[error("Repository not found: {repository}: {source}")]
    RepositoryNotFound {
        repository: String,
        #[source]
        source: TrackerError,
    },

    /// Enumeration of the wiki directory produced no documents
    #[error("No Wiki files found in {}", .0.display())]
    NoDocuments(PathBuf),
}
