use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::{CreatedIssue, IssueDraft, RepositoryHandle, RepositoryRef};

/// Result type for issue tracker operations
pub type TrackerResult<T> = std::result::Result<T, TrackerError>;

/// Errors that can occur when talking to the remote issue tracker
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Credential rejected (401)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Credential lacks permission for this repository (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Repository does not exist or is hidden from this credential (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Issues are disabled for the repository (410)
    #[error("Issues are disabled for this repository")]
    IssuesDisabled,

    /// Request was understood but rejected, e.g. an invalid label (422)
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Rate limit exceeded (429)
    #[error("Rate limit exceeded")]
    RateLimited,

    /// API server error (5xx)
    #[error("API server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// Request never produced a response (DNS, TLS, timeout, connection reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Any other non-success status
    #[error("Unexpected HTTP {status}: {body}")]
    Unexpected { status: u16, body: String },
}

impl TrackerError {
    /// Map an HTTP status code and response body to an error variant
    ///
    /// - 401: Authentication failed
    /// - 403: Forbidden
    /// - 404: Not found
    /// - 410: Issues disabled
    /// - 422: Validation failed
    /// - 429: Rate limited
    /// - 5xx: Server error
    /// - Other: Unexpected
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => Self::AuthenticationFailed(body),
            403 => Self::Forbidden(body),
            404 => Self::NotFound(body),
            410 => Self::IssuesDisabled,
            422 => Self::ValidationFailed(body),
            429 => Self::RateLimited,
            500..=599 => Self::ServerError { status, body },
            _ => Self::Unexpected { status, body },
        }
    }
}

/// Remote repository operations the publisher depends on
///
/// Implementations own the credential; callers never see it.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Confirm the repository exists and is accessible with the current credential
    async fn get_repository(&self, repository: &RepositoryRef) -> TrackerResult<RepositoryHandle>;

    /// Open a new issue in the repository
    async fn create_issue(
        &self,
        repository: &RepositoryHandle,
        draft: &IssueDraft,
    ) -> TrackerResult<CreatedIssue>;
}
