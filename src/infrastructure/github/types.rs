//! Request and response bodies for the GitHub REST API
//!
//! Only the fields the publisher reads are modelled; serde ignores the rest.
use serde::{Deserialize, Serialize};

use crate::domain::models::{CreatedIssue, IssueDraft, RepositoryHandle};

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryResponse {
    pub full_name: String,
    pub html_url: String,
    #[serde(default = "default_true")]
    pub has_issues: bool,
}

fn default_true() -> bool {
    true
}

impl From<RepositoryResponse> for RepositoryHandle {
    fn from(response: RepositoryResponse) -> Self {
        Self {
            full_name: response.full_name,
            html_url: response.html_url,
        }
    }
}

/// `POST /repos/{owner}/{repo}/issues`
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub labels: &'a [String],
}

impl<'a> From<&'a IssueDraft> for CreateIssueRequest<'a> {
    fn from(draft: &'a IssueDraft) -> Self {
        Self {
            title: &draft.title,
            body: &draft.body,
            labels: &draft.labels,
        }
    }
}

/// Response to issue creation
#[derive(Debug, Clone, Deserialize)]
pub struct IssueResponse {
    pub number: u64,
    pub html_url: String,
}

impl From<IssueResponse> for CreatedIssue {
    fn from(response: IssueResponse) -> Self {
        Self {
            number: response.number,
            html_url: response.html_url,
        }
    }
}
