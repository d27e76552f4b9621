pub mod client;
pub mod types;

pub use client::{GitHubClient, GitHubClientConfig};
pub use types::{CreateIssueRequest, IssueResponse, RepositoryResponse};
