//! Wiki Publisher - copies a repository's `wiki/` pages into GitHub issues
//!
//! GitHub offers no API for creating wiki pages, so each Markdown file in the
//! wiki directory is filed as an issue labelled `wiki` and `documentation`,
//! ready to be transferred by hand through the web UI.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Documents, repository identities, publish outcomes, the tracker port
//! - **Service Layer** (`services`): The sequential publish run with per-document fault isolation
//! - **Infrastructure Layer** (`infrastructure`): GitHub client, wiki scanner, config, logging, credentials
//! - **CLI Layer** (`cli`): Argument parsing, progress and summary output
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wiki_publisher::{GitHubClient, GitHubClientConfig, WikiPublisher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let credential = wiki_publisher::infrastructure::credentials::resolve_credential()?;
//!     let client = GitHubClient::new(GitHubClientConfig::default(), &credential)?;
//!     let publisher = WikiPublisher::new(Arc::new(client), vec!["wiki".into()]);
//!     let summary = publisher
//!         .run(&"octo/handbook".parse()?, "wiki".as_ref(), &mut std::io::stdout())
//!         .await?;
//!     println!("{}/{}", summary.success_count(), summary.total());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, CreatedIssue, Credential, IssueDraft, LoggingConfig, PublishResult, PublishSummary,
    RepositoryHandle, RepositoryRef, WikiDocument,
};
pub use domain::ports::{IssueTracker, TrackerError};
pub use domain::PublishError;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::github::{GitHubClient, GitHubClientConfig};
pub use services::WikiPublisher;
