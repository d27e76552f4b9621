pub mod config;
pub mod document;
pub mod issue;
pub mod publish;
pub mod repository;

pub use config::{Config, LoggingConfig};
pub use document::{display_name_for, WikiDocument};
pub use issue::{CreatedIssue, IssueDraft, GENERATED_NOTE};
pub use publish::{DocumentOutcome, PublishResult, PublishSummary};
pub use repository::{Credential, RepositoryHandle, RepositoryRef};
