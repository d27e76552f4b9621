//! Wiki publisher service: turns wiki documents into issues, one at a time.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use console::Emoji;
use tracing::{error, info, instrument, warn};

use crate::domain::errors::PublishError;
use crate::domain::models::{
    DocumentOutcome, IssueDraft, PublishResult, PublishSummary, RepositoryHandle, RepositoryRef,
    WikiDocument,
};
use crate::domain::ports::IssueTracker;
use crate::infrastructure::logging::SecretScrubber;
use crate::infrastructure::wiki::enumerate_documents;

use super::progress::Progress;

pub(crate) static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
pub(crate) static OK: Emoji<'_, '_> = Emoji("✅ ", "[ok] ");
pub(crate) static FAIL: Emoji<'_, '_> = Emoji("❌ ", "[error] ");
pub(crate) static BOOKS: Emoji<'_, '_> = Emoji("📚 ", "");
pub(crate) static PAGE: Emoji<'_, '_> = Emoji("📄 ", "- ");
pub(crate) static PREVIEW: Emoji<'_, '_> = Emoji("👀 ", "");

pub struct WikiPublisher<T: IssueTracker> {
    tracker: Arc<T>,
    labels: Vec<String>,
    scrubber: SecretScrubber,
}

impl<T: IssueTracker> WikiPublisher<T> {
    pub fn new(tracker: Arc<T>, labels: Vec<String>) -> Self {
        Self {
            tracker,
            labels,
            scrubber: SecretScrubber::new(),
        }
    }

    /// Render the issue that would be filed for `document`
    pub fn draft(&self, document: &WikiDocument) -> IssueDraft {
        IssueDraft::for_document(document, &self.labels)
    }

    /// Confirm the target repository exists. Lookup failures are fatal and not retried.
    #[instrument(skip_all, fields(repository = %repository))]
    pub async fn resolve_repository(
        &self,
        repository: &RepositoryRef,
    ) -> Result<RepositoryHandle, PublishError> {
        self.tracker
            .get_repository(repository)
            .await
            .map_err(|source| {
                error!(error = %source, "Repository lookup failed");
                PublishError::RepositoryNotFound {
                    repository: repository.full_name(),
                    source,
                }
            })
    }

    /// Submit one document as an issue
    ///
    /// Remote failures are logged and returned as `PublishResult::Failed`, so a
    /// bad document never aborts the rest of the run.
    #[instrument(skip_all, fields(filename = %document.filename))]
    pub async fn publish_document(
        &self,
        repository: &RepositoryHandle,
        document: &WikiDocument,
    ) -> PublishResult {
        let draft = self.draft(document);

        match self.tracker.create_issue(repository, &draft).await {
            Ok(issue) => {
                info!(number = issue.number, "Published wiki page");
                PublishResult::Published { issue }
            }
            Err(err) => {
                let error = self.scrubber.scrub(&err.to_string());
                warn!(%error, "Failed to publish wiki page");
                PublishResult::Failed { error }
            }
        }
    }

    /// Publish every document in `wiki_dir` to `repository`
    ///
    /// Order: repository lookup, then enumeration, then one submission per
    /// document in listing order. Progress lines go to `out`, best effort.
    /// Returns an error only for failed preconditions; per-document failures
    /// are in the summary.
    pub async fn run<W: Write>(
        &self,
        repository: &RepositoryRef,
        wiki_dir: &Path,
        out: &mut W,
    ) -> Result<PublishSummary, PublishError> {
        let mut progress = Progress::new(out);
        progress.line(format_args!("{FOLDER}Repository: {repository}"));

        let handle = self.resolve_repository(repository).await?;
        progress.line(format_args!("{OK}Found repository: {}", handle.full_name));

        let documents = enumerate_documents(wiki_dir);
        if documents.is_empty() {
            return Err(PublishError::NoDocuments(wiki_dir.to_path_buf()));
        }
        progress.line(format_args!("{BOOKS}Found {} Wiki files", documents.len()));

        let mut summary = PublishSummary::new(&handle.full_name, handle.wiki_url(), false);
        for document in &documents {
            progress.line(format_args!("\n{PAGE}Processing: {}", document.filename));
            progress.line(format_args!("   Page name: {}", document.page_name));
            progress.line(format_args!("   Display name: {}", document.display_name));

            let result = self.publish_document(&handle, document).await;
            match &result {
                PublishResult::Published { issue } => {
                    progress.line(format_args!(
                        "{OK}Created issue for Wiki page: {}",
                        document.display_name
                    ));
                    progress.line(format_args!("   Issue URL: {}", issue.html_url));
                }
                PublishResult::Failed { error } => {
                    progress.line(format_args!(
                        "{FAIL}Failed to create Wiki page {}: {error}",
                        document.display_name
                    ));
                }
                PublishResult::Skipped => {}
            }

            summary.record(DocumentOutcome {
                filename: document.filename.clone(),
                display_name: document.display_name.clone(),
                result,
            });
        }

        info!(
            succeeded = summary.success_count(),
            total = summary.total(),
            "Wiki deployment finished"
        );
        Ok(summary)
    }
}

/// Render every draft without touching the remote API
///
/// Used by `--dry-run`; the repository is reported as configured, not as
/// confirmed by a lookup.
pub fn preview<W: Write>(
    repository: &RepositoryRef,
    labels: &[String],
    wiki_dir: &Path,
    out: &mut W,
) -> Result<PublishSummary, PublishError> {
    let mut progress = Progress::new(out);
    progress.line(format_args!("{FOLDER}Repository: {repository} (dry run)"));

    let documents = enumerate_documents(wiki_dir);
    if documents.is_empty() {
        return Err(PublishError::NoDocuments(wiki_dir.to_path_buf()));
    }
    progress.line(format_args!("{BOOKS}Found {} Wiki files", documents.len()));

    let wiki_url = format!("https://github.com/{}/wiki", repository.full_name());
    let mut summary = PublishSummary::new(repository.full_name(), wiki_url, true);
    for document in &documents {
        let draft = IssueDraft::for_document(document, labels);
        progress.line(format_args!("\n{PREVIEW}{}", draft.title));
        progress.line(format_args!("   Source: {}", document.filename));
        progress.line(format_args!("   Labels: {}", draft.labels.join(", ")));
        progress.line(format_args!("   Body: {} bytes", draft.body.len()));

        summary.record(DocumentOutcome {
            filename: document.filename.clone(),
            display_name: document.display_name.clone(),
            result: PublishResult::Skipped,
        });
    }

    Ok(summary)
}
