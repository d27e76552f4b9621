use serde::Serialize;

use super::issue::CreatedIssue;

/// Outcome of submitting one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PublishResult {
    /// Issue created
    Published { issue: CreatedIssue },
    /// Submission failed; the run continued
    Failed { error: String },
    /// Rendered only (dry run)
    Skipped,
}

impl PublishResult {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Published { .. })
    }
}

/// A document paired with what happened to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentOutcome {
    pub filename: String,
    pub display_name: String,
    #[serde(flatten)]
    pub result: PublishResult,
}

/// Aggregate of a whole run, used for the final summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishSummary {
    /// `owner/name` the issues were filed against
    pub repository: String,

    /// Web URL of the repository wiki tab
    pub wiki_url: String,

    /// True when nothing was submitted
    pub dry_run: bool,

    /// One entry per enumerated document, in publish order
    pub outcomes: Vec<DocumentOutcome>,
}

impl PublishSummary {
    pub fn new(repository: impl Into<String>, wiki_url: impl Into<String>, dry_run: bool) -> Self {
        Self {
            repository: repository.into(),
            wiki_url: wiki_url.into(),
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: DocumentOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of documents whose issue was created
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_success()).count()
    }

    /// Number of documents attempted
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, result: PublishResult) -> DocumentOutcome {
        DocumentOutcome {
            filename: format!("{name}.md"),
            display_name: name.to_string(),
            result,
        }
    }

    #[test]
    fn test_counts() {
        let mut summary = PublishSummary::new("octo/docs", "https://github.com/octo/docs/wiki", false);
        summary.record(outcome(
            "a",
            PublishResult::Published {
                issue: CreatedIssue {
                    number: 1,
                    html_url: "https://github.com/octo/docs/issues/1".to_string(),
                },
            },
        ));
        summary.record(outcome(
            "b",
            PublishResult::Failed {
                error: "Rate limit exceeded".to_string(),
            },
        ));

        assert_eq!(summary.success_count(), 1);
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn test_outcome_serializes_flat() {
        let json = serde_json::to_value(outcome("Home", PublishResult::Skipped)).unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["filename"], "Home.md");
    }
}
