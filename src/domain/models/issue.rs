use serde::{Deserialize, Serialize};

use super::document::WikiDocument;

/// Trailing note appended to every generated issue body
pub const GENERATED_NOTE: &str =
    "*This page was automatically generated from the repository Wiki directory.*";

/// Title, body and labels of an issue about to be filed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueDraft {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl IssueDraft {
    /// Render the issue that stands in for a wiki page
    pub fn for_document(document: &WikiDocument, labels: &[String]) -> Self {
        let display_name = &document.display_name;
        let body = format!(
            "# {display_name}\n\
             \n\
             This is an automated Wiki page creation.\n\
             \n\
             ## Content\n\
             \n\
             {content}\n\
             \n\
             ---\n\
             {GENERATED_NOTE}\n",
            content = document.content,
        );

        Self {
            title: format!("Wiki Page: {display_name}"),
            body,
            labels: labels.to_vec(),
        }
    }
}

/// An issue the tracker created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    /// Issue number within the repository
    pub number: u64,

    /// Web URL of the issue
    pub html_url: String,
}
