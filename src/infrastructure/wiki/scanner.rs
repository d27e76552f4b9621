use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::models::WikiDocument;

/// Extension of candidate wiki pages, matched case-sensitively
pub const MARKDOWN_EXTENSION: &str = "md";

/// List the Markdown documents directly inside `dir`
///
/// Subdirectories are not descended into. A missing or unreadable directory
/// yields an empty list; the caller decides whether that is fatal. Files that
/// cannot be read as UTF-8 are logged and skipped. Order follows the
/// filesystem's directory listing and is not sorted.
pub fn enumerate_documents(dir: &Path) -> Vec<WikiDocument> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "Wiki directory not readable");
            return Vec::new();
        }
    };

    let mut documents = Vec::new();
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if !path.is_file() || !is_markdown(&path) {
            continue;
        }

        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            warn!(path = %path.display(), "Skipping file with non UTF-8 name");
            continue;
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(filename, bytes = content.len(), "Found wiki document");
                documents.push(WikiDocument::new(filename, content));
            }
            Err(err) => warn!(path = %path.display(), error = %err, "Skipping unreadable file"),
        }
    }

    documents
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}
