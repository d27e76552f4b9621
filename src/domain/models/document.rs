use serde::Serialize;

/// One Markdown file from the wiki directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WikiDocument {
    /// Source file name, e.g. `getting-started.md`
    pub filename: String,

    /// File name without its extension, e.g. `getting-started`
    pub page_name: String,

    /// Page name with hyphens turned into spaces, e.g. `getting started`
    pub display_name: String,

    /// Full file text
    #[serde(skip)]
    pub content: String,
}

impl WikiDocument {
    /// Build a document from its file name and text
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        let filename = filename.into();
        let page_name = page_name_for(&filename).to_string();
        let display_name = display_name_for(&page_name);

        Self {
            filename,
            page_name,
            display_name,
            content: content.into(),
        }
    }
}

/// Strip the final extension, keeping dotted names like `v1.2-notes.md` intact
fn page_name_for(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => filename,
    }
}

/// Human-readable page title: every `-` becomes a space
pub fn display_name_for(page_name: &str) -> String {
    page_name.replace('-', " ")
}
