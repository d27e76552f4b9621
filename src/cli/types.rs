use std::path::PathBuf;

use clap::Parser;

use crate::domain::models::Config;

#[derive(Parser, Debug)]
#[command(name = "deploy-wiki")]
#[command(
    about = "Publish the Markdown pages in wiki/ as GitHub issues",
    long_about = "Publish the Markdown pages in wiki/ as GitHub issues.\n\n\
                  GitHub has no API for creating wiki pages, so each page is filed as an \
                  issue labelled for manual transfer to the repository wiki.\n\n\
                  Requires GITHUB_TOKEN. The target repository comes from REPOSITORY \
                  (default tungoldshou/vantun)."
)]
#[command(version)]
pub struct Cli {
    /// Directory holding the wiki Markdown files
    #[arg(long, value_name = "PATH")]
    pub wiki_dir: Option<PathBuf>,

    /// Target repository, overriding REPOSITORY and the config file
    #[arg(long, value_name = "OWNER/NAME")]
    pub repository: Option<String>,

    /// GitHub REST API base URL, overriding GITHUB_API_URL and the config file
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// YAML config file (defaults to .wiki-publisher.yaml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Render the issues without creating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,
}

impl Cli {
    /// Apply flags on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(wiki_dir) = &self.wiki_dir {
            config.wiki_dir.clone_from(wiki_dir);
        }
        if let Some(repository) = &self.repository {
            config.repository.clone_from(repository);
        }
        if let Some(api_url) = &self.api_url {
            config.api_url.clone_from(api_url);
        }
    }
}
