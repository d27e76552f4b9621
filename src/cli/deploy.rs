//! The `deploy-wiki` run: config, credential, publish, summary.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use console::Emoji;
use tracing::error;

use super::output::{output, report_error, CommandOutput};
use super::types::Cli;
use crate::domain::models::{Config, PublishSummary, RepositoryRef};
use crate::domain::PublishError;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::credentials::resolve_credential;
use crate::infrastructure::github::{GitHubClient, GitHubClientConfig};
use crate::infrastructure::logging::init_logging;
use crate::services::publisher::{preview, WikiPublisher, OK};
use crate::services::Progress;

static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "");
static CLIPBOARD: Emoji<'_, '_> = Emoji("📋 ", "");

/// Load the layered configuration, then apply command-line flags
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    ConfigLoader::validate(&config)?;
    Ok(config)
}

/// Run a full deployment and report it
///
/// Exit status is 0 when the credential, repository and document preconditions
/// held, however many individual submissions failed; 1 otherwise.
pub async fn run(cli: Cli) -> ExitCode {
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            report_error(&format!("{err:#}"), cli.json);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.logging) {
        eprintln!("warning: {err:#}");
    }

    let result = if cli.json {
        execute(&config, cli.dry_run, &mut io::sink()).await
    } else {
        execute(&config, cli.dry_run, &mut io::stdout()).await
    };

    match result {
        Ok(summary) => {
            output(&summary, cli.json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Wiki deployment failed");
            report_error(&err.to_string(), cli.json);
            ExitCode::FAILURE
        }
    }
}

/// Resolve the credential and repository, then publish (or preview) every page
///
/// Progress lines are written to `out`, best effort. The credential is checked before
/// anything else, so a missing token never reaches the network.
pub async fn execute<W: Write>(
    config: &Config,
    dry_run: bool,
    out: &mut W,
) -> Result<PublishSummary, PublishError> {
    Progress::new(out).line(format_args!("{ROCKET}Starting Wiki deployment..."));

    let credential = resolve_credential()?;
    let repository: RepositoryRef = config.repository.parse()?;

    if dry_run {
        return preview(&repository, &config.labels, &config.wiki_dir, out);
    }

    let client = GitHubClient::new(GitHubClientConfig::from(config), &credential).map_err(|e| {
        PublishError::Configuration(format!("Failed to build GitHub client: {e}"))
    })?;
    let publisher = WikiPublisher::new(Arc::new(client), config.labels.clone());

    publisher.run(&repository, &config.wiki_dir, out).await
}

/// Manual follow-up, since filing issues does not by itself create wiki pages
pub fn next_steps(wiki_url: &str) -> Vec<String> {
    vec![
        "Visit your GitHub repository Wiki tab".to_string(),
        "Click 'Create the first page' button".to_string(),
        "Copy the content from the created issues".to_string(),
        "Manually create Wiki pages with the provided content".to_string(),
        format!("Repository Wiki URL: {wiki_url}"),
    ]
}

impl CommandOutput for PublishSummary {
    fn to_human(&self) -> String {
        if self.dry_run {
            return format!(
                "\n{OK}Dry run complete: {} pages rendered, nothing published",
                self.total()
            );
        }

        let mut lines = vec![
            format!("\n{PARTY}Wiki deployment completed!"),
            format!(
                "{OK}Successfully processed: {}/{} pages",
                self.success_count(),
                self.total()
            ),
            format!("\n{CLIPBOARD}Next Steps:"),
        ];
        for (i, step) in next_steps(&self.wiki_url).iter().enumerate() {
            lines.push(format!("{}. {step}", i + 1));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "success": true,
            "repository": self.repository,
            "wiki_url": self.wiki_url,
            "dry_run": self.dry_run,
            "succeeded": self.success_count(),
            "total": self.total(),
            "outcomes": self.outcomes,
            "next_steps": if self.dry_run { Vec::new() } else { next_steps(&self.wiki_url) },
        })
    }
}
