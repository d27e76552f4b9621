//! `deploy-wiki` entry point.

use std::process::ExitCode;

use clap::Parser;

use wiki_publisher::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    wiki_publisher::cli::run(cli).await
}
