//! `htmlgrade` binary.
//!
//! Checks an HTML document (local file or fetched URL) against the
//! selectors in a checks file and prints the selector-to-presence mapping
//! as 4-space-indented JSON on stdout. Diagnostics go to stderr; the exit
//! code is 0 on success and 1 on any failure, with no JSON emitted on the
//! failure paths.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use htmlgrade_core::check_html;
use tracing_subscriber::EnvFilter;

const HTMLFILE_DEFAULT: &str = "index.html";
const CHECKSFILE_DEFAULT: &str = "checks.json";

/// Check an HTML document for the presence of CSS selectors.
#[derive(Parser, Debug)]
#[command(name = "htmlgrade", version, about)]
struct Cli {
    /// Path to the checks file (JSON array of selectors)
    #[arg(short, long, value_name = "CHECK_FILE", default_value = CHECKSFILE_DEFAULT)]
    checks: PathBuf,

    /// Path or URL of the HTML document to check
    #[arg(short, long, value_name = "HTML_FILE", default_value = HTMLFILE_DEFAULT)]
    file: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing for dev diagnostics.
///
/// Reads `RUST_LOG`, defaults to `warn`. Output goes to stderr so stdout
/// stays pure JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    // The checks path is asserted up front; the loader's own read still
    // fails cleanly if the file vanishes in between.
    if !cli.checks.exists() {
        anyhow::bail!("{} does not exist. Exiting.", cli.checks.display());
    }

    let html = fetch_document(&cli.file).await?;
    let report = check_html(&html, &cli.checks)?;
    report
        .to_json_pretty()
        .context("Failed to serialize report")
}

/// Acquire document content.
///
/// A single scoped local read; only a missing file selects the remote
/// branch, so there is no separate exists-then-read pair to race against
/// the filesystem. Any other read error is fatal.
async fn fetch_document(source: &str) -> anyhow::Result<String> {
    match tokio::fs::read_to_string(source).await {
        Ok(contents) => {
            tracing::debug!(source, bytes = contents.len(), "read local document");
            Ok(contents)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => fetch_remote(source).await,
        Err(err) => {
            Err(err).with_context(|| format!("Error when reading file: {}", source))
        }
    }
}

/// Fetch the document from a URL. Non-success statuses are fetch failures;
/// a 404 page body is never graded.
async fn fetch_remote(url: &str) -> anyhow::Result<String> {
    tracing::debug!(url, "fetching remote document");

    let response = reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("Error when requesting URL: {}", url))?;

    response
        .text()
        .await
        .with_context(|| format!("Error when requesting URL: {}", url))
}
