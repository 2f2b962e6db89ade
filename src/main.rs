mod config;
mod soda;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "soda",
    version,
    about = "Extract track and lyrics data from Soda Music share links"
)]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Request timeout in seconds (0 disables).
    #[arg(long)]
    timeout: Option<u64>,

    /// Log pipeline steps to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the filtered track record as JSON (default).
    Track { url: Option<String> },
    /// Print lyric lines only.
    Lyrics { url: Option<String> },
    /// Print a track summary as JSON.
    Song { url: Option<String> },
    /// Dump the whole `_ROUTER_DATA` document as JSON.
    Raw { url: Option<String> },
    /// Print the config file path in use.
    ConfigPath,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let mut cfg = config::load(cli.config.as_deref()).context("load config")?;
    if let Some(secs) = cli.timeout {
        cfg.http.timeout_secs = secs;
    }

    let command = cli.command.unwrap_or(Command::Track { url: None });
    let mut stdout = std::io::stdout().lock();
    run(command, &cfg, cli.config.as_deref(), &mut stdout).await
}

/// Execute one command, writing its output to `out`.
///
/// Output is only written once the page has been fetched and decoded, so a
/// failing run leaves `out` untouched.
async fn run<W: Write>(
    command: Command,
    cfg: &config::Config,
    config_override: Option<&Path>,
    out: &mut W,
) -> anyhow::Result<ExitCode> {
    match command {
        Command::Track { url } => {
            let Some((_, doc)) = fetch_doc(cfg, url).await? else {
                return not_found(out);
            };
            let filtered = soda::filtered_track(&doc, &cfg.track.fields)?;
            soda::output::write_json(out, &filtered)?;
        }
        Command::Lyrics { url } => {
            let Some((_, doc)) = fetch_doc(cfg, url).await? else {
                return not_found(out);
            };
            let record = soda::track_record(&doc)?;
            print_lines(out, &soda::models::lyric_lines(record))?;
        }
        Command::Song { url } => {
            let Some((url, doc)) = fetch_doc(cfg, url).await? else {
                return not_found(out);
            };
            let track_page = soda::track_page(&doc)?;
            let record = soda::track_record(&doc)?;
            let song = soda::Song::from_track_page(track_page, record, &url);
            soda::output::write_json(out, &song)?;
        }
        Command::Raw { url } => {
            let Some((_, doc)) = fetch_doc(cfg, url).await? else {
                return not_found(out);
            };
            soda::output::write_json(out, &doc)?;
        }
        Command::ConfigPath => {
            let path = config::resolve_path(config_override).context("config path")?;
            writeln!(out, "{}", path.display()).context("write output")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Fetch the share page and decode its router data. Returns the share URL used.
async fn fetch_doc(
    cfg: &config::Config,
    url: Option<String>,
) -> anyhow::Result<Option<(String, serde_json::Value)>> {
    let url = url.unwrap_or_else(|| cfg.track.url.clone());
    let client = soda::SodaClient::new(&cfg.http)?;
    let page = client.fetch_page(&url).await?;
    match soda::parse_router_data(&page.body)? {
        Some(doc) => Ok(Some((url, doc))),
        None => {
            tracing::debug!("no _ROUTER_DATA in page from {}", page.url);
            Ok(None)
        }
    }
}

fn not_found<W: Write>(out: &mut W) -> anyhow::Result<ExitCode> {
    writeln!(out, "{}", soda::NOT_FOUND_MESSAGE).context("write output")?;
    Ok(ExitCode::FAILURE)
}

fn print_lines<W: Write>(out: &mut W, lines: &[String]) -> anyhow::Result<()> {
    for line in lines {
        writeln!(out, "{line}").context("write output")?;
    }
    Ok(())
}
