//! vendhub-import: Import wizard CLI
//!
//! Drives the VendHub intelligent import pipeline from a terminal: upload a
//! file, watch the session progress, review the server-computed mapping /
//! validation / action plan, then approve or reject. The heavy lifting
//! (parsing, classification, validation, execution) happens server-side;
//! this tool only triggers transitions and renders what the server reports.

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use vendhub_common::config::{self, TomlConfig};
use vendhub_common::format::format_bytes;
use vendhub_import::models::{ImportSession, ImportStatus};
use vendhub_import::preview;
use vendhub_import::{ImportClient, SessionWatcher, WatchConfig, WatchOutcome, WizardStep};

const API_URL_ENV: &str = "VENDHUB_API_URL";
const API_TOKEN_ENV: &str = "VENDHUB_API_TOKEN";

#[derive(Parser)]
#[command(name = "vendhub-import", version, about = "VendHub import service client")]
struct Cli {
    /// Import service base URL (overrides VENDHUB_API_URL and the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bearer token (overrides VENDHUB_API_TOKEN and the config file)
    #[arg(long, global = true)]
    api_token: Option<String>,

    /// TOML config file (default: ~/.config/vendhub/import.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Poll interval in milliseconds
    #[arg(long, global = true)]
    poll_interval_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload a file and create an import session
    Upload {
        file: PathBuf,
        /// Keep polling after upload until the session needs attention
        #[arg(long)]
        watch: bool,
    },
    /// Show the current state of a session
    Status { session_id: Uuid },
    /// Poll a session until it needs attention or finishes
    Watch { session_id: Uuid },
    /// Approve the pending action plan
    Approve { session_id: Uuid },
    /// Reject the pending action plan
    Reject {
        session_id: Uuid,
        /// Free-text reason, forwarded verbatim to the service
        #[arg(long)]
        reason: String,
    },
    /// Cancel a running session
    Cancel { session_id: Uuid },
    /// Full wizard: upload, watch, review, approve or reject, watch to the end
    Run { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .or_else(config::default_config_path)
        .unwrap_or_else(|| PathBuf::from("import.toml"));
    let toml_config = TomlConfig::load(&config_path)?;

    let api_url = config::resolve_api_url(cli.api_url.as_deref(), API_URL_ENV, &toml_config)?;
    let api_token = config::resolve_api_token(cli.api_token.as_deref(), API_TOKEN_ENV, &toml_config);

    let mut client = ImportClient::new(api_url)?;
    if let Some(token) = api_token {
        client = client.with_token(token);
    }

    let mut watch_config = WatchConfig::default();
    if let Some(ms) = cli.poll_interval_ms.or(toml_config.poll_interval_ms) {
        watch_config.poll_interval = std::time::Duration::from_millis(ms);
    }

    match cli.command {
        Command::Upload { file, watch } => {
            let session_id = client.upload_file(&file).await?;
            println!("Session created: {}", session_id);
            if watch {
                let session = watch_and_report(&client, watch_config, session_id).await?;
                print_session(&session);
            }
        }
        Command::Status { session_id } => {
            let session = client.session(session_id).await?;
            print_session(&session);
        }
        Command::Watch { session_id } => {
            let session = watch_and_report(&client, watch_config, session_id).await?;
            print_session(&session);
        }
        Command::Approve { session_id } => {
            client.approve(session_id).await?;
            let session = client.session(session_id).await?;
            print_session(&session);
        }
        Command::Reject { session_id, reason } => {
            client.reject(session_id, &reason).await?;
            let session = client.session(session_id).await?;
            print_session(&session);
        }
        Command::Cancel { session_id } => {
            client.cancel(session_id).await?;
            let session = client.session(session_id).await?;
            print_session(&session);
        }
        Command::Run { file } => {
            run_wizard(&client, watch_config, &file).await?;
        }
    }

    Ok(())
}

/// Full interactive wizard flow
async fn run_wizard(client: &ImportClient, watch_config: WatchConfig, file: &Path) -> Result<()> {
    let session_id = client.upload_file(file).await?;
    println!("Session created: {}", session_id);

    let session = watch_and_report(client, watch_config.clone(), session_id).await?;

    if session.status != ImportStatus::AwaitingApproval {
        // FAILED / REJECTED / CANCELLED end the wizard here
        print_session(&session);
        return Ok(());
    }

    print_session(&session);

    // One reader for the whole dialog: a per-prompt reader would drop
    // whatever its buffer read past the first newline
    let mut input = tokio::io::BufReader::new(tokio::io::stdin());

    let answer = prompt(&mut input, "Apply this plan? [y = approve, n = reject]").await?;
    if answer.eq_ignore_ascii_case("y") {
        client.approve(session_id).await?;
        let session = watch_and_report(client, watch_config, session_id).await?;
        print_session(&session);
    } else {
        let reason = prompt(&mut input, "Rejection reason:").await?;
        client.reject(session_id, &reason).await?;
        let session = client.session(session_id).await?;
        print_session(&session);
    }

    Ok(())
}

/// Poll a session to its next stopping status, printing status changes as
/// they are observed. Ctrl-C cancels the watch cleanly.
async fn watch_and_report(
    client: &ImportClient,
    watch_config: WatchConfig,
    session_id: Uuid,
) -> Result<ImportSession> {
    let watcher = Arc::new(SessionWatcher::new(client.clone(), watch_config));

    let cancel_token = watcher.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_token.cancel();
        }
    });

    let mut updates = watcher.updates();
    let printer = tokio::spawn(async move {
        let mut last_status: Option<ImportStatus> = None;
        while updates.changed().await.is_ok() {
            let session = updates.borrow_and_update().clone();
            if let Some(session) = session {
                if last_status != Some(session.status) {
                    println!(
                        "[{}] {:?}{}",
                        WizardStep::for_status(session.status),
                        session.status,
                        session
                            .message
                            .as_deref()
                            .map(|m| format!(" — {}", m))
                            .unwrap_or_default()
                    );
                    last_status = Some(session.status);
                }
            }
        }
    });

    let outcome = watcher.watch(session_id).await;
    drop(watcher); // closes the update channel so the printer task ends
    let _ = printer.await;

    match outcome? {
        WatchOutcome::Stopped(session) => Ok(session),
        WatchOutcome::Cancelled => anyhow::bail!("watch cancelled"),
    }
}

/// Render everything the session currently carries
fn print_session(session: &ImportSession) {
    println!();
    println!(
        "Session {} — {:?} (step: {})",
        session.session_id,
        session.status,
        WizardStep::for_status(session.status)
    );
    if let Some(meta) = &session.file_metadata {
        println!("File: {} ({})", meta.filename, format_bytes(meta.size_bytes));
    }
    if let Some(message) = &session.message {
        println!("Message: {}", message);
    }

    if let Some(classification) = &session.classification_result {
        let mapping = preview::mapping_preview(classification);
        println!();
        println!(
            "Classification: {} ({:.0}%)",
            mapping.domain,
            mapping.confidence * 100.0
        );
        for row in &mapping.rows {
            println!("  {}", row.render());
        }
    }

    if let Some(report) = &session.validation_report {
        let summary = preview::summarize_report(report);
        println!();
        println!(
            "Validation: {:?} — {} errors, {} warnings, {} info",
            summary.banner,
            summary.error_count(),
            summary.warning_count(),
            summary.info_count()
        );
        for issue in summary
            .errors
            .iter()
            .chain(summary.warnings.iter())
            .chain(summary.infos.iter())
        {
            let row = issue.row.map(|r| format!("row {}: ", r)).unwrap_or_default();
            println!("  [{:?}] {}{}", issue.severity, row, issue.message);
        }
    }

    if let Some(plan) = &session.action_plan {
        let summary = preview::summarize_plan(plan);
        println!();
        println!(
            "Action plan: {} actions, ~{}",
            summary.total, summary.estimated_duration
        );
        for card in &summary.cards {
            println!("  {}: {}", card.label, card.count);
        }
        for risk in &summary.risks {
            println!("  Risk: {}", risk);
        }
        for action in &summary.visible_actions {
            println!("  - {}", action.description);
        }
        if let Some(overflow) = summary.overflow_line() {
            println!("  {}", overflow);
        }
    }

    if let Some(result) = &session.execution_result {
        println!();
        println!(
            "Execution: {} succeeded, {} failed",
            result.success_count, result.failure_count
        );
    }
}

/// Ask one question and read one answer line from the shared reader
async fn prompt<R>(input: &mut R, question: &str) -> Result<String>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    use tokio::io::AsyncBufReadExt;

    print!("{} ", question);
    std::io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line).await?;
    Ok(line.trim().to_string())
}
