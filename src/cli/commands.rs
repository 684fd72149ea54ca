use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::indexer::SessionStore;
use crate::models::{ClaudeSessionInfo, ContentBlock, ParsedSession, Role};
use crate::utils::{decode_path, format_path_with_tilde, get_projects_dir};

const TABLE_PREVIEW_CHARS: usize = 60;
const TOOL_OUTPUT_PREVIEW_CHARS: usize = 200;

#[derive(Parser)]
#[command(name = "claude-sessions")]
#[command(version)]
#[command(about = "Browse Claude Code session logs", long_about = None)]
pub struct Cli {
    /// Session store root (defaults to $CLAUDE_CONFIG_DIR/projects or ~/.claude/projects)
    #[arg(long, global = true, value_name = "PATH")]
    pub projects_dir: Option<PathBuf>,

    /// Skip session files larger than this many MiB
    #[arg(long, global = true, value_name = "MIB")]
    pub max_file_size_mb: Option<u64>,

    /// Log debug diagnostics to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List sessions, most recently updated first
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Show at most this many sessions
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show the full transcript of one session
    Show {
        session_id: String,
        /// Print JSON instead of a transcript
        #[arg(long)]
        json: bool,
    },
    /// Show statistics about the session store
    Stats,
    /// Decode a project directory name into a display path
    DecodePath {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::List { json, limit }) => list(&build_store(&cli)?, *json, *limit),
        Some(Commands::Show { session_id, json }) => show(&build_store(&cli)?, session_id, *json),
        Some(Commands::Stats) => show_stats(&build_store(&cli)?),
        Some(Commands::DecodePath { name }) => {
            println!("{}", decode_path(name));
            Ok(())
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when embedded; keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_store(cli: &Cli) -> Result<SessionStore> {
    let projects_dir = match &cli.projects_dir {
        Some(dir) => dir.clone(),
        None => get_projects_dir().context("Failed to locate the Claude projects directory")?,
    };

    let mut store = SessionStore::new(projects_dir);
    if let Some(mb) = cli.max_file_size_mb {
        let bytes = mb.checked_mul(1024 * 1024).context("--max-file-size-mb is too large")?;
        store = store.with_max_file_size(bytes);
    }
    Ok(store)
}

fn list(store: &SessionStore, json: bool, limit: Option<usize>) -> Result<()> {
    let mut sessions = store.list_sessions();
    if let Some(limit) = limit {
        sessions.truncate(limit);
    }

    if json {
        let output =
            serde_json::to_string_pretty(&sessions).context("Failed to serialize sessions")?;
        println!("{}", output);
        return Ok(());
    }

    if sessions.is_empty() {
        let projects_dir = store.projects_dir().to_string_lossy();
        println!("No sessions found in {}", format_path_with_tilde(&projects_dir));
        return Ok(());
    }

    println!(
        "{:<36}  {:<16}  {:>5}  {:>5}  {:<30}  PREVIEW",
        "SESSION", "UPDATED", "USER", "ASST", "PROJECT"
    );
    for session in &sessions {
        print_session_row(session);
    }
    Ok(())
}

fn print_session_row(session: &ClaudeSessionInfo) {
    println!(
        "{:<36}  {:<16}  {:>5}  {:>5}  {:<30}  {}",
        session.session_id,
        session.updated_at.format("%Y-%m-%d %H:%M"),
        session.user_message_count,
        session.assistant_message_count,
        format_path_with_tilde(&session.project_path),
        session
            .preview
            .as_deref()
            .map(|p| single_line(p, TABLE_PREVIEW_CHARS))
            .unwrap_or_default(),
    );
}

fn show(store: &SessionStore, session_id: &str, json: bool) -> Result<()> {
    let Some(session) = store.parse_session(session_id) else {
        bail!("Session not found: {}", session_id);
    };

    if json {
        let output =
            serde_json::to_string_pretty(&session).context("Failed to serialize session")?;
        println!("{}", output);
        return Ok(());
    }

    print_transcript(&session);
    Ok(())
}

fn print_transcript(session: &ParsedSession) {
    let info = &session.info;
    println!("Session: {}", info.session_id);
    println!("Project: {}", format_path_with_tilde(&info.project_path));
    if let Some(branch) = &info.git_branch {
        println!("Branch:  {}", branch);
    }
    println!(
        "Period:  {} .. {}",
        info.created_at.format("%Y-%m-%d %H:%M:%S"),
        info.updated_at.format("%Y-%m-%d %H:%M:%S")
    );

    for message in &session.messages {
        let role = match message.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        println!();
        match message.timestamp {
            Some(ts) => println!("=== {} ({}) ===", role, ts.format("%Y-%m-%d %H:%M:%S")),
            None => println!("=== {} ===", role),
        }

        for block in &message.content_blocks {
            match block {
                ContentBlock::Text { text } => println!("{}", text),
                ContentBlock::ToolUse { name, input, .. } => {
                    let input = single_line(&input.to_string(), TOOL_OUTPUT_PREVIEW_CHARS);
                    println!("[tool_use {}] {}", name, input);
                }
                ContentBlock::ToolResult { tool_use_id, content, is_error } => {
                    let label = if *is_error { "tool_error" } else { "tool_result" };
                    let output = single_line(content, TOOL_OUTPUT_PREVIEW_CHARS);
                    println!("[{} {}] {}", label, tool_use_id, output);
                }
            }
        }
    }
}

fn show_stats(store: &SessionStore) -> Result<()> {
    let sessions = store.list_sessions();

    let user_messages: usize = sessions.iter().map(|s| s.user_message_count).sum();
    let assistant_messages: usize = sessions.iter().map(|s| s.assistant_message_count).sum();
    let total_bytes: u64 = sessions.iter().map(|s| s.file_size_bytes).sum();
    let mut projects: Vec<&str> = sessions.iter().map(|s| s.project_path.as_str()).collect();
    projects.sort_unstable();
    projects.dedup();

    println!("Claude Code Session Statistics");
    println!("==============================");
    println!("Sessions: {}", sessions.len());
    println!("Projects: {}", projects.len());
    println!("  User events: {}", user_messages);
    println!("  Assistant events: {}", assistant_messages);
    println!("  Total size: {} bytes", total_bytes);
    println!();
    let projects_dir = store.projects_dir().to_string_lossy();
    println!("Projects directory: {}", format_path_with_tilde(&projects_dir));

    if let Some(oldest) = sessions.iter().map(|s| s.created_at).min() {
        println!("Oldest session: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = sessions.first() {
        println!("Newest activity: {}", newest.updated_at.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

/// Collapse whitespace runs to single spaces and cut to `max_chars`
fn single_line(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
