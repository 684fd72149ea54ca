use std::path::{Path, PathBuf};

use super::listing::list_sessions_in;
use super::materializer::parse_session_in;
use crate::models::{ClaudeSessionInfo, ParsedSession};
use crate::parsers::DEFAULT_MAX_FILE_SIZE_BYTES;

/// Read-only view of a Claude Code session store (`~/.claude/projects`)
///
/// Holds no state besides its configuration; every call re-reads the filesystem.
///
/// # Examples
///
/// ```no_run
/// use claude_sessions::SessionStore;
///
/// let store = SessionStore::new("/Users/alice/.claude/projects");
/// for session in store.list_sessions() {
///     println!("{} {}", session.session_id, session.project_name);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    projects_dir: PathBuf,
    max_file_size_bytes: u64,
}

impl SessionStore {
    pub fn new(projects_dir: impl Into<PathBuf>) -> Self {
        Self { projects_dir: projects_dir.into(), max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES }
    }

    /// Store rooted at `<claude_dir>/projects`
    pub fn from_claude_dir(claude_dir: &Path) -> Self {
        Self::new(claude_dir.join("projects"))
    }

    /// Override the per-file size ceiling
    pub fn with_max_file_size(mut self, max_file_size_bytes: u64) -> Self {
        self.max_file_size_bytes = max_file_size_bytes;
        self
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }

    /// All non-empty sessions, newest `updated_at` first
    pub fn list_sessions(&self) -> Vec<ClaudeSessionInfo> {
        list_sessions_in(&self.projects_dir, self.max_file_size_bytes)
    }

    /// One session with all of its messages, or `None` if it can't be found or has no content
    pub fn parse_session(&self, session_id: &str) -> Option<ParsedSession> {
        parse_session_in(&self.projects_dir, session_id, self.max_file_size_bytes)
    }
}

/// [`SessionStore::list_sessions`] with the default size ceiling
pub fn list_sessions(projects_dir: &Path) -> Vec<ClaudeSessionInfo> {
    SessionStore::new(projects_dir).list_sessions()
}

/// [`SessionStore::parse_session`] with the default size ceiling
pub fn parse_session(projects_dir: &Path, session_id: &str) -> Option<ParsedSession> {
    SessionStore::new(projects_dir).parse_session(session_id)
}
