use std::path::Path;

use tracing::{debug, warn};

use super::metadata::SessionMetadataBuilder;
use super::project_discovery::{SessionFileRef, discover_session_files};
use crate::models::ClaudeSessionInfo;
use crate::parsers::{FileOutcome, LineOutcome, decode_line, read_session_file};

/// List every non-empty session under `projects_dir`, newest first
///
/// Each file is read once and only its metadata is kept. A file that is too large, unreadable,
/// or has no user/assistant events is left out; nothing here fails the whole listing. Sessions
/// with equal `updated_at` keep their discovery order (project name, then file name).
pub fn list_sessions_in(projects_dir: &Path, max_file_size_bytes: u64) -> Vec<ClaudeSessionInfo> {
    let files = discover_session_files(projects_dir);
    let total_files = files.len();

    let mut sessions: Vec<ClaudeSessionInfo> = files
        .iter()
        .filter_map(|file| summarize_session_file(file, max_file_size_bytes))
        .collect();

    debug!(
        projects_dir = %projects_dir.display(),
        total_files,
        listed = sessions.len(),
        "Listed sessions"
    );

    // sort_by is stable
    sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sessions
}

/// Metadata pass over one session file
pub fn summarize_session_file(
    file: &SessionFileRef,
    max_file_size_bytes: u64,
) -> Option<ClaudeSessionInfo> {
    let session = match read_session_file(&file.path, max_file_size_bytes) {
        FileOutcome::Ok(session) => session,
        FileOutcome::TooLarge { size_bytes } => {
            warn!(
                path = %file.path.display(),
                size_bytes,
                max_file_size_bytes,
                "Skipping session file over size limit"
            );
            return None;
        }
        FileOutcome::Unreadable => {
            debug!(path = %file.path.display(), "Skipping unreadable session file");
            return None;
        }
    };

    let mut metadata = SessionMetadataBuilder::new();
    let mut skipped_lines = 0usize;
    for line in &session.lines {
        match decode_line(line) {
            LineOutcome::Event(event) => metadata.observe(&event),
            LineOutcome::Skipped => skipped_lines += 1,
        }
    }

    if skipped_lines > 0 {
        debug!(
            path = %file.path.display(),
            skipped_lines,
            total_lines = session.lines.len(),
            "Skipped malformed lines"
        );
    }

    metadata.build(&file.session_id, &file.project_dir_name, &session.stat)
}
