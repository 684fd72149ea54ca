use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::utils::is_valid_session_id;

/// Extension of session log files
pub const SESSION_FILE_EXTENSION: &str = "jsonl";

/// A project grouping directory under the projects root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    pub encoded_name: String,
    pub path: PathBuf,
}

/// A session log file and the project directory it was found in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFileRef {
    pub session_id: String,
    pub project_dir_name: String,
    pub path: PathBuf,
}

/// Immediate children of `dir`, sorted by name, symlinks not followed
fn sorted_children(dir: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name().into_iter().filter_map(
        |entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "Skipping unreadable directory entry");
                None
            }
        },
    )
}

/// List project directories under the projects root, sorted by name
///
/// Returns an empty Vec if the root doesn't exist (not an error). Regular files and symlinks at
/// the top level are ignored.
pub fn discover_projects(projects_dir: &Path) -> Vec<ProjectDir> {
    if !projects_dir.is_dir() {
        return Vec::new();
    }

    sorted_children(projects_dir)
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| ProjectDir {
            encoded_name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
        })
        .collect()
}

/// List `*.jsonl` files directly inside one project directory, sorted by name
pub fn discover_session_files_in(project: &ProjectDir) -> Vec<SessionFileRef> {
    sorted_children(&project.path)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let path = entry.into_path();
            if path.extension().and_then(|e| e.to_str()) != Some(SESSION_FILE_EXTENSION) {
                return None;
            }
            // A non-UTF-8 stem could never be looked up by id
            let session_id = path.file_stem()?.to_str()?.to_owned();
            Some(SessionFileRef { session_id, project_dir_name: project.encoded_name.clone(), path })
        })
        .collect()
}

/// Every session file under the projects root, in deterministic (project, file name) order
pub fn discover_session_files(projects_dir: &Path) -> Vec<SessionFileRef> {
    discover_projects(projects_dir).iter().flat_map(discover_session_files_in).collect()
}

/// Find `<session_id>.jsonl`, scanning projects in the same order as [`discover_session_files`]
///
/// The first project containing the file wins.
pub fn find_session_file(projects_dir: &Path, session_id: &str) -> Option<SessionFileRef> {
    if !is_valid_session_id(session_id) {
        return None;
    }
    let file_name = format!("{}.{}", session_id, SESSION_FILE_EXTENSION);

    discover_projects(projects_dir).into_iter().find_map(|project| {
        let path = project.path.join(&file_name);
        let is_file = fs::symlink_metadata(&path).map(|m| m.is_file()).unwrap_or(false);
        is_file.then(|| SessionFileRef {
            session_id: session_id.to_string(),
            project_dir_name: project.encoded_name,
            path,
        })
    })
}
