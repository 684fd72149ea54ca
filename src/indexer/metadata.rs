//! Single-pass accumulation of listing metadata

use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::models::{ClaudeSessionInfo, EventKind, LogEvent};
use crate::parsers::{FileStat, extract_user_text};
use crate::utils::{decode_path, project_name};

/// Maximum length of a session preview, in characters
pub const PREVIEW_MAX_CHARS: usize = 120;

/// Accumulates [`ClaudeSessionInfo`] fields while events are read in file order
#[derive(Debug, Clone, Default)]
pub struct SessionMetadataBuilder {
    user_message_count: usize,
    assistant_message_count: usize,
    cwd: Option<String>,
    git_branch: Option<String>,
    version: Option<String>,
    preview: Option<String>,
    earliest: Option<DateTime<Utc>>,
    latest: Option<DateTime<Utc>>,
}

impl SessionMetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event in; the time range is the min/max timestamp, not first/last in file order
    pub fn observe(&mut self, event: &LogEvent) {
        if let Some(ts) = event.timestamp {
            self.earliest = Some(self.earliest.map_or(ts, |e| e.min(ts)));
            self.latest = Some(self.latest.map_or(ts, |l| l.max(ts)));
        }

        match &event.kind {
            EventKind::User(user) => {
                self.user_message_count += 1;
                fill_once(&mut self.cwd, &user.cwd);
                fill_once(&mut self.git_branch, &user.git_branch);
                fill_once(&mut self.version, &user.version);
                if self.preview.is_none() {
                    self.preview = extract_user_text(user)
                        .map(|text| text.chars().take(PREVIEW_MAX_CHARS).collect());
                }
            }
            EventKind::Assistant(_) => self.assistant_message_count += 1,
            EventKind::Other { .. } => {}
        }
    }

    /// True while no user or assistant event has been observed
    pub fn is_empty(&self) -> bool {
        self.user_message_count == 0 && self.assistant_message_count == 0
    }

    /// Assemble the listing entry, or `None` for a session with no conversation events
    ///
    /// Without any in-band timestamp the range falls back to the file's birth and modify times.
    pub fn build(
        self,
        session_id: &str,
        project_dir_name: &str,
        stat: &FileStat,
    ) -> Option<ClaudeSessionInfo> {
        if self.is_empty() {
            return None;
        }

        let (created_at, updated_at) = match (self.earliest, self.latest) {
            (Some(earliest), Some(latest)) => (earliest, latest),
            _ => file_time_range(stat),
        };

        let project_path = self.cwd.unwrap_or_else(|| decode_path(project_dir_name).into_string());

        Some(ClaudeSessionInfo {
            session_id: session_id.to_string(),
            project_name: project_name(&project_path),
            cwd: project_path.clone(),
            project_path,
            git_branch: self.git_branch,
            version: self.version,
            preview: self.preview,
            user_message_count: self.user_message_count,
            assistant_message_count: self.assistant_message_count,
            created_at,
            updated_at,
            file_size_bytes: stat.size_bytes,
        })
    }
}

/// First non-empty value wins
fn fill_once(slot: &mut Option<String>, value: &Option<String>) {
    if slot.is_none()
        && let Some(value) = value.as_deref().filter(|v| !v.is_empty())
    {
        *slot = Some(value.to_string());
    }
}

fn file_time_range(stat: &FileStat) -> (DateTime<Utc>, DateTime<Utc>) {
    let to_utc = |time: Option<SystemTime>| time.map(DateTime::<Utc>::from);
    let modified = to_utc(stat.modified);
    let created = to_utc(stat.created);

    let updated_at = modified.or(created).unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
    let created_at = created.or(modified).unwrap_or(DateTime::<Utc>::UNIX_EPOCH).min(updated_at);
    (created_at, updated_at)
}
