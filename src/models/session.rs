use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ParsedMessage;

/// Listing metadata for one session file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeSessionInfo {
    pub session_id: String,
    pub project_path: String,
    pub project_name: String,
    pub cwd: String,
    pub git_branch: Option<String>,
    pub version: Option<String>,
    pub preview: Option<String>,
    pub user_message_count: usize,
    pub assistant_message_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub file_size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSession {
    pub info: ClaudeSessionInfo,
    pub messages: Vec<ParsedMessage>,
}
