//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the projects directory
    pub fn projects_dir(&self) -> PathBuf {
        self.temp_dir.path().join("projects")
    }

    /// Add a project directory with the given encoded name and session files
    pub fn with_project(self, encoded_name: &str, session_files: &[SessionFileBuilder]) -> Self {
        let project_dir = self.projects_dir().join(encoded_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for session_file in session_files {
            session_file.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for session log files
pub struct SessionFileBuilder {
    session_id: String,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    /// Create a new session file named `<session_id>.jsonl`
    pub fn new(session_id: &str) -> Self {
        Self { session_id: session_id.to_string(), lines: Vec::new() }
    }

    /// Add an event line
    pub fn with_entry(mut self, entry: EventLineBuilder) -> Self {
        self.lines.push(entry.to_json());
        self
    }

    /// Add a raw line verbatim (malformed JSON, unknown event types, ...)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) {
        let file_path = dir.join(format!("{}.jsonl", self.session_id));
        fs::write(file_path, self.lines.join("\n")).expect("Failed to write session file");
    }
}

/// Content of a user or assistant event
enum Content {
    Text(String),
    Blocks(Vec<String>),
}

/// Builder for user/assistant event lines
pub struct EventLineBuilder {
    entry_type: String,
    content: Content,
    timestamp: Option<String>,
    cwd: Option<String>,
    git_branch: Option<String>,
    version: Option<String>,
    uuid: String,
}

impl EventLineBuilder {
    /// Create a new user event with plain string content
    pub fn user() -> Self {
        Self {
            entry_type: "user".to_string(),
            content: Content::Text("Test message".to_string()),
            timestamp: Some("2025-01-01T10:00:00.000Z".to_string()),
            cwd: None,
            git_branch: None,
            version: None,
            uuid: "550e8400-e29b-41d4-a716-446655440001".to_string(),
        }
    }

    /// Create a new assistant event with a single text block
    pub fn assistant() -> Self {
        Self {
            entry_type: "assistant".to_string(),
            content: Content::Blocks(vec![Self::text_block("Test response")]),
            timestamp: Some("2025-01-01T10:00:01.000Z".to_string()),
            cwd: None,
            git_branch: None,
            version: None,
            uuid: "550e8400-e29b-41d4-a716-446655440002".to_string(),
        }
    }

    /// Set plain string content
    pub fn text(mut self, text: &str) -> Self {
        self.content = Content::Text(text.to_string());
        self
    }

    /// Set content blocks
    pub fn content_blocks(mut self, blocks: Vec<String>) -> Self {
        self.content = Content::Blocks(blocks);
        self
    }

    /// Set the timestamp (RFC3339)
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    /// Drop the timestamp field entirely
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    pub fn git_branch(mut self, branch: &str) -> Self {
        self.git_branch = Some(branch.to_string());
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn uuid(mut self, uuid: &str) -> Self {
        self.uuid = uuid.to_string();
        self
    }

    /// A text block (for use in content blocks array)
    pub fn text_block(text: &str) -> String {
        serde_json::json!({"type": "text", "text": text}).to_string()
    }

    /// A thinking block
    pub fn thinking_block(text: &str) -> String {
        serde_json::json!({"type": "thinking", "thinking": text}).to_string()
    }

    /// A tool_use block
    pub fn tool_use_block(id: &str, name: &str, input_json: &str) -> String {
        format!(r#"{{"type":"tool_use","id":"{}","name":"{}","input":{}}}"#, id, name, input_json)
    }

    /// A tool_result block
    pub fn tool_result_block(tool_use_id: &str, content_json: &str, is_error: bool) -> String {
        format!(
            r#"{{"type":"tool_result","tool_use_id":"{}","content":{},"is_error":{}}}"#,
            tool_use_id, content_json, is_error
        )
    }

    /// An image block
    pub fn image_block() -> String {
        r#"{"type":"image","source":{"type":"base64","media_type":"image/png","data":"iVBORw0KGgo="}}"#
            .to_string()
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        let content = match &self.content {
            Content::Text(text) => serde_json::Value::String(text.clone()).to_string(),
            Content::Blocks(blocks) => format!("[{}]", blocks.join(",")),
        };

        let mut fields = vec![
            format!(r#""type":"{}""#, self.entry_type),
            r#""parentUuid":null"#.to_string(),
            r#""sessionId":"550e8400-e29b-41d4-a716-446655440000""#.to_string(),
            format!(r#""message":{{"role":"{}","content":{}}}"#, self.entry_type, content),
            format!(r#""uuid":"{}""#, self.uuid),
        ];
        if let Some(ts) = &self.timestamp {
            fields.push(format!(r#""timestamp":"{}""#, ts));
        }
        if let Some(cwd) = &self.cwd {
            fields.push(format!(r#""cwd":"{}""#, cwd));
        }
        if let Some(branch) = &self.git_branch {
            fields.push(format!(r#""gitBranch":"{}""#, branch));
        }
        if let Some(version) = &self.version {
            fields.push(format!(r#""version":"{}""#, version));
        }

        format!("{{{}}}", fields.join(","))
    }
}

/// A lifecycle line that is structurally valid but carries no conversation content
pub fn lifecycle_line() -> String {
    r#"{"type":"queue-operation","operation":"dequeue","timestamp":"2025-01-01T09:59:59.000Z","sessionId":"550e8400-e29b-41d4-a716-446655440000"}"#
        .to_string()
}

/// Helper to create a realistic .claude directory with sample data
pub fn realistic_claude_dir() -> TempDir {
    ClaudeDirBuilder::new()
        .with_project(
            "-Users-test-project1",
            &[SessionFileBuilder::new("11111111-1111-1111-1111-111111111111")
                .with_raw_line(&lifecycle_line())
                .with_entry(
                    EventLineBuilder::user()
                        .text("Hello from project one")
                        .cwd("/Users/test/project1")
                        .git_branch("main")
                        .version("2.0.14")
                        .timestamp("2025-01-01T10:00:00.000Z"),
                )
                .with_entry(
                    EventLineBuilder::assistant()
                        .content_blocks(vec![EventLineBuilder::text_block("Hi there")])
                        .timestamp("2025-01-01T10:00:05.000Z"),
                )],
        )
        .with_project(
            "-Users-test-project2",
            &[SessionFileBuilder::new("22222222-2222-2222-2222-222222222222").with_entry(
                EventLineBuilder::user()
                    .text("Another project")
                    .cwd("/Users/test/project2")
                    .timestamp("2025-02-01T10:00:00.000Z"),
            )],
        )
        .build()
}
