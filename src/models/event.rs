use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One decoded line of a session log
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub timestamp: Option<DateTime<Utc>>,
    pub session_id: Option<String>,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    User(UserEvent),
    Assistant(AssistantEvent),
    /// Lifecycle, queue, summary and any other tag this crate does not interpret
    Other { tag: Option<String> },
}

impl LogEvent {
    /// True for user and assistant events
    pub fn is_conversation(&self) -> bool {
        matches!(self.kind, EventKind::User(_) | EventKind::Assistant(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub parent_uuid: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub cwd: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub git_branch: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub message: Option<UserMessage>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserMessage {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub content: Option<MessageContent>,
}

/// User content and tool result content share this shape: a bare string or a fragment list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Fragments(
        #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_fragments")]
        Vec<ContentFragment>,
    ),
}

impl MessageContent {
    /// Plain text as-is, or the `text` fragments joined with newlines
    pub fn extract_text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Fragments(fragments) => fragments
                .iter()
                .filter(|f| f.fragment_type == "text")
                .filter_map(|f| f.text.as_deref())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentFragment {
    #[serde(rename = "type", default)]
    pub fragment_type: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantEvent {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub parent_uuid: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub cwd: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub message: Option<AssistantMessage>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssistantMessage {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub stop_reason: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub usage: Option<Usage>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_blocks")]
    pub content: Vec<RawContentBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub cache_creation_input_tokens: u64,
    #[serde(default)]
    pub cache_read_input_tokens: u64,
}

/// Content block as written by the external tool, before normalization
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    ToolUse {
        #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
        id: Option<String>,
        #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
        name: Option<String>,
        #[serde(default)]
        input: Option<Value>,
    },
    ToolResult {
        #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
        tool_use_id: Option<String>,
        #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
        content: Option<MessageContent>,
        #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
        is_error: Option<bool>,
    },
    /// thinking, image, server tool blocks and anything newer
    #[serde(other)]
    Unknown,
}
