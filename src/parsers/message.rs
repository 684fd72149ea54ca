use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::models::{
    AssistantEvent, ContentBlock, EventKind, LogEvent, ParsedMessage, RawContentBlock, Role,
    UserEvent,
};

#[derive(Debug, Clone, PartialEq)]
pub enum MessageOutcome {
    Message(ParsedMessage),
    NoMessage,
}

impl MessageOutcome {
    pub fn into_message(self) -> Option<ParsedMessage> {
        match self {
            MessageOutcome::Message(message) => Some(message),
            MessageOutcome::NoMessage => None,
        }
    }
}

/// Turn one decoded event into at most one normalized message
pub fn reconstruct_message(event: &LogEvent) -> MessageOutcome {
    match &event.kind {
        EventKind::User(user) => user_message(user, event.timestamp),
        EventKind::Assistant(assistant) => assistant_message(assistant, event.timestamp),
        EventKind::Other { .. } => MessageOutcome::NoMessage,
    }
}

/// Text a user event contributes, or `None` if it is empty or whitespace
///
/// Plain string content is used as-is; fragment lists keep only `text` fragments.
pub fn extract_user_text(event: &UserEvent) -> Option<String> {
    let text = event.message.as_ref()?.content.as_ref()?.extract_text();
    if text.trim().is_empty() { None } else { Some(text) }
}

pub fn user_message(event: &UserEvent, timestamp: Option<DateTime<Utc>>) -> MessageOutcome {
    let Some(text) = extract_user_text(event) else {
        return MessageOutcome::NoMessage;
    };

    MessageOutcome::Message(ParsedMessage {
        role: Role::User,
        plain_text: text.clone(),
        content_blocks: vec![ContentBlock::Text { text }],
        has_tool_blocks: false,
        timestamp,
        uuid: event.uuid.clone(),
        model: None,
    })
}

pub fn assistant_message(event: &AssistantEvent, timestamp: Option<DateTime<Utc>>) -> MessageOutcome {
    let Some(message) = event.message.as_ref() else {
        return MessageOutcome::NoMessage;
    };

    let mut content_blocks = Vec::with_capacity(message.content.len());
    let mut text_parts: Vec<&str> = Vec::new();

    for block in &message.content {
        match block {
            RawContentBlock::Text { text } => {
                if text.is_empty() {
                    continue;
                }
                text_parts.push(text);
                content_blocks.push(ContentBlock::Text { text: text.clone() });
            }
            RawContentBlock::ToolUse { id, name, input } => {
                content_blocks.push(ContentBlock::ToolUse {
                    id: id.clone().unwrap_or_default(),
                    name: name.clone().unwrap_or_default(),
                    input: input.clone().unwrap_or_else(|| Value::Object(Map::new())),
                });
            }
            RawContentBlock::ToolResult { tool_use_id, content, is_error } => {
                content_blocks.push(ContentBlock::ToolResult {
                    tool_use_id: tool_use_id.clone().unwrap_or_default(),
                    content: content.as_ref().map(|c| c.extract_text()).unwrap_or_default(),
                    is_error: is_error.unwrap_or(false),
                });
            }
            RawContentBlock::Unknown => {}
        }
    }

    if content_blocks.is_empty() {
        return MessageOutcome::NoMessage;
    }

    let has_tool_blocks = content_blocks.iter().any(ContentBlock::is_tool);
    MessageOutcome::Message(ParsedMessage {
        role: Role::Assistant,
        plain_text: text_parts.join("\n"),
        content_blocks,
        has_tool_blocks,
        timestamp,
        uuid: event.uuid.clone(),
        model: message.model.clone(),
    })
}
