use serde_json::Value;

use super::deserializers::parse_timestamp;
use crate::models::{AssistantEvent, EventKind, LogEvent, UserEvent};

const ENTRY_TYPE_USER: &str = "user";
const ENTRY_TYPE_ASSISTANT: &str = "assistant";

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Event(LogEvent),
    /// Malformed JSON or a non-object line
    Skipped,
}

/// Decode one line of a session log
///
/// The `type` tag is read first; only `user` and `assistant` lines have their payload decoded.
/// Every other tag (file-history-snapshot, summary, system, queue-operation, ...) becomes
/// [`EventKind::Other`], which still contributes its timestamp to the session's time range.
pub fn decode_line(line: &str) -> LineOutcome {
    let Ok(value) = serde_json::from_str::<Value>(line) else {
        return LineOutcome::Skipped;
    };
    if !value.is_object() {
        return LineOutcome::Skipped;
    }

    let timestamp = value.get("timestamp").and_then(parse_timestamp);
    let session_id = value.get("sessionId").and_then(Value::as_str).map(str::to_owned);
    let tag = value.get("type").and_then(Value::as_str).map(str::to_owned);

    let kind = match tag.as_deref() {
        Some(ENTRY_TYPE_USER) => match serde_json::from_value::<UserEvent>(value) {
            Ok(event) => EventKind::User(event),
            Err(_) => return LineOutcome::Skipped,
        },
        Some(ENTRY_TYPE_ASSISTANT) => match serde_json::from_value::<AssistantEvent>(value) {
            Ok(event) => EventKind::Assistant(event),
            Err(_) => return LineOutcome::Skipped,
        },
        _ => EventKind::Other { tag },
    };

    LineOutcome::Event(LogEvent { timestamp, session_id, kind })
}
