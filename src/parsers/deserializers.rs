use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{ContentFragment, RawContentBlock};

/// Parses a timestamp that is either integer Unix milliseconds or an RFC3339 string
///
/// Returns `None` for anything else; a bad timestamp never rejects its line.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::String(s) => DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    }
}

/// Deserializes any value into `Some(T)`, or `None` when it doesn't have the expected shape
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Custom deserializer for assistant content that keeps every well-formed block
///
/// A block that fails to decode is dropped on its own; a bare string becomes one text block.
pub fn deserialize_blocks<'de, D>(deserializer: D) -> Result<Vec<RawContentBlock>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let blocks = match value {
        Value::Array(items) => decode_each(items),
        Value::String(text) => vec![RawContentBlock::Text { text }],
        _ => Vec::new(),
    };
    Ok(blocks)
}

/// Custom deserializer for a fragment list that keeps every well-formed fragment
///
/// Anything other than an array is an error, so an untagged enum can try its next variant.
pub fn deserialize_fragments<'de, D>(deserializer: D) -> Result<Vec<ContentFragment>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(decode_each(items)),
        other => Err(D::Error::custom(format!("expected a fragment list, got {}", other))),
    }
}

fn decode_each<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{AssistantMessage, MessageContent, UserMessage};

    #[test]
    fn test_parse_timestamp_integer_millis() {
        let ts = parse_timestamp(&json!(1762076480016_i64)).unwrap();
        assert_eq!(ts, DateTime::from_timestamp_millis(1762076480016).unwrap());
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let ts = parse_timestamp(&json!("2025-11-02T09:41:20.016Z")).unwrap();
        assert_eq!(ts.timestamp_millis(), 1762076480016);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp(&json!("yesterday")).is_none());
        assert!(parse_timestamp(&json!(null)).is_none());
        assert!(parse_timestamp(&json!({"at": 1})).is_none());
    }

    #[test]
    fn test_lenient_content_accepts_string_and_fragments() {
        let msg: UserMessage =
            serde_json::from_value(json!({"role": "user", "content": "hi"})).unwrap();
        assert_eq!(msg.content, Some(MessageContent::Text("hi".to_string())));

        let msg: UserMessage = serde_json::from_value(
            json!({"role": "user", "content": [{"type": "text", "text": "a"}]}),
        )
        .unwrap();
        assert!(matches!(msg.content, Some(MessageContent::Fragments(ref f)) if f.len() == 1));
    }

    #[test]
    fn test_lenient_content_malformed_becomes_none() {
        let msg: UserMessage =
            serde_json::from_value(json!({"role": "user", "content": 42})).unwrap();
        assert!(msg.content.is_none());
    }

    #[test]
    fn test_blocks_drop_malformed_entries_only() {
        let msg: AssistantMessage = serde_json::from_value(json!({
            "content": [
                {"type": "text", "text": "first"},
                {"type": "text", "text": 7},
                "not an object",
                {"type": "thinking", "thinking": "hmm"},
                {"type": "tool_use", "id": "t1", "name": "Read", "input": {}}
            ]
        }))
        .unwrap();

        assert_eq!(msg.content.len(), 3);
        assert_eq!(msg.content[0], RawContentBlock::Text { text: "first".to_string() });
        assert_eq!(msg.content[1], RawContentBlock::Unknown);
        assert!(matches!(msg.content[2], RawContentBlock::ToolUse { .. }));
    }

    #[test]
    fn test_fragments_keep_text_next_to_stray_entries() {
        let msg: UserMessage = serde_json::from_value(json!({
            "role": "user",
            "content": [{"type": "text", "text": "second"}, "stray", 3, {"type": "text", "text": 9}]
        }))
        .unwrap();

        let content = msg.content.expect("fragment list should survive");
        assert_eq!(content.extract_text(), "second");
    }

    #[test]
    fn test_lenient_scalars_become_none() {
        let msg: AssistantMessage = serde_json::from_value(json!({
            "id": 7,
            "model": ["m"],
            "role": false,
            "stop_reason": {},
            "content": [{"type": "text", "text": "Of course!"}]
        }))
        .unwrap();

        assert_eq!(msg.id, None);
        assert_eq!(msg.model, None);
        assert_eq!(msg.role, None);
        assert_eq!(msg.stop_reason, None);
        assert_eq!(msg.content, vec![RawContentBlock::Text { text: "Of course!".to_string() }]);
    }

    #[test]
    fn test_tool_blocks_survive_mistyped_fields() {
        let msg: AssistantMessage = serde_json::from_value(json!({
            "content": [
                {"type": "tool_use", "id": 1, "name": "Read", "input": {}},
                {"type": "tool_result", "tool_use_id": "t1", "content": "ok", "is_error": "no"}
            ]
        }))
        .unwrap();

        assert_eq!(
            msg.content[0],
            RawContentBlock::ToolUse { id: None, name: Some("Read".into()), input: Some(json!({})) }
        );
        assert_eq!(
            msg.content[1],
            RawContentBlock::ToolResult {
                tool_use_id: Some("t1".into()),
                content: Some(MessageContent::Text("ok".into())),
                is_error: None,
            }
        );
    }

    #[test]
    fn test_blocks_from_bare_string() {
        let msg: AssistantMessage =
            serde_json::from_value(json!({"content": "plain reply"})).unwrap();
        assert_eq!(msg.content, vec![RawContentBlock::Text { text: "plain reply".to_string() }]);
    }

    #[test]
    fn test_blocks_missing_content_is_empty() {
        let msg: AssistantMessage = serde_json::from_value(json!({"model": "m"})).unwrap();
        assert!(msg.content.is_empty());
        assert_eq!(msg.model.as_deref(), Some("m"));
    }
}
