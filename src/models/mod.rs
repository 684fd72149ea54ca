//! Data models for Claude Code session logs.
//!
//! Two layers live here:
//!
//! - [`LogEvent`] and its payloads - one decoded line, shaped like the on-disk JSON
//! - [`ParsedMessage`], [`ClaudeSessionInfo`] and [`ParsedSession`] - normalized output handed
//!   to the host application, serialized as camelCase JSON
//!
//! On-disk payloads are deserialized with lenient custom deserializers from
//! `parsers::deserializers` so that a malformed sub-field degrades to "no content" instead of
//! rejecting the whole line.

pub mod event;
pub mod message;
pub mod session;

pub use event::{
    AssistantEvent, AssistantMessage, ContentFragment, EventKind, LogEvent, MessageContent,
    RawContentBlock, Usage, UserEvent, UserMessage,
};
pub use message::{ContentBlock, ParsedMessage, Role};
pub use session::{ClaudeSessionInfo, ParsedSession};
