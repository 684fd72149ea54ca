//! Decoding of Claude Code session logs, from bytes on disk to normalized messages
//!
//! # Error Handling Strategy
//!
//! Session files are owned by an external tool, append-only and unversioned, so nothing in this
//! module returns an error. Each stage reports an explicit outcome instead:
//!
//! - **File level** ([`reader`]): `FileOutcome::{Ok, TooLarge, Unreadable}`. The whole file is
//!   buffered, so the size ceiling is the only protection against runaway memory use.
//!
//! - **Line level** ([`line`]): `LineOutcome::{Event, Skipped}`. A malformed or truncated line
//!   is skipped and the rest of the file is still processed.
//!
//! - **Event level** ([`message`]): `MessageOutcome::{Message, NoMessage}`. Missing or
//!   unusable content produces no message rather than a failure.
//!
//! Callers decide how much of this to surface; the session indexer logs skips via `tracing`.

pub mod deserializers;
pub mod line;
pub mod message;
pub mod reader;

pub use line::{LineOutcome, decode_line};
pub use message::{MessageOutcome, extract_user_text, reconstruct_message};
pub use reader::{DEFAULT_MAX_FILE_SIZE_BYTES, FileOutcome, FileStat, SessionFile, read_session_file};
