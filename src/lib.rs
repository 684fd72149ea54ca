//! Claude Sessions - Read and normalize Claude Code session logs
//!
//! Claude Code writes one append-only JSONL file per conversation under
//! `~/.claude/projects/<encoded-project-dir>/<session-id>.jsonl`. This library reads those files
//! without ever modifying them and provides:
//!
//! - Listing every session with lightweight metadata (counts, preview, time range)
//! - Decoding one session into role-tagged messages with tool calls and results
//! - Best-effort decoding of the project directory names for display
//!
//! Malformed lines, truncated files and unknown event types are tolerated; the worst outcome of
//! any call is an empty listing or `None`.
//!
//! # Example
//!
//! ```no_run
//! use claude_sessions::SessionStore;
//!
//! let store = SessionStore::new("/Users/alice/.claude/projects");
//! if let Some(latest) = store.list_sessions().first() {
//!     let session = store.parse_session(&latest.session_id);
//!     println!("{} messages", session.map(|s| s.messages.len()).unwrap_or(0));
//! }
//! ```

pub mod cli;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use indexer::{SessionStore, list_sessions, parse_session};
pub use models::{ClaudeSessionInfo, ContentBlock, ParsedMessage, ParsedSession, Role};
pub use parsers::DEFAULT_MAX_FILE_SIZE_BYTES;
pub use utils::paths::{DecodedPath, decode_path};
