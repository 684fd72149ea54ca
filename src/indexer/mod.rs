//! Session enumeration and materialization over a Claude Code projects directory
//!
//! # Error Handling Strategy
//!
//! Everything here degrades to "less data" rather than failing:
//!
//! - **Structural absence**: a missing projects directory, project directory or session file
//!   yields an empty listing or `None`.
//!
//! - **Per-file failures**: an oversize file is skipped with a `warn!` while listing and reported
//!   as not found when parsing; unreadable files are skipped. One bad file never affects the
//!   others.
//!
//! - **Per-line failures**: malformed lines are skipped by the line decoder and counted in a
//!   `debug!` summary.
//!
//! - **Empty sessions**: a file without any user or assistant event is excluded from both
//!   operations.
//!
//! Both operations share the same single forward pass over a file's lines
//! ([`metadata::SessionMetadataBuilder`]); parsing additionally folds each event through the
//! message reconstructor.

pub mod listing;
pub mod materializer;
pub mod metadata;
pub mod project_discovery;
pub mod store;

pub use listing::list_sessions_in;
pub use materializer::parse_session_in;
pub use metadata::{PREVIEW_MAX_CHARS, SessionMetadataBuilder};
pub use project_discovery::{discover_projects, discover_session_files, find_session_file};
pub use store::{SessionStore, list_sessions, parse_session};
