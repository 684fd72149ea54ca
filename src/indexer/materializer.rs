use std::path::Path;

use tracing::debug;

use super::metadata::SessionMetadataBuilder;
use super::project_discovery::find_session_file;
use crate::models::{ParsedMessage, ParsedSession};
use crate::parsers::{
    FileOutcome, LineOutcome, decode_line, read_session_file, reconstruct_message,
};

/// Fully decode one session: listing metadata plus every message, in file order
///
/// Returns `None` when the file is missing, over the size limit, or has no user/assistant
/// events. Callers cannot tell these apart.
pub fn parse_session_in(
    projects_dir: &Path,
    session_id: &str,
    max_file_size_bytes: u64,
) -> Option<ParsedSession> {
    let file = find_session_file(projects_dir, session_id)?;

    let session = match read_session_file(&file.path, max_file_size_bytes) {
        FileOutcome::Ok(session) => session,
        FileOutcome::TooLarge { size_bytes } => {
            debug!(
                path = %file.path.display(),
                size_bytes,
                max_file_size_bytes,
                "Refusing to parse session file over size limit"
            );
            return None;
        }
        FileOutcome::Unreadable => return None,
    };

    let (metadata, messages) = session
        .lines
        .iter()
        .filter_map(|line| match decode_line(line) {
            LineOutcome::Event(event) => Some(event),
            LineOutcome::Skipped => None,
        })
        .fold(
            (SessionMetadataBuilder::new(), Vec::<ParsedMessage>::new()),
            |(mut metadata, mut messages), event| {
                metadata.observe(&event);
                if let Some(message) = reconstruct_message(&event).into_message() {
                    messages.push(message);
                }
                (metadata, messages)
            },
        );

    let info = metadata.build(&file.session_id, &file.project_dir_name, &session.stat)?;
    Some(ParsedSession { info, messages })
}
