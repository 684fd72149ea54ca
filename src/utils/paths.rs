use std::fmt;
use std::path::Path;

/// Character Claude Code substitutes for every path separator in project directory names
const ESCAPE_CHAR: char = '-';
const SEPARATOR: char = '/';

/// Best-effort display form of an encoded project directory name
///
/// The encoding is lossy: a directory originally named `my-app` decodes to `my/app`. Use this
/// only when no authoritative `cwd` was recorded; it is deliberately not a `PathBuf`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedPath(String);

impl DecodedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DecodedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for DecodedPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DecodedPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Decodes Claude's project directory name back to a display path
///
/// Names without the leading escape are returned unchanged.
///
/// # Examples
///
/// ```
/// use claude_sessions::decode_path;
///
/// assert_eq!(decode_path("-Users-john-projects-myapp"), "/Users/john/projects/myapp");
/// assert_eq!(decode_path("some-dir"), "some-dir");
/// ```
pub fn decode_path(encoded: &str) -> DecodedPath {
    if !encoded.starts_with(ESCAPE_CHAR) {
        return DecodedPath(encoded.to_string());
    }
    DecodedPath(encoded.replace(ESCAPE_CHAR, &SEPARATOR.to_string()))
}

/// Last non-empty segment of a path, or the whole string if there is none
pub fn project_name(project_path: &str) -> String {
    project_path
        .trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(project_path)
        .to_string()
}

/// Session ids come from file stems, so anything that could escape a directory never matches
pub fn is_valid_session_id(session_id: &str) -> bool {
    !session_id.is_empty()
        && session_id != "."
        && session_id != ".."
        && !session_id.contains(['/', '\\', '\0'])
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &str) -> String {
    let home = dirs::home_dir();
    format_path_with_tilde_internal(path, home.as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &str, home: Option<&Path>) -> String {
    if let Some(home) = home.and_then(Path::to_str)
        && !home.is_empty()
        && let Some(rest) = path.strip_prefix(home)
        && (rest.is_empty() || rest.starts_with('/'))
    {
        return format!("~{}", rest);
    }
    path.to_string()
}
