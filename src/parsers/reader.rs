use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::SystemTime;

/// Default ceiling for a single session file: 50MiB
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Size and times of a session file, taken from the open handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size_bytes: u64,
    pub created: Option<SystemTime>,
    pub modified: Option<SystemTime>,
}

/// A session file buffered in memory, blank lines removed
#[derive(Debug, Clone)]
pub struct SessionFile {
    pub lines: Vec<String>,
    pub stat: FileStat,
}

#[derive(Debug, Clone)]
pub enum FileOutcome {
    Ok(SessionFile),
    TooLarge { size_bytes: u64 },
    Unreadable,
}

/// Reads a whole session file, refusing anything larger than `max_size_bytes`
///
/// The size is checked on the open handle and the read itself is capped at one byte past the
/// ceiling, so a file that grows after the check is still reported as too large rather than
/// partially parsed. Invalid UTF-8 is replaced lossily.
pub fn read_session_file(path: &Path, max_size_bytes: u64) -> FileOutcome {
    let Ok(file) = File::open(path) else {
        return FileOutcome::Unreadable;
    };
    let Ok(metadata) = file.metadata() else {
        return FileOutcome::Unreadable;
    };
    if !metadata.is_file() {
        return FileOutcome::Unreadable;
    }
    if metadata.len() > max_size_bytes {
        return FileOutcome::TooLarge { size_bytes: metadata.len() };
    }

    let mut buffer = Vec::with_capacity(metadata.len() as usize);
    if file.take(max_size_bytes.saturating_add(1)).read_to_end(&mut buffer).is_err() {
        return FileOutcome::Unreadable;
    }
    let size_bytes = buffer.len() as u64;
    if size_bytes > max_size_bytes {
        return FileOutcome::TooLarge { size_bytes };
    }

    let text = String::from_utf8_lossy(&buffer);
    let lines = text.lines().filter(|line| !line.trim().is_empty()).map(str::to_owned).collect();

    FileOutcome::Ok(SessionFile {
        lines,
        stat: FileStat {
            size_bytes,
            created: metadata.created().ok(),
            modified: metadata.modified().ok(),
        },
    })
}
