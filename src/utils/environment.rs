use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable Claude Code reads to relocate its configuration directory
pub const CLAUDE_CONFIG_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

/// Get the Claude directory path (`$CLAUDE_CONFIG_DIR`, or ~/.claude)
pub fn get_claude_dir() -> Result<PathBuf> {
    resolve_claude_dir(env::var_os(CLAUDE_CONFIG_DIR_ENV), dirs::home_dir())
}

/// Get the session store root (`<claude dir>/projects`)
pub fn get_projects_dir() -> Result<PathBuf> {
    Ok(get_claude_dir()?.join("projects"))
}

fn resolve_claude_dir(config_dir: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = config_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = home.context("Could not determine home directory")?;
    Ok(home.join(".claude"))
}
