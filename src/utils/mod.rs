pub mod environment;
pub mod paths;

pub use environment::{get_claude_dir, get_projects_dir};
pub use paths::{
    DecodedPath, decode_path, format_path_with_tilde, is_valid_session_id, project_name,
};
