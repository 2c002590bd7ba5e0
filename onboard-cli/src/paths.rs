//! Filesystem locations for the session database and log file.
//!
//! Resolved per platform through `directories` (XDG dirs on Linux,
//! `Application Support` on macOS, `AppData` on Windows).

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "onboard";
const APPLICATION: &str = "onboard";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory for data that outlives a run, or `None` when no home
/// directory can be resolved.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Directory for disposable data such as logs.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Where the persisted session tokens live.
pub fn session_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("session.db"))
}

/// Where the current run's log is written.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("onboard.log"))
}
