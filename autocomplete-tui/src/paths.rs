//! Where the picker keeps its settings and logs.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const LATEST_LOG: &str = "latest.log";
/// Archived logs kept next to `latest.log`.
const KEPT_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "autocomplete", "autocomplete-tui")
}

/// Log directory: `~/.cache/autocomplete-tui` on Linux.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Default settings file: `~/.config/autocomplete-tui/settings.json` on Linux.
pub fn settings_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log and prune old archives.
///
/// Runs before the logger exists, so failures are silent.
pub fn rotate_logs() {
    if let Some(dir) = cache_dir() {
        rotate_logs_in(&dir, KEPT_LOGS);
    }
}

fn rotate_logs_in(dir: &Path, keep: usize) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, dir.join(format!("{stamp}.log")));
    }

    let mut archived = archived_logs(dir);
    if archived.len() <= keep {
        return;
    }
    // Timestamped names sort oldest first.
    archived.sort();
    for path in &archived[..archived.len() - keep] {
        let _ = fs::remove_file(path);
    }
}

fn archived_logs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .collect()
}
