//! Where spotlight keeps its files
//!
//! One root directory holds `config.yaml` and a `logs/` folder of
//! daily-rotated logs. The root is `$XDG_CONFIG_HOME/spotlight` or
//! `~/.config/spotlight` on Unix, `%APPDATA%\spotlight` on Windows.
//! Every `*_in` helper takes the root explicitly so callers (and tests)
//! can point it elsewhere.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "spotlight";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Prefix of the daily-rotated log files (`spotlight.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "spotlight.log";

/// Root directory, or `None` when no home or app-data dir is known
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|xdg| !xdg.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|base| base.join(APP_DIR))
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|root| config_file_in(&root))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|root| logs_dir_in(&root))
}

/// Newest log file, falling back to the undated name when none exist yet
pub fn log_file() -> Option<PathBuf> {
    config_dir().map(|root| newest_log_in(&logs_dir_in(&root)))
}

/// Create the logs directory if needed
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}

pub fn config_file_in(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn logs_dir_in(root: &Path) -> PathBuf {
    root.join(LOGS_DIR)
}

/// Newest `spotlight.log*` in `logs`; dated suffixes sort lexically
pub fn newest_log_in(logs: &Path) -> PathBuf {
    let newest = fs::read_dir(logs).ok().and_then(|entries| {
        entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX))
            })
            .max()
    });
    newest.unwrap_or_else(|| logs.join(LOG_FILE_PREFIX))
}
