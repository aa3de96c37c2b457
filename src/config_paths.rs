//! Configuration paths for safe-edit
//!
//! Everything lives under:
//! - Unix/macOS: `~/.config/safe-edit/`
//! - Windows: `%APPDATA%\safe-edit\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "safe-edit";

/// File name prefix of the rolling log (`safe-edit.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "safe-edit.log";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/safe-edit`
///   - Else: `~/.config/safe-edit`
///
/// Windows:
///   - `%APPDATA%\safe-edit`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/safe-edit/themes/`
pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

/// `~/.config/safe-edit/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/safe-edit/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Newest rolling log file in `logs_dir`, or the bare prefix if none exist yet
pub fn latest_log_file(logs_dir: &Path) -> PathBuf {
    let mut log_files: Vec<PathBuf> = fs::read_dir(logs_dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| {
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX))
                })
                .collect()
        })
        .unwrap_or_default();

    // YYYY-MM-DD suffixes sort naturally
    log_files.sort_by(|a, b| b.cmp(a));

    log_files
        .into_iter()
        .next()
        .unwrap_or_else(|| logs_dir.join(LOG_FILE_PREFIX))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_log_file_picks_newest() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "safe-edit.log.2026-01-02",
            "safe-edit.log.2026-01-10",
            "other.txt",
        ] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        assert_eq!(
            latest_log_file(dir.path()),
            dir.path().join("safe-edit.log.2026-01-10")
        );
    }

    #[test]
    fn test_latest_log_file_falls_back_to_prefix() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(latest_log_file(dir.path()), dir.path().join(LOG_FILE_PREFIX));
    }
}
