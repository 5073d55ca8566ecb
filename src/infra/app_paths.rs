//! Usage: Resolve per-user app data directory and the log directory under it.

use crate::shell_config::ShellConfig;
use std::path::{Path, PathBuf};

pub const APP_DOTDIR_NAME: &str = ".desktop-shell";
const LOGS_DIR_NAME: &str = "logs";

// A single hidden path component: leading dot, then `[A-Za-z0-9._-]`, never `.` or `..`.
fn is_safe_dotdir_name(name: &str) -> bool {
    match name.strip_prefix('.') {
        None | Some("") | Some(".") => false,
        Some(rest) => rest
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')),
    }
}

fn dotdir_name(config: &ShellConfig) -> &str {
    config
        .dotdir_name
        .as_deref()
        .filter(|name| is_safe_dotdir_name(name))
        .unwrap_or(APP_DOTDIR_NAME)
}

pub fn app_data_dir_in(home_dir: &Path, config: &ShellConfig) -> PathBuf {
    home_dir.join(dotdir_name(config))
}

pub fn log_dir_in(home_dir: &Path, config: &ShellConfig) -> PathBuf {
    if let Some(dir) = config.log_dir.as_ref() {
        return dir.clone();
    }
    app_data_dir_in(home_dir, config).join(LOGS_DIR_NAME)
}

/// Resolves and creates the log directory.
pub fn log_dir(config: &ShellConfig) -> Result<PathBuf, String> {
    let dir = match config.log_dir.as_ref() {
        Some(dir) => dir.clone(),
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| "APP_PATHS: failed to resolve home dir".to_string())?;
            log_dir_in(&home_dir, config)
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("APP_PATHS: failed to create {}: {e}", dir.display()))?;
    Ok(dir)
}
