//! Usage: Environment-driven shell configuration (logging + data dir), read once at startup.

use std::path::PathBuf;

pub const LOG_FILTER_ENV: &str = "DESKTOP_SHELL_LOG";
pub const LOG_DIR_ENV: &str = "DESKTOP_SHELL_LOG_DIR";
pub const DOTDIR_NAME_ENV: &str = "DESKTOP_SHELL_DOTDIR_NAME";
pub const DEV_DIAGNOSTICS_ENV: &str = "DESKTOP_SHELL_DEV_DIAGNOSTICS";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub log_filter: String,
    pub log_dir: Option<PathBuf>,
    pub dotdir_name: Option<String>,
    pub dev_diagnostics: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
            dotdir_name: None,
            dev_diagnostics: false,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            log_filter: non_empty(LOG_FILTER_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_dir: non_empty(LOG_DIR_ENV).map(PathBuf::from),
            dotdir_name: non_empty(DOTDIR_NAME_ENV),
            dev_diagnostics: non_empty(DEV_DIAGNOSTICS_ENV).is_some_and(|v| is_truthy(&v)),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.to_ascii_lowercase();
    value == "1" || value == "true" || value == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = ShellConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_all_variables() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            (LOG_FILTER_ENV, "desktop_shell_lib=debug"),
            (LOG_DIR_ENV, "/tmp/shell-logs"),
            (DOTDIR_NAME_ENV, ".shell-dev"),
            (DEV_DIAGNOSTICS_ENV, "yes"),
        ]));

        assert_eq!(config.log_filter, "desktop_shell_lib=debug");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/shell-logs")));
        assert_eq!(config.dotdir_name.as_deref(), Some(".shell-dev"));
        assert!(config.dev_diagnostics);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            (LOG_FILTER_ENV, "   "),
            (LOG_DIR_ENV, ""),
            (DOTDIR_NAME_ENV, " "),
        ]));
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn dev_diagnostics_accepts_only_truthy_flags() {
        for value in ["1", "true", "TRUE", " Yes "] {
            let config = ShellConfig::from_lookup(lookup_from(&[(DEV_DIAGNOSTICS_ENV, value)]));
            assert!(config.dev_diagnostics, "{value}");
        }
        for value in ["0", "false", "no", "on"] {
            let config = ShellConfig::from_lookup(lookup_from(&[(DEV_DIAGNOSTICS_ENV, value)]));
            assert!(!config.dev_diagnostics, "{value}");
        }
    }
}
