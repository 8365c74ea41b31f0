//! Client configuration loading.
//!
//! Settings come from `config.toml` in the per-user config directory
//! (e.g. `~/.config/noteseek/config.toml`), then from environment
//! variables. A missing file means defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{NoteSeekError, Result};

/// Default server address (the notes server listens on port 5000).
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Default tracing filter.
pub const DEFAULT_LOG_LEVEL: &str = "noteseek=info";

/// Environment variable overriding `server_url`.
pub const ENV_SERVER_URL: &str = "NOTESEEK_SERVER_URL";

/// Environment variable overriding `log_level`.
pub const ENV_LOG: &str = "NOTESEEK_LOG";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the notes search server
    pub server_url: String,
    /// Tracing filter directive (EnvFilter syntax)
    pub log_level: String,
    /// Log file directory (defaults to `<data dir>/logs`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the user config file, then apply
    /// environment overrides.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let mut config = match config_file() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific file. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| NoteSeekError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// [`ClientConfig::load`]). Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = value(ENV_SERVER_URL) {
            self.server_url = url;
        }
        if let Some(level) = value(ENV_LOG) {
            self.log_level = level;
        }
    }

    /// Directory for log files, if one can be determined.
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| data_dir().map(|dir| dir.join("logs")))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "noteseek")
}

/// Path of the user config file.
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Per-user local data directory.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server_url = \"http://notes.lan:8000\"\n").unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.server_url, "http://notes.lan:8000");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "server_url = \"https://notes.example\"\nlog_level = \"debug\"\nlog_dir = \"/var/log/noteseek\"\n",
        )
        .unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir(), Some(PathBuf::from("/var/log/noteseek")));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server_url = [unterminated").unwrap();

        assert!(matches!(
            ClientConfig::load_from(&path),
            Err(NoteSeekError::Config(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_SERVER_URL, "http://10.0.0.2:5000"),
            (ENV_LOG, "  "),
        ]
        .into_iter()
        .collect();

        let mut config = ClientConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server_url, "http://10.0.0.2:5000");
        // Blank values do not override.
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
