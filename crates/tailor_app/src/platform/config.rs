use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;
use tailor_core::DEFAULT_STEP_INTERVAL;
use tailor_logging::tailor_info;
use thiserror::Error;

use super::logging::LogDestination;

const CONFIG_FILENAME: &str = "tailor.ron";
const CONFIG_ENV: &str = "TAILOR_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("tick_interval_ms must be greater than zero")]
    ZeroInterval,
}

/// Host settings read from `tailor.ron`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tick_interval_ms: u64,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
    /// Program and arguments that print the clipboard text to stdout.
    pub clipboard_command: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_STEP_INTERVAL.as_millis() as u64,
            log_destination: LogDestination::default(),
            log_level: LevelFilter::Info,
            clipboard_command: default_clipboard_command(),
        }
    }
}

impl AppConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// `$TAILOR_CONFIG` if set, otherwise `./tailor.ron`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// Loads the config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: AppConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if config.tick_interval_ms == 0 {
        return Err(ConfigError::ZeroInterval);
    }

    tailor_info!("Loaded config from {:?}", path);
    Ok(config)
}

fn default_clipboard_command() -> Vec<String> {
    let parts: &[&str] = if cfg!(target_os = "macos") {
        &["pbpaste"]
    } else if cfg!(target_os = "windows") {
        &["powershell", "-NoProfile", "-Command", "Get-Clipboard"]
    } else {
        &["xclip", "-selection", "clipboard", "-o"]
    };
    parts.iter().map(|part| part.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use log::LevelFilter;
    use tempfile::NamedTempFile;

    use super::{load_config, AppConfig, ConfigError, LogDestination};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = load_config(&dir.path().join("tailor.ron")).expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tick_interval_ms, 1500);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config("(tick_interval_ms: 200, log_destination: Both)");
        let config = load_config(file.path()).expect("parsed");

        assert_eq!(config.tick_interval_ms, 200);
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(
            config.clipboard_command,
            AppConfig::default().clipboard_command
        );
    }

    #[test]
    fn clipboard_command_can_be_overridden() {
        let file = write_config(r#"(clipboard_command: ["wl-paste", "--no-newline"])"#);
        let config = load_config(file.path()).expect("parsed");
        assert_eq!(config.clipboard_command, vec!["wl-paste", "--no-newline"]);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let file = write_config("tick_interval_ms = 5");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let file = write_config("(tick_interval_ms: 0)");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInterval));
    }
}
