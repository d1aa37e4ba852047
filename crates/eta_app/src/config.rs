use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::{Cli, LogLevel};
use crate::platform::logging::LogDestination;

const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file {path}: {message}")]
    Parse { path: String, message: String },
    #[error("tick interval must be at least 1 ms")]
    ZeroInterval,
}

/// Runtime settings, loaded from an optional RON file and then overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub tick_interval_ms: u64,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
    pub set_terminal_title: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            log_destination: LogDestination::default(),
            log_level: LogLevel::default(),
            set_terminal_title: false,
        }
    }
}

impl EstimatorConfig {
    /// Reads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(interval) = cli.interval_ms {
            self.tick_interval_ms = interval;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(destination) = cli.log_destination {
            self.log_destination = destination;
        }
        if cli.title {
            self.set_terminal_title = true;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn missing_path_yields_defaults() {
        let config = EstimatorConfig::load(None).unwrap();
        assert_eq!(config, EstimatorConfig::default());
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn partial_ron_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "(tick_interval_ms: 250, log_destination: file)").unwrap();

        let config = EstimatorConfig::load(Some(file.path())).unwrap();
        assert_eq!(
            config,
            EstimatorConfig {
                tick_interval_ms: 250,
                log_destination: LogDestination::File,
                ..EstimatorConfig::default()
            }
        );
    }

    #[test]
    fn unreadable_or_invalid_files_are_errors() {
        let missing = EstimatorConfig::load(Some(Path::new("/nonexistent/task-eta.ron")));
        assert!(matches!(missing, Err(ConfigError::Read { .. })));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "(tick_interval_ms: \"soon\")").unwrap();
        let invalid = EstimatorConfig::load(Some(file.path()));
        assert!(matches!(invalid, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn flags_override_file_values() {
        let cli = Cli::parse_from(["task-eta", "--interval-ms", "0", "--title", "-l", "warn"]);
        let config = EstimatorConfig::default().with_overrides(&cli);

        assert_eq!(config.tick_interval_ms, 0);
        assert!(config.set_terminal_title);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroInterval)));
    }
}
