//! Centralized configuration management for cardhub

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// How long a success notice stays up before returning to the previous screen
    pub dismiss_delay_ms: u64,
    /// Event poll interval for the TUI loop
    pub tick_rate_ms: u64,
    /// Log file written by the TUI
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dismiss_delay_ms: 2000,
            tick_rate_ms: 250,
            log_file: PathBuf::from("cardhub.log"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let log_file = std::env::var("CARDHUB_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);

        Ok(Config {
            dismiss_delay_ms: parse_env_var("CARDHUB_DISMISS_DELAY_MS")?
                .unwrap_or(defaults.dismiss_delay_ms),
            tick_rate_ms: parse_env_var("CARDHUB_TICK_RATE_MS")?.unwrap_or(defaults.tick_rate_ms),
            log_file,
        })
    }

    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Directory and file name of the log file, for the file appender
    pub fn log_location(&self) -> (PathBuf, PathBuf) {
        let dir = self
            .log_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let name = self
            .log_file
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("cardhub.log"));
        (dir, name)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.dismiss_delay_ms == 0 {
            return Err(anyhow::anyhow!("CARDHUB_DISMISS_DELAY_MS must be greater than zero"));
        }
        if self.tick_rate_ms == 0 {
            return Err(anyhow::anyhow!("CARDHUB_TICK_RATE_MS must be greater than zero"));
        }

        let (dir, _) = self.log_location();
        if !dir.exists() {
            return Err(anyhow::anyhow!(
                "Log directory does not exist: {}",
                dir.display()
            ));
        }

        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.dismiss_delay(), Duration::from_secs(2));
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(
            config.log_location(),
            (PathBuf::from("."), PathBuf::from("cardhub.log"))
        );
    }

    #[test]
    fn test_config_validation() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: dir.path().join("cardhub.log"),
            ..Config::default()
        };
        config.validate().unwrap();

        let missing = Config {
            log_file: dir.path().join("missing").join("cardhub.log"),
            ..Config::default()
        };
        assert!(missing.validate().is_err());

        let zero_delay = Config {
            dismiss_delay_ms: 0,
            ..config
        };
        assert!(zero_delay.validate().is_err());
    }

    #[test]
    fn test_parse_env_var_rejects_garbage() {
        std::env::set_var("CARDHUB_TEST_PARSE_GARBAGE", "soon");
        assert!(parse_env_var::<u64>("CARDHUB_TEST_PARSE_GARBAGE").is_err());
        assert_eq!(parse_env_var::<u64>("CARDHUB_TEST_UNSET_VAR").unwrap(), None);
    }
}
