//! Runtime configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file
//! (`TASKBELL_CONFIG`, or `config.yaml` inside the store directory), then
//! `TASKBELL_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::alert::AlertConfig;
use crate::ports::NotificationPermission;

/// Directory used when neither a flag nor `TASKBELL_STORE` names one.
pub const DEFAULT_STORE_DIR: &str = ".taskbell";

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the task snapshot.
    pub store_dir: PathBuf,
    /// Deadline alert timing.
    pub alerts: AlertConfig,
    /// Starting notification permission.
    pub notifications: NotificationPermission,
}

/// On-disk configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    lookahead_minutes: Option<i64>,
    poll_seconds: Option<u64>,
    notifications: Option<NotificationPermission>,
}

impl Config {
    /// Resolves configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file or an environment value is invalid.
    pub fn load(store_override: Option<&Path>) -> Result<Self, String> {
        Self::resolve(store_override, |key| std::env::var(key).ok())
    }

    /// Resolves configuration using `env` to look up variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file or an environment value is invalid.
    pub fn resolve<F>(store_override: Option<&Path>, env: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_dir = store_override.map_or_else(
            || env("TASKBELL_STORE").map_or_else(|| PathBuf::from(DEFAULT_STORE_DIR), PathBuf::from),
            Path::to_path_buf,
        );

        let config_path = env("TASKBELL_CONFIG")
            .map_or_else(|| store_dir.join("config.yaml"), PathBuf::from);
        let file = read_config_file(&config_path)?;

        let mut alerts = AlertConfig::default();
        let mut notifications = NotificationPermission::default();

        if let Some(minutes) = file.lookahead_minutes {
            alerts.lookahead = lookahead_from_minutes(minutes)?;
        }
        if let Some(seconds) = file.poll_seconds {
            alerts.poll_interval = poll_from_seconds(seconds)?;
        }
        if let Some(permission) = file.notifications {
            notifications = permission;
        }

        if let Some(raw) = env("TASKBELL_LOOKAHEAD_MINUTES") {
            let minutes = raw
                .trim()
                .parse()
                .map_err(|e| format!("Invalid TASKBELL_LOOKAHEAD_MINUTES '{raw}': {e}"))?;
            alerts.lookahead = lookahead_from_minutes(minutes)?;
        }
        if let Some(raw) = env("TASKBELL_POLL_SECONDS") {
            let seconds = raw
                .trim()
                .parse()
                .map_err(|e| format!("Invalid TASKBELL_POLL_SECONDS '{raw}': {e}"))?;
            alerts.poll_interval = poll_from_seconds(seconds)?;
        }
        if let Some(raw) = env("TASKBELL_NOTIFICATIONS") {
            notifications = raw.parse()?;
        }

        Ok(Self { store_dir, alerts, notifications })
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => serde_yaml::from_str::<Option<ConfigFile>>(&contents)
            .map(Option::unwrap_or_default)
            .map_err(|e| format!("Failed to parse config file {}: {e}", path.display())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(err) => Err(format!("Failed to read config file {}: {err}", path.display())),
    }
}

/// Longest accepted lookahead: one year.
pub const MAX_LOOKAHEAD_MINUTES: i64 = 366 * 24 * 60;

fn lookahead_from_minutes(minutes: i64) -> Result<chrono::Duration, String> {
    if minutes <= 0 {
        return Err(format!("Lookahead must be a positive number of minutes, got {minutes}"));
    }
    if minutes > MAX_LOOKAHEAD_MINUTES {
        return Err(format!(
            "Lookahead of {minutes} minutes exceeds the maximum of {MAX_LOOKAHEAD_MINUTES}"
        ));
    }
    chrono::Duration::try_minutes(minutes)
        .ok_or_else(|| format!("Lookahead of {minutes} minutes is out of range"))
}

fn poll_from_seconds(seconds: u64) -> Result<std::time::Duration, String> {
    if seconds == 0 {
        return Err("Poll interval must be at least one second".to_string());
    }
    Ok(std::time::Duration::from_secs(seconds))
}
