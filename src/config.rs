use crate::persistence::get_data_dir;
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "WORKTRIP_LOG";
pub const DEFAULT_LOG_FILTER: &str = "worktrip=info";
pub const LOG_FILE_NAME: &str = "worktrip.log";

/// How long the event loop waits for a key before redrawing
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Startup settings, resolved once
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub log_filter: String,
}

impl Settings {
    /// Flags win over the environment, which wins over defaults
    pub fn resolve(data_dir: Option<PathBuf>, log_level: Option<String>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => get_data_dir()?,
        };
        let log_filter = pick_log_filter(log_level, env::var(LOG_ENV).ok());

        Ok(Self {
            data_dir,
            log_filter,
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

fn pick_log_filter(flag: Option<String>, env_value: Option<String>) -> String {
    flag.into_iter()
        .chain(env_value)
        .find(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
