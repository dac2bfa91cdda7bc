//! Application configuration from environment variables.
//!
//! Reads the following environment variables, all optional:
//!
//! - `STAFF_PREFS_PATH` - Where the login preferences file lives
//!   (default: `staff-prefs.json` in the working directory)
//! - `STAFF_LOGIN_LATENCY_MS` - Simulated directory-lookup latency in
//!   milliseconds (default: 2000)

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default simulated latency for deferred auth completions.
pub const DEFAULT_LOGIN_LATENCY_MS: u64 = 2_000;

/// Default preferences file name.
pub const DEFAULT_PREFS_FILE: &str = "staff-prefs.json";

/// Errors that can occur when loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set but holds an unusable value.
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnvVar {
        /// The variable that failed to parse.
        name: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Runtime configuration for the staff application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffConfig {
    /// Path of the JSON preferences file.
    pub prefs_path: PathBuf,
    /// Simulated latency before a deferred login or sign-up completes.
    pub login_latency: Duration,
}

impl StaffConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when `STAFF_LOGIN_LATENCY_MS`
    /// is set but not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let prefs_path = env::var("STAFF_PREFS_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_PREFS_FILE), PathBuf::from);

        let login_latency = match env::var("STAFF_LOGIN_LATENCY_MS") {
            Ok(raw) => parse_latency_ms("STAFF_LOGIN_LATENCY_MS", &raw)?,
            Err(_) => Duration::from_millis(DEFAULT_LOGIN_LATENCY_MS),
        };

        Ok(Self {
            prefs_path,
            login_latency,
        })
    }
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            prefs_path: PathBuf::from(DEFAULT_PREFS_FILE),
            login_latency: Duration::from_millis(DEFAULT_LOGIN_LATENCY_MS),
        }
    }
}

fn parse_latency_ms(name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name,
            value: raw.to_owned(),
        })
}
