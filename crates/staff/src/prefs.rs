//! Persistent login preferences.
//!
//! A small JSON file records the last remembered account and the state
//! of the "remember me" checkbox, so the login form can prefill itself
//! on the next launch.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors that can occur while loading or saving preferences.
#[derive(thiserror::Error, Debug)]
pub enum PrefsError {
    /// The preferences file could not be read or written.
    #[error("preferences file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The preferences file exists but does not hold valid JSON.
    #[error("preferences file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The remembered login state.
///
/// When `remember_me` is false no account is retained; the two fields
/// are written together so they can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// The account to prefill into the login form, if any.
    pub remembered_account: Option<String>,
    /// Whether the "remember me" checkbox was ticked at last login.
    pub remember_me: bool,
}

/// Loads and saves [`Preferences`] at a fixed path.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Create a store backed by the given file path. The file need not
    /// exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, returning defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Io`] if the file exists but cannot be read,
    /// or [`PrefsError::Malformed`] if it is not valid JSON.
    pub fn load(&self) -> Result<Preferences, PrefsError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no preferences file, using defaults");
            return Ok(Preferences::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write preferences, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Io`] if the file cannot be written.
    pub fn save(&self, prefs: &Preferences) -> Result<(), PrefsError> {
        let raw = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), remember = prefs.remember_me, "preferences saved");
        Ok(())
    }

    /// Record the outcome of a successful login: keep the account when
    /// the checkbox was ticked, otherwise clear any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Io`] if the file cannot be written.
    pub fn remember_account(&self, account: &str, remember: bool) -> Result<(), PrefsError> {
        let prefs = if remember {
            Preferences {
                remembered_account: Some(account.to_owned()),
                remember_me: true,
            }
        } else {
            Preferences::default()
        };
        self.save(&prefs)
    }
}
