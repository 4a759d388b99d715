//! The current day's feeding log on disk.
//!
//! Only one day is ever kept: a session stamped with another date is
//! discarded on load and replaced by an empty one for the requested day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{Result, SessionError};
use crate::log::FeedingLog;

/// A feeding log together with the day it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySession {
    pub date: NaiveDate,
    #[serde(default)]
    pub log: FeedingLog,
}

impl DaySession {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            log: FeedingLog::new(),
        }
    }

    /// Path of the session file inside the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("session.json"))
    }

    /// Load the session for `today` from the data directory.
    ///
    /// # Errors
    ///
    /// See [`DaySession::load_from`].
    pub fn load(today: NaiveDate) -> Result<Self> {
        Self::load_from(&Self::path()?, today)
    }

    /// Load the session for `today` from `path`.
    ///
    /// A missing file or a session from another day yields an empty session.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path, today: NaiveDate) -> Result<Self> {
        let read_failed = |message: String| SessionError::ReadFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new(today)),
            Err(e) => return Err(read_failed(e.to_string()).into()),
        };
        let session: DaySession =
            serde_json::from_str(&content).map_err(|e| read_failed(e.to_string()))?;
        if session.date != today {
            tracing::info!(stale = %session.date, %today, "starting a new day's log");
            return Ok(Self::new(today));
        }
        Ok(session)
    }

    /// # Errors
    ///
    /// See [`DaySession::save_to`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write the session as pretty JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let write_failed = |message: String| SessionError::WriteFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = serde_json::to_string_pretty(self).map_err(|e| write_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| write_failed(e.to_string()))?;
        tracing::debug!(path = %path.display(), feeds = self.log.len(), "saved session");
        Ok(())
    }
}
