mod config;
pub mod session;

pub use config::Config;
pub use session::DaySession;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory.
///
/// `FEEDPLAN_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/feedplan[-dev]/`, with the `-dev` suffix when `FEEDPLAN_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("FEEDPLAN_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("FEEDPLAN_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("feedplan-dev")
            } else {
                base_dir.join("feedplan")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
