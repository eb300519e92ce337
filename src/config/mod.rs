//! Configuration management for Tradepulse.

mod settings;

pub use settings::{ApiConfig, Config, IdentityConfig, KeyBindings, PollConfig, UiConfig};

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Prefix for environment overrides, e.g. `TRADEPULSE__API__BASE_URL`.
pub const ENV_PREFIX: &str = "TRADEPULSE";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "tradepulse", "tradepulse")
        .ok_or_else(|| Error::config("Could not determine project directories"))
}

/// Get the configuration directory path.
pub fn config_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the log directory path.
pub fn log_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}
