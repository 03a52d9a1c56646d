//! Configuration management.
//!
//! Handles:
//! - Default ledger used for checksums
//! - Default log level
//! - Default entity kind for `parse`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use ledger_id::{EntityKind, LedgerId};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("net", "ledger", "ledgerctl")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CliError::NoConfigDir.into())
}

/// Path of the config file.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ledger used to compute and verify checksums.
    #[serde(default)]
    pub ledger: LedgerId,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Entity kind assumed when a command is not given `--kind`.
    #[serde(default = "default_kind")]
    pub kind: EntityKind,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_kind() -> EntityKind {
    EntityKind::Account
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: LedgerId::default(),
            log_level: default_log_level(),
            kind: default_kind(),
        }
    }
}

impl Config {
    /// Load config from disk, or return default.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load config from `path`, or return default if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<PathBuf> {
        let path = config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let contents = serde_json::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            file.write_all(contents.as_bytes())?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
        }

        Ok(())
    }

    /// Delete the config file, if any.
    pub fn delete() -> Result<()> {
        let path = config_path()?;

        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete config at {:?}", path))?;
        }

        Ok(())
    }
}
