// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Resume helper configuration.
//!
//! Precedence, lowest first: built-in defaults, the optional TOML file,
//! environment variables, then whatever the caller sets explicitly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

/// Resume device compiled in by `build.rs` from `COH_PM_STD_PARTITION`.
pub const BUILTIN_DEFAULT_DEVICE: &str = env!("COH_PM_STD_PARTITION");

pub const DEFAULT_CONFIG_PATH: &str = "/etc/resume.toml";
pub const DEFAULT_POWER_DIR: &str = "/sys/power";
pub const DEFAULT_CMDLINE_PATH: &str = "/proc/cmdline";
pub const DEFAULT_SYS_ROOT: &str = "/sys";

/// Paths and defaults used by the resume helper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResumeConfig {
    /// Device used when `resume=` is absent. Empty disables resume.
    pub default_device: String,
    /// Directory holding the `resume` and `resume_offset` attributes.
    pub power_dir: PathBuf,
    /// Kernel command line as exposed by procfs.
    pub cmdline_path: PathBuf,
    /// sysfs mount point used to resolve `/dev/<name>` specifiers.
    pub sys_root: PathBuf,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            default_device: BUILTIN_DEFAULT_DEVICE.to_string(),
            power_dir: PathBuf::from(DEFAULT_POWER_DIR),
            cmdline_path: PathBuf::from(DEFAULT_CMDLINE_PATH),
            sys_root: PathBuf::from(DEFAULT_SYS_ROOT),
        }
    }
}

/// Errors produced while reading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ResumeConfig {
    /// Parse a config file. Fields missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `COH_RESUME_DEVICE`, `COH_SYS_POWER`, `COH_PROC_CMDLINE` and
    /// `COH_SYS_ROOT` on top of `self`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dev) = std::env::var("COH_RESUME_DEVICE") {
            self.default_device = dev;
        }
        if let Ok(dir) = std::env::var("COH_SYS_POWER") {
            self.power_dir = PathBuf::from(dir);
        }
        if let Ok(path) = std::env::var("COH_PROC_CMDLINE") {
            self.cmdline_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("COH_SYS_ROOT") {
            self.sys_root = PathBuf::from(path);
        }
        self
    }
}

/// Load the active configuration.
///
/// The file named by `COH_RESUME_CONF` (or [`DEFAULT_CONFIG_PATH`]) is
/// optional. A broken file is logged and ignored so boot can continue.
pub fn load_active() -> ResumeConfig {
    let path: PathBuf = std::env::var("COH_RESUME_CONF")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let base = match ResumeConfig::from_file(&path) {
        Ok(cfg) => cfg,
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            debug!("resume: no config at {}", path.display());
            ResumeConfig::default()
        }
        Err(e) => {
            warn!("resume: {e}; using defaults");
            ResumeConfig::default()
        }
    };
    base.with_env_overrides()
}
