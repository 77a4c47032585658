// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration
//!
//! Loaded from `talos.toml`. Every key is optional; a missing file means
//! defaults.

mod notify;

pub use notify::{NotifyConfig, NotifyRule};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "TALOS_CONFIG";

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "talos.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TalosConfig {
    /// Accept unrecognized statuses and render them with nothing current
    pub lenient: bool,
    /// Rules checked before the built-in notification rules
    #[serde(rename = "notify")]
    pub notify_rules: Vec<NotifyRule>,
}

impl TalosConfig {
    /// Parse config from TOML text
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    /// Resolve the config file: explicit path, then `TALOS_CONFIG`, then
    /// `talos.toml` in `dir`. An explicit path must exist.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::discover_with(explicit, from_env.as_deref(), dir)
    }

    /// `discover` with the `TALOS_CONFIG` value passed in
    pub fn discover_with(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        dir: &Path,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.or(from_env) {
            return Self::load(path);
        }
        let local = dir.join(CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }
        tracing::debug!(dir = %dir.display(), "no config file, using defaults");
        Ok(Self::default())
    }

    /// Built-in notification rules with configured rules taking precedence
    pub fn notify_config(&self) -> NotifyConfig {
        let mut config = NotifyConfig::default_config();
        config.prepend(self.notify_rules.clone());
        config
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
