// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::session::{API_URL, DEFAULT_AUTHOR, DEFAULT_TIMEOUT};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("br.com.organizze", "Organizze", "organizze"));

pub const ENV_EMAIL: &str = "ORGANIZZE_EMAIL";
pub const ENV_TOKEN: &str = "ORGANIZZE_TOKEN";
pub const ENV_AUTHOR: &str = "ORGANIZZE_AUTHOR";
pub const ENV_BASE_URL: &str = "ORGANIZZE_BASE_URL";
pub const ENV_TIMEOUT: &str = "ORGANIZZE_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub email: String,
    pub token: String,
    pub author: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email: String::new(),
            token: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            base_url: API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        Error::Config("could not determine platform-specific config dir".into())
    })?;
    Ok(proj.config_dir().join("config.json"))
}

impl Config {
    /// Defaults, then the config file, then `ORGANIZZE_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with variables read through `lookup`.
    ///
    /// The default file may be absent; an explicit `path` must exist.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match path {
            Some(p) if !p.exists() => {
                return Err(Error::Config(format!(
                    "config file {} does not exist",
                    p.display()
                )));
            }
            Some(p) => Self::from_file(p)?,
            None => {
                let default = config_path()?;
                if default.exists() {
                    Self::from_file(&default)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_env(lookup)?;
        cfg.ensure_credentials()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|err| Error::Config(format!("invalid config {}: {}", path.display(), err)))
    }

    /// Overlays values returned by `lookup` for the `ORGANIZZE_*` keys.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = non_empty(ENV_EMAIL) {
            self.email = v.trim().to_string();
        }
        if let Some(v) = non_empty(ENV_TOKEN) {
            self.token = v.trim().to_string();
        }
        if let Some(v) = non_empty(ENV_AUTHOR) {
            self.author = v.trim().to_string();
        }
        if let Some(v) = non_empty(ENV_BASE_URL) {
            self.base_url = v.trim().to_string();
        }
        if let Some(v) = non_empty(ENV_TIMEOUT) {
            self.timeout_secs = v.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT, v))
            })?;
        }
        Ok(())
    }

    pub fn ensure_credentials(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(Error::Config(format!(
                "missing email: set {} or add \"email\" to the config file",
                ENV_EMAIL
            )));
        }
        if self.token.is_empty() {
            return Err(Error::Config(format!(
                "missing API token: set {} or add \"token\" to the config file",
                ENV_TOKEN
            )));
        }
        Ok(())
    }
}
