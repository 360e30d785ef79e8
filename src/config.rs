//! Runtime settings.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `CATALOG_*` environment variables, then command-line flags. The result is
//! validated once before use.

use crate::error::ConfigError;
use crate::handlers::DEFAULT_PAGE_SIZE_CHOICES;
use crate::repository::DEFAULT_API_URL;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

pub const ENV_API_URL: &str = "CATALOG_API_URL";
pub const ENV_PAGE_SIZE: &str = "CATALOG_PAGE_SIZE";
pub const ENV_TIMEOUT_SECS: &str = "CATALOG_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "CATALOG_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Endpoint returning the product list.
    pub api_url: String,
    /// Initial page size.
    pub page_size: usize,
    /// Page sizes the selector offers.
    pub page_size_choices: Vec<usize>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Log file used while the terminal UI owns the screen.
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            page_size: crate::catalog::DEFAULT_PAGE_SIZE,
            page_size_choices: DEFAULT_PAGE_SIZE_CHOICES.to_vec(),
            timeout_secs: 10,
            log_file: PathBuf::from("catalog.log"),
        }
    }
}

/// Command-line overrides, applied last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub page_size: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Parses settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults overlaid with a config file.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read when present and silently skipped otherwise.
    pub fn from_file(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        match fs::read_to_string(&path) {
            Ok(raw) => Self::from_toml_str(&raw, &path),
            Err(err) if err.kind() == ErrorKind::NotFound && !required => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Applies `CATALOG_*` variables from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Applies `CATALOG_*` variables read through `lookup`.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_API_URL) {
            self.api_url = v;
        }
        if let Some(v) = lookup(ENV_PAGE_SIZE) {
            self.page_size = parse_env(ENV_PAGE_SIZE, v)?;
        }
        if let Some(v) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_env(ENV_TIMEOUT_SECS, v)?;
        }
        if let Some(v) = lookup(ENV_LOG_FILE) {
            self.log_file = PathBuf::from(v);
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(v) = overrides.api_url {
            self.api_url = v;
        }
        if let Some(v) = overrides.page_size {
            self.page_size = v;
        }
        if let Some(v) = overrides.timeout_secs {
            self.timeout_secs = v;
        }
        if let Some(v) = overrides.log_file {
            self.log_file = v;
        }
    }

    /// The page size must be one of the choices.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 || !self.page_size_choices.contains(&self.page_size) {
            return Err(ConfigError::InvalidPageSize {
                size: self.page_size,
                choices: self.page_size_choices.clone(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full layering: file, environment, overrides, then validation.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let mut settings = Self::from_file(path)?;
        settings.apply_env()?;
        settings.apply_overrides(overrides);
        settings.validate()?;
        Ok(settings)
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { name, value })
}
