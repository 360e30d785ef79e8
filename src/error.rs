//! Error types shared across the crate.
//!
//! Only the repository and configuration layers can fail. Search, sort and
//! pagination operate on data that is already in memory and never return errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while listing products from the remote endpoint.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The request could not be sent or the connection dropped.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Endpoint that was requested.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint answered with a non-success status.
    #[error("{url} returned HTTP status {status}")]
    Status {
        /// Endpoint that was requested.
        url: String,
        /// Status code of the response.
        status: reqwest::StatusCode,
    },
    /// The body was not a JSON array of products.
    #[error("could not decode product list from {url}: {source}")]
    Decode {
        /// Endpoint that was requested.
        url: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Failure while loading [`Settings`](crate::config::Settings).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read config file {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`Settings`](crate::config::Settings).
    #[error("could not parse config file {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// An environment override could not be parsed.
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },
    /// The default page size is not one of the selectable choices.
    #[error("page size {size} is not one of the allowed choices {choices:?}")]
    InvalidPageSize {
        /// Requested page size.
        size: usize,
        /// Allowed choices.
        choices: Vec<usize>,
    },
}
