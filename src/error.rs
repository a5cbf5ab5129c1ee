//! Configuration errors.
//!
//! Deck problems are never errors in this sense: they are collected into a
//! [`ValidationResult`](crate::deck::ValidationResult). Card data failures
//! live in [`ScryfallError`](crate::scryfall::ScryfallError).

use std::path::PathBuf;

use thiserror::Error;

/// Why a configuration file could not be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly named file does not exist.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path that was given.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for [`Config`](crate::config::Config).
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A setting parsed but is out of range.
    #[error("invalid {field}: {message}")]
    InvalidValue {
        /// Dotted path of the setting, e.g. `scryfall.batch_size`.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}
