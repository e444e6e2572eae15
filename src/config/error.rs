//! Errors raised while loading `slugpress.toml`.

use std::path::PathBuf;
use thiserror::Error;

/// Why a site configuration could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `slugpress.toml` exists but could not be read.
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// Malformed TOML or an unknown section/field.
    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    /// Missing CMS url/key, a bad date format, or overlapping assets/output dirs.
    #[error("Config validation error: {0}")]
    Validation(String),
}
