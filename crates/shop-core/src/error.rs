//! Error types for the storefront core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or saving configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Config file could not be read or written.
    #[error("Config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML could not be parsed.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML could not be produced.
    #[error("Could not serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON could not be parsed or produced.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but failed validation.
    #[error("Invalid config: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
