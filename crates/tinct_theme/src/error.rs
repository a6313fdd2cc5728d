//! Theme error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building catalogs or loading configuration.
///
/// Runtime theme operations never return these; they are confined to the
/// points where data enters the engine.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A token key that is not part of the fixed token set
    #[error("unknown color token `{token}` in theme `{theme}`")]
    UnknownToken { theme: String, token: String },

    /// A token from the fixed set has no value
    #[error("theme `{theme}` is missing color token `{token}`")]
    MissingToken { theme: String, token: &'static str },

    /// Two catalog entries share an id
    #[error("duplicate theme id `{0}` in catalog")]
    DuplicateThemeId(String),

    /// A catalog must contain at least one theme
    #[error("theme catalog is empty")]
    EmptyCatalog,

    /// Failed to parse a TOML document
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Failed to read a file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by key/value store backends.
///
/// [`crate::store::ThemeStore`] swallows these, so they only surface to code
/// that talks to a backend directly.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing storage cannot be used (disabled, denied, quota exceeded)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Filesystem failure
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON string map
    #[error("storage file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for catalog and configuration operations
pub type Result<T> = std::result::Result<T, ThemeError>;
