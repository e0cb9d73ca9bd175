//! Error types for ORBIT.

use std::io;

/// Errors produced by the ORBIT framework.
///
/// Layout and navigation never fail; these cover the fallible edges
/// (configuration files, scripted input).
#[derive(Debug, thiserror::Error)]
pub enum OrbitError {
    #[error("config error: {0}")]
    Config(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, OrbitError>;
