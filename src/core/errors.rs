use std::path::PathBuf;

use crate::core::models::value::ValueKind;

/// All domain errors for railsyaml.
///
/// Lookup errors (`KeyNotFound`, `TypeMismatch`) are recoverable and
/// returned to the caller untouched. The remaining variants surface
/// while loading a document or the tool configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "Invalid YAML document: {detail}\n\n  \
         Expected a top-level mapping of blocks, each block a mapping of keys:\n    \
         defaults:\n      adapter: postgresql\n    \
         development:\n      database: development"
    )]
    Deserialization { detail: String },

    #[error(
        "Key '{key}' not defined for environment '{environment}'\n\n  \
         The key is missing from both the '{environment}' block and the defaults block."
    )]
    KeyNotFound { key: String, environment: String },

    #[error("Key '{key}' has type {actual}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists.\n  \
         Use --file or set `file` in .railsyaml.toml to point at another document."
    )]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Stable short label for the error kind, used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Deserialization { .. } => "deserialization",
            Self::KeyNotFound { .. } => "key_not_found",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::FileNotFound { .. } => "file_not_found",
            Self::InvalidConfig { .. } => "invalid_config",
            Self::Json(_) => "json",
            Self::Io(_) => "io",
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
