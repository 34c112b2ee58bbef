//! Error types for codec and conversion operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the binary codec.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    /// Binary input was not exactly one preset long.
    #[error("invalid preset size: {actual}, expected {expected}")]
    SizeMismatch {
        /// Required length in bytes.
        expected: usize,
        /// Length of the rejected input.
        actual: usize,
    },

    /// The preset failed validation before encoding.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A piecewise parameter could not be packed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while applying a `key=value` edit to a preset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The key names no preset field.
    #[error("unknown preset key: {0}")]
    UnknownKey(String),

    /// The value could not be parsed for the key's field type.
    #[error("invalid value for {key}: '{value}' ({expected})")]
    InvalidValue {
        /// Key being edited.
        key: String,
        /// The rejected value.
        value: String,
        /// What the key accepts.
        expected: &'static str,
    },
}

/// Errors that can occur while converting preset files.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source/destination extension pair has no conversion.
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion {
        /// Source extension (with leading dot, or empty).
        from: String,
        /// Destination extension (with leading dot, or empty).
        to: String,
    },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Binary decode or encode failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Failed to parse or render YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Failed to parse or render JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ConvertError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported conversion error from two extensions.
    pub fn unsupported(from: impl Into<String>, to: impl Into<String>) -> Self {
        ConvertError::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }
}
