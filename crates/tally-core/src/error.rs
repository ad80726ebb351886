//! Error types for tally-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during frequency analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The corpus has no tokens to rank.
    #[error("no tokens in input")]
    EmptyInput,

    /// No stopword set exists for the requested language.
    #[error("no stopword list for language: {language}. Use: {available}")]
    UnsupportedLanguage {
        /// The language name that was requested.
        language: String,
        /// Comma-separated list of supported language names.
        available: String,
    },

    /// The configured name list file could not be read.
    #[error("failed to read name list {path}: {source}")]
    NameListUnavailable {
        /// Path of the name list file.
        path: camino::Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur reading or writing the contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem read/write failed.
    #[error("failed to access contact store at {path}: {source}")]
    Io {
        /// Path of the store file.
        path: camino::Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The store file is not a JSON array of strings.
    #[error("contact store at {path} is not a JSON array of strings: {source}")]
    Malformed {
        /// Path of the store file.
        path: camino::Utf8PathBuf,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
}

/// Result type alias using [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur generating a password.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Custom-length mode was requested with every character class disabled.
    #[error("no character classes selected")]
    EmptyCharacterSet,
}

/// Result type alias using [`PasswordError`].
pub type PasswordResult<T> = Result<T, PasswordError>;
