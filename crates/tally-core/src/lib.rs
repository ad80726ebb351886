//! Core library for tally.
//!
//! This crate provides the analysis pipeline and supporting types used by
//! the `tally` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`corpus`] - Token types and the top-N cut
//! - [`tokenize`] - Text and numeric-column tokenizers
//! - [`stopwords`] - Language-keyed stopword sets
//! - [`frequency`] - Occurrence counting and ranking
//! - [`stats`] - Numeric column summaries
//! - [`emails`] - Email address extraction
//! - [`contacts`] - The persistent contact list
//! - [`anonymize`] - Personal name anonymization
//! - [`password`] - Random password generation
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use tally_core::corpus::TopN;
//! use tally_core::{frequency, stopwords, tokenize};
//!
//! let stopset = stopwords::for_language("english").expect("known language");
//! let corpus = tokenize::tokenize_text("the cat sat on the mat", &stopset);
//! let ranking = frequency::rank(&corpus, TopN::All).expect("non-empty corpus");
//!
//! assert_eq!(ranking[0].token, "cat");
//! ```
#![deny(unsafe_code)]

pub mod anonymize;
pub mod config;
pub mod contacts;
pub mod corpus;
pub mod emails;
pub mod error;
pub mod frequency;
pub mod password;
pub mod stats;
pub mod stopwords;
pub mod tokenize;

pub use config::{Config, ConfigLoader, LogLevel};

pub use corpus::{Number, TopN};

pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, PasswordError, PasswordResult,
    StoreError, StoreResult,
};

/// Default maximum input size in bytes (5 MiB).
///
/// Guards file-reading commands against oversized inputs; override or
/// disable via [`Config`].
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
