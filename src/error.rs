//! # Error Handling
//!
//! This module defines the centralized error type for the `repoclone`
//! library. It uses `thiserror` to derive a single `Error` enum covering every
//! failure mode of identifier parsing, template compilation, path resolution
//! and the collaborators around them (configuration, language lookup, git).
//!
//! Each variant carries the offending input (raw identifier, template string,
//! language key, URL) so the caller can print an actionable message without
//! extra bookkeeping.
//!
//! Nothing in the library recovers from these errors internally: they are
//! returned to the caller as-is. The binary decides which ones are fatal.

use thiserror::Error;

/// Main error type for repoclone operations
#[derive(Error, Debug)]
pub enum Error {
    /// The identifier did not yield both an owner and a name.
    #[error("Could not parse owner and name from repository identifier: '{input}'")]
    Parse { input: String },

    /// A path template string could not be compiled.
    #[error("Template compile error in '{template}': {message}")]
    TemplateCompile { template: String, message: String },

    /// A compiled template referenced a field the repository does not expose.
    #[error("Template execution error for language '{language}': unknown field '{field}'")]
    TemplateExecution { language: String, field: String },

    /// The current user's home directory was needed but could not be resolved.
    #[error("Home directory error: {message}")]
    HomeDirectory { message: String },

    /// The configuration could not be read or contains invalid values.
    ///
    /// Includes an optional hint about how to fix it.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// `git clone` failed or could not be started.
    ///
    /// `output` is git's combined stdout and stderr, passed through unchanged.
    #[error("Git clone error for {url} into {path}:\n{output}")]
    GitClone {
        url: String,
        path: String,
        output: String,
    },

    /// The main-language lookup failed.
    #[error("Language lookup error: {url} - {message}")]
    Language { url: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
