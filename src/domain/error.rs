//! Error types for the pressdeck core.
//!
//! This module defines the centralized error type [`PressdeckError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for pressdeck operations.
///
/// This enum consolidates all error conditions that can occur while building
/// and driving the portfolio core, from store validation to I/O failures when
/// the preview shim loads article data. Most variants wrap underlying errors
/// from external crates using `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum PressdeckError {
    /// The article store is invalid.
    ///
    /// Occurs when the supplied article collection violates a store invariant,
    /// most notably a duplicated article id. The string describes the
    /// offending record.
    #[error("Store error: {0}")]
    Store(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Article or curation JSON could not be deserialized.
    ///
    /// Wraps `serde_json` errors raised while loading the store document in
    /// the preview shim.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for pressdeck operations.
///
/// This is a type alias for `std::result::Result<T, PressdeckError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, PressdeckError>;
