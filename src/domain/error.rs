//! Error types for the kpsearch plugin.
//!
//! This module defines the centralized error type [`KpSearchError`] and a type alias
//! [`Result`] used throughout the plugin. None of these errors ever reach the
//! query source: the results view collapses every failure into its empty layout,
//! so they surface only in traces and worker responses.

use thiserror::Error;

/// The main error type for kpsearch operations.
///
/// # Examples
///
/// ```
/// use kpsearch::domain::KpSearchError;
///
/// fn open_snapshot() -> Result<(), KpSearchError> {
///     Err(KpSearchError::Database("unsupported snapshot version 9".to_string()))
/// }
///
/// assert!(open_snapshot().is_err());
/// ```
#[derive(Debug, Error)]
pub enum KpSearchError {
    /// The unlocked database snapshot could not be read or understood.
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Raised when a worker message cannot be encoded or when the worker
    /// reports a failure back to the plugin.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for kpsearch operations.
pub type Result<T> = std::result::Result<T, KpSearchError>;
