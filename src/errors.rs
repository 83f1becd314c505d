//! Error Types
//!
//! The interaction core recovers from almost everything locally: a missing
//! clip, a degenerate bounding volume, or an operation issued before an
//! asset exists are reported as `log` warnings and leave state unchanged.
//! [`ViewerError`] covers the genuinely fallible edges that hosts may want
//! to match on.

use thiserror::Error;

/// The main error type for the viewer core.
#[derive(Error, Debug)]
pub enum ViewerError {
    // ========================================================================
    // Playback Errors
    // ========================================================================
    /// The requested animation clip is not in the loaded clip table.
    #[error("Animation clip not found: {0}")]
    ClipNotFound(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration text could not be parsed.
    #[error("Config parse error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

/// Alias for `Result<T, ViewerError>`.
pub type Result<T> = std::result::Result<T, ViewerError>;
