//! Unified error type for avaget.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, fetching, or saving an avatar.
#[derive(Debug, Error)]
pub enum AvatarError {
    /// Configuration error (e.g., the external identity generator is missing).
    #[error("Config error: {0}")]
    Config(String),

    /// The requested style is not in the allowed set.
    #[error("Unsupported style '{0}'. Valid: identicon, monsterid, wavatar, retro")]
    InvalidStyle(String),

    /// The size argument is not an integer.
    #[error("Invalid size '{0}': not an integer")]
    SizeNotInteger(String),

    /// The size is outside the allowed pixel range.
    #[error("Invalid size {0}: must be between 1 and 512")]
    SizeOutOfRange(i64),

    /// The avatar service returned a non-success status.
    #[error("Avatar service error (HTTP {status})")]
    Api {
        /// HTTP status code.
        status: u16,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The destination file already exists and overwriting was not requested.
    #[error("Refusing to overwrite existing file: {}", .0.display())]
    DestinationExists(PathBuf),
}
