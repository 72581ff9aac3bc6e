//! Animation error types

use thiserror::Error;

/// Errors raised when an animation is configured or driven incorrectly
#[derive(Error, Debug)]
pub enum AnimationError {
    /// Durations must be strictly positive
    #[error("Invalid duration: animations need a duration greater than zero")]
    InvalidDuration,

    /// The animator kind does not support this operation
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// The tick thread could not be spawned
    #[error("Failed to start animation timer: {0}")]
    Timer(#[from] std::io::Error),

    /// Configuration could not be read or parsed
    #[error("Invalid animation config: {0}")]
    Config(String),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
