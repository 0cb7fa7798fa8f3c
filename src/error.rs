//! Error type shared by the generators, the convolver and the renderer.

use thiserror::Error;

/// Errors produced while building or drawing signals
#[derive(Debug, Error)]
pub enum PrfError {
    /// An input was outside the domain the operation accepts
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The plotting backend failed
    #[error("Render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, PrfError>;
