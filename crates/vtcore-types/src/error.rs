use thiserror::Error;

/// Errors the core surfaces across its public boundary.
///
/// Everything else (malformed UTF-8, unknown CSI finals, truncated OSC,
/// oversized parameter lists, writes outside the grid) is absorbed silently;
/// terminal streams in the wild are adversarial and must never crash the
/// caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerminalError {
    #[error("invalid terminal dimensions: {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("{kind} callback failed: {message}")]
    CallbackFailure { kind: &'static str, message: String },

    #[error("{name} callback is required but was not provided")]
    MissingRequiredCallback { name: &'static str },
}

pub type Result<T> = std::result::Result<T, TerminalError>;
