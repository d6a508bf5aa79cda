//! Error types for passages.

/// Errors that can occur while configuring or running a chunker.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap must stay below the chunk size, otherwise a carried seed
    /// could fill the whole budget and stall forward progress.
    #[error("overlap {overlap} must be < chunk size {size}")]
    OverlapExceedsSize {
        /// The configured chunk size in tokens.
        size: usize,
        /// The overlap that was too large.
        overlap: usize,
    },

    /// A model-backed token counter failed to load or to encode.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),
}

/// Result type for passages operations.
pub type Result<T> = std::result::Result<T, Error>;
