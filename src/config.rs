//! Chunking configuration.
//!
//! ## Picking a Budget
//!
//! The token budget is a trade-off:
//!
//! - Too small: fragments meaning, every passage loses its context
//! - Too large: dilutes semantics, retrieval precision drops
//! - Overlap: context continuity across boundaries, paid for in storage
//!
//! A common starting point for prose is a budget of a few hundred tokens
//! with 10-20% overlap. The defaults here (400/50) follow that heuristic.
//!
//! ## Why Validate at Construction
//!
//! Both parameters are checked once, up front, so a chunker built from a
//! [`ChunkConfig`] can never fail on configuration mid-document. An overlap
//! at least as large as the budget is rejected outright: the seed carried
//! into each new passage could then consume the entire budget, and the
//! accumulator would stop making forward progress.

use crate::{Error, Result};

/// Validated token budget and overlap for a chunker.
///
/// # Examples
///
/// ```rust
/// use passages::ChunkConfig;
///
/// let config = ChunkConfig::new(512, 64).unwrap();
/// assert_eq!(config.chunk_size(), 512);
/// assert_eq!(config.overlap(), 64);
///
/// // Zero budget is rejected
/// assert!(ChunkConfig::new(0, 0).is_err());
///
/// // Overlap must stay below the budget
/// assert!(ChunkConfig::new(100, 100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    chunk_size: usize,
    overlap: usize,
}

impl ChunkConfig {
    /// Create a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` - Maximum tokens per passage
    /// * `overlap` - Token budget for the seed carried between passages
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `chunk_size == 0`, and
    /// [`Error::OverlapExceedsSize`] if `overlap >= chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::InvalidChunkSize(chunk_size));
        }
        if overlap >= chunk_size {
            return Err(Error::OverlapExceedsSize {
                size: chunk_size,
                overlap,
            });
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Create a configuration with no overlap between passages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `chunk_size == 0`.
    pub fn no_overlap(chunk_size: usize) -> Result<Self> {
        Self::new(chunk_size, 0)
    }

    /// The maximum tokens a passage should hold.
    ///
    /// A single sentence larger than this still becomes its own passage;
    /// see [`SentenceChunker`](crate::SentenceChunker) for the exception.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The token budget for the tail sentences carried into the next passage.
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.overlap
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        // 400-token passages with 50 tokens of overlap, a reasonable
        // middle ground for embedding models with ~512-token windows.
        Self {
            chunk_size: 400,
            overlap: 50,
        }
    }
}
