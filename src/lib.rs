//! # passages
//!
//! Token-budgeted sentence chunking for retrieval-augmented generation
//! (RAG) pipelines.
//!
//! ## The Problem
//!
//! Embedding models have token windows. Documents don't fit. You need to
//! split them into pieces ("passages") small enough to embed and retrieve,
//! but large enough to preserve meaning.
//!
//! Splitting every N characters is easy and wrong:
//!
//! - A sentence split mid-clause embeds as garbage
//! - Character budgets don't line up with token budgets — the model
//!   truncates what the splitter thought fit
//! - Hard boundaries drop the context a retrieved passage needs to be
//!   understood
//!
//! This crate splits on sentence boundaries, packs sentences greedily
//! against a real token budget, and carries a token-bounded tail of each
//! passage into the next one so consecutive passages share context.
//!
//! ## How Chunking Works
//!
//! ```text
//! Budget: 100 tokens, Overlap: 50 tokens
//!
//! Document ──► sentences ──► greedy accumulation ──► passages
//!
//! [S1:40] [S2:35] [S3:30] [S4:45] [S5:25]
//!
//! Passage 0: S1 S2        (75 tokens; S3 would make 105)
//! Passage 1: S2 S3        (S2 fit the 50-token allowance, carried over)
//! Passage 2: S3 S4 S5     (exactly 100 tokens)
//! ```
//!
//! Three behaviors worth knowing up front:
//!
//! - **Small documents are never split.** Input within the budget comes
//!   back as exactly one passage, segmentation not even attempted.
//! - **Oversized sentences are legal.** A single sentence larger than the
//!   whole budget becomes its own over-budget passage — sentences are
//!   never cut in half.
//! - **Overlap is whole sentences only.** The seed carried between
//!   passages is the largest run of tail sentences whose tokens fit the
//!   allowance, possibly empty.
//!
//! ## Injected Capabilities
//!
//! Tokenization and segmentation are traits, not baked-in libraries:
//!
//! | Capability | Contract | Default |
//! |------------|----------|---------|
//! | [`TokenCounter`] | deterministic `text -> token count` | — |
//! | [`SentenceSegmenter`] | ordered, trimmed, non-empty sentences | [`UnicodeSegmenter`] (UAX #29) |
//!
//! Match the counter to the embedding model downstream: a
//! [`WhitespaceCounter`] for tests and rough budgeting, `HfTokenCounter`
//! (`hf` feature) for HuggingFace models, `TiktokenCounter` (`tiktoken`
//! feature) for OpenAI models.
//!
//! ## Quick Start
//!
//! ```rust
//! use passages::{ChunkConfig, Chunker, SentenceChunker, WhitespaceCounter};
//!
//! let config = ChunkConfig::new(8, 3).unwrap();
//! let chunker = SentenceChunker::new(config, WhitespaceCounter);
//!
//! let text = "One two three. Four five six. Seven eight nine.";
//! let passages = chunker.chunk(text, None).unwrap();
//!
//! assert_eq!(passages.len(), 2);
//! assert_eq!(passages[0].index, 0);
//! assert_eq!(passages[0].total, 2);
//! // The overlap allowance carried "Four five six." into the second passage.
//! assert!(passages[1].text.starts_with("Four five six."));
//! ```
//!
//! ## Carrying Metadata
//!
//! ```rust
//! use passages::{ChunkConfig, Chunker, Metadata, SentenceChunker, WhitespaceCounter};
//!
//! let mut metadata = Metadata::new();
//! metadata.insert("title".into(), "On Duty".into());
//!
//! let chunker = SentenceChunker::new(ChunkConfig::default(), WhitespaceCounter);
//! let passages = chunker.chunk("A short document.", Some(metadata)).unwrap();
//!
//! assert_eq!(passages[0].metadata["title"], "On Duty");
//! ```
//!
//! ## Concurrency
//!
//! A chunking run is pure and strictly sequential — the accumulator state
//! is order-dependent. Parallelize across documents, not within one:
//! chunkers and both capabilities are `Send + Sync`, so sharing one
//! chunker across document-level workers is safe.

mod chunker;
mod config;
mod error;
mod passage;
mod segment;
mod token;

pub use chunker::SentenceChunker;
pub use config::ChunkConfig;
pub use error::{Error, Result};
pub use passage::{Metadata, Passage};
pub use segment::{SentenceSegmenter, UnicodeSegmenter};
pub use token::{TokenCounter, WhitespaceCounter};

#[cfg(feature = "hf")]
pub use token::HfTokenCounter;

#[cfg(feature = "tiktoken")]
pub use token::TiktokenCounter;

/// A document chunking strategy.
///
/// Turns a document into an ordered sequence of [`Passage`]s, threading
/// the caller's metadata onto each one. Implementations are `Send + Sync`
/// so a single strategy can serve document-level worker pools.
///
/// ```rust
/// use passages::{ChunkConfig, Chunker, Passage, SentenceChunker, WhitespaceCounter};
///
/// fn index_document(chunker: &dyn Chunker, text: &str) -> passages::Result<Vec<Passage>> {
///     chunker.chunk(text, None)
/// }
///
/// let chunker = SentenceChunker::new(ChunkConfig::new(64, 8).unwrap(), WhitespaceCounter);
/// let passages = index_document(&chunker, "Hello world. This is a test.").unwrap();
/// assert_eq!(passages[0].total, passages.len());
/// ```
pub trait Chunker: Send + Sync {
    /// Split a document into passages.
    ///
    /// Always returns a non-empty sequence for valid configuration:
    /// degenerate input (empty text, nothing segmentable) comes back as a
    /// single passage rather than an error.
    ///
    /// # Errors
    ///
    /// Propagates token counter failures unmodified.
    fn chunk(&self, text: &str, metadata: Option<Metadata>) -> Result<Vec<Passage>>;

    /// Estimate the number of passages for a given text length in bytes.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 500).max(1)
    }
}
