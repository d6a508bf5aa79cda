//! Token counting.
//!
//! ## Why Count Tokens, Not Bytes?
//!
//! Embedding models budget in tokens. A 512-token model doesn't care that
//! your passage is 1,800 bytes; it cares that the tokenizer produces 530
//! tokens and silently truncates the last 18. Chunking against the same
//! counting scheme the embedder uses is the only way to make the budget
//! mean anything.
//!
//! ## The Capability Seam
//!
//! Counting is injected into the chunker as a trait. The contract:
//!
//! - Deterministic: identical input, identical count
//! - Non-negative, including any fixed per-call overhead the scheme adds
//!   (BOS/EOS and other special tokens)
//! - Cheap enough to call once per sentence
//!
//! The chunker treats the count as opaque. Any scheme works — a whitespace
//! heuristic, a BPE, a full model tokenizer — as long as it is stable for
//! the duration of a chunking run.
//!
//! ## Choosing an Implementation
//!
//! | Counter | Accuracy | Speed | Needs |
//! |---------|----------|-------|-------|
//! | [`WhitespaceCounter`] | Rough | Fastest | nothing |
//! | `HfTokenCounter` | Exact for HF models | Fast | `hf` feature + tokenizer file |
//! | `TiktokenCounter` | Exact for OpenAI models | Fast | `tiktoken` feature |
//!
//! Match the counter to the embedding model downstream. The whitespace
//! counter is for tests, benches, and rough offline budgeting.

use crate::Result;

#[cfg(any(feature = "hf", feature = "tiktoken"))]
use crate::Error;

/// A token counting capability.
///
/// Implementations must be deterministic and stable across calls within a
/// single chunking run. Failures from model-backed tokenizers propagate to
/// the caller unmodified; the chunker never retries.
pub trait TokenCounter: Send + Sync {
    /// Count the tokens `text` occupies under this scheme.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying tokenizer fails to encode.
    fn count_tokens(&self, text: &str) -> Result<usize>;
}

/// Whitespace-delimited word counting.
///
/// Crude but deterministic, infallible, and perfectly additive across
/// space-joined text, which makes it the reference counter for tests and
/// benches. Real pipelines should prefer a counter matching their
/// embedding model's tokenizer.
///
/// ## Example
///
/// ```rust
/// use passages::{TokenCounter, WhitespaceCounter};
///
/// assert_eq!(WhitespaceCounter.count_tokens("one two  three").unwrap(), 3);
/// assert_eq!(WhitespaceCounter.count_tokens("").unwrap(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceCounter;

impl TokenCounter for WhitespaceCounter {
    fn count_tokens(&self, text: &str) -> Result<usize> {
        Ok(text.split_whitespace().count())
    }
}

/// HuggingFace tokenizer-backed counting.
///
/// Counts with special tokens included, so the per-call overhead the model
/// adds (BOS/EOS, padding markers) is charged against the budget the same
/// way the embedder will charge it.
///
/// Requires the `hf` feature.
///
/// ## Example
///
/// ```rust,ignore
/// use passages::{HfTokenCounter, TokenCounter};
///
/// let counter = HfTokenCounter::from_file("tokenizer.json")?;
/// let tokens = counter.count_tokens("What is the categorical imperative?")?;
/// ```
#[cfg(feature = "hf")]
pub struct HfTokenCounter {
    tokenizer: tokenizers::Tokenizer,
}

#[cfg(feature = "hf")]
impl HfTokenCounter {
    /// Wrap an already-loaded tokenizer.
    #[must_use]
    pub fn new(tokenizer: tokenizers::Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Load a tokenizer from a `tokenizer.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Tokenizer`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        tokenizers::Tokenizer::from_file(path)
            .map(Self::new)
            .map_err(|e| Error::Tokenizer(e.to_string()))
    }
}

#[cfg(feature = "hf")]
impl TokenCounter for HfTokenCounter {
    fn count_tokens(&self, text: &str) -> Result<usize> {
        self.tokenizer
            .encode(text, true)
            .map(|encoding| encoding.len())
            .map_err(|e| Error::Tokenizer(e.to_string()))
    }
}

#[cfg(feature = "hf")]
impl std::fmt::Debug for HfTokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfTokenCounter").finish_non_exhaustive()
    }
}

/// OpenAI BPE counting via `tiktoken-rs`.
///
/// Counts with special tokens included. Requires the `tiktoken` feature.
///
/// ## Example
///
/// ```rust,ignore
/// use passages::{TiktokenCounter, TokenCounter};
///
/// let counter = TiktokenCounter::cl100k()?;
/// let tokens = counter.count_tokens("Pack my box with five dozen liquor jugs.")?;
/// ```
#[cfg(feature = "tiktoken")]
pub struct TiktokenCounter {
    bpe: tiktoken_rs::CoreBPE,
}

#[cfg(feature = "tiktoken")]
impl TiktokenCounter {
    /// Wrap an already-constructed BPE.
    #[must_use]
    pub fn new(bpe: tiktoken_rs::CoreBPE) -> Self {
        Self { bpe }
    }

    /// The `cl100k_base` encoding (GPT-3.5/4, text-embedding-ada-002).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Tokenizer`] if the bundled encoding fails to load.
    pub fn cl100k() -> Result<Self> {
        tiktoken_rs::cl100k_base()
            .map(Self::new)
            .map_err(|e| Error::Tokenizer(e.to_string()))
    }
}

#[cfg(feature = "tiktoken")]
impl TokenCounter for TiktokenCounter {
    fn count_tokens(&self, text: &str) -> Result<usize> {
        Ok(self.bpe.encode_with_special_tokens(text).len())
    }
}

#[cfg(feature = "tiktoken")]
impl std::fmt::Debug for TiktokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TiktokenCounter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_counter() {
        assert_eq!(WhitespaceCounter.count_tokens("a b c").unwrap(), 3);
        assert_eq!(WhitespaceCounter.count_tokens("  spaced   out  ").unwrap(), 2);
        assert_eq!(WhitespaceCounter.count_tokens("").unwrap(), 0);
        assert_eq!(WhitespaceCounter.count_tokens("\n\t ").unwrap(), 0);
    }

    #[test]
    fn test_whitespace_counter_additive_over_space_join() {
        let a = "The quick brown fox.";
        let b = "Pack my box.";
        let joined = format!("{a} {b}");

        let sum = WhitespaceCounter.count_tokens(a).unwrap()
            + WhitespaceCounter.count_tokens(b).unwrap();
        assert_eq!(WhitespaceCounter.count_tokens(&joined).unwrap(), sum);
    }
}
