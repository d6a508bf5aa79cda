//! Sentence segmentation.
//!
//! ## The Hard Part: Finding Sentences
//!
//! Sentence detection seems simple until you encounter:
//!
//! ```text
//! "Dr. Smith went to Washington D.C. on Jan. 15th."
//!     ^                          ^       ^
//!     Not a sentence end (abbreviation)
//! ```
//!
//! The default segmenter uses Unicode Standard Annex #29 (UAX #29), which
//! handles most edge cases including:
//!
//! - Abbreviations (Dr., Mr., Inc., etc.)
//! - Decimal numbers (3.14159)
//! - Ellipses (...)
//! - URLs (https://example.com/path)
//!
//! ## The Capability Seam
//!
//! Segmentation is injected into the chunker as a trait, not hard-coded.
//! Any engine that splits text into an ordered list of trimmed, non-empty
//! substrings satisfies the contract — rule-based, statistical, or
//! model-backed. Tests use stub segmenters with known splits; production
//! callers can keep [`UnicodeSegmenter`] or plug in something heavier.
//!
//! No segmenter is guaranteed to be grammatically correct. Zero sentences
//! on degenerate input is not an error: the chunker falls back to a single
//! passage.

use unicode_segmentation::UnicodeSegmentation;

/// A sentence segmentation capability.
///
/// Implementations must be pure: identical input yields identical output,
/// and each returned sentence is trimmed and non-empty.
pub trait SentenceSegmenter: Send + Sync {
    /// Split text into an ordered sequence of trimmed, non-empty sentences.
    fn split_sentences(&self, text: &str) -> Vec<String>;
}

/// UAX #29 sentence segmenter.
///
/// ## Example
///
/// ```rust
/// use passages::{SentenceSegmenter, UnicodeSegmenter};
///
/// let sentences = UnicodeSegmenter.split_sentences("Hello world. How are you?");
/// assert_eq!(sentences, vec!["Hello world.", "How are you?"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl SentenceSegmenter for UnicodeSegmenter {
    fn split_sentences(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
