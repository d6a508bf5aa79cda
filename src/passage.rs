//! The Passage type: a chunk of text ready for embedding.

use serde::{Deserialize, Serialize};

/// Opaque document metadata, carried onto every passage unchanged.
///
/// The chunker never inspects this mapping; it exists so callers can thread
/// source identifiers (title, URL, category, ...) through to whatever
/// stores the embedded passages.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A bounded segment of a document's sentences, ready to embed and index.
///
/// Each passage is self-contained: its text, the document metadata it was
/// cut from, and enough position information (`index` of `total`) to
/// reassemble or cite the source.
///
/// ## Token Accounting
///
/// `tokens` is the sum of the per-sentence counts the chunker measured
/// while assembling the passage, not a re-tokenization of the joined text.
/// Tokenizers with per-call overhead (BOS/EOS and friends) charge that
/// overhead once per sentence, so the sum can differ slightly from a fresh
/// count of `text`. Callers budgeting against the same counter used for
/// chunking get consistent numbers either way.
///
/// ## Overlap
///
/// With a non-zero overlap configured, consecutive passages share whole
/// sentences: the tail of one passage is repeated as the head of the next
/// to preserve context across the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    /// The passage text: sentences joined by single spaces.
    pub text: String,
    /// Caller-supplied document metadata, unchanged.
    pub metadata: Metadata,
    /// Zero-based position of this passage in the sequence.
    pub index: usize,
    /// Total passages produced for the document.
    pub total: usize,
    /// Summed token count of the passage's sentences.
    pub tokens: usize,
}

impl Passage {
    /// Create a new passage.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        metadata: Metadata,
        index: usize,
        total: usize,
        tokens: usize,
    ) -> Self {
        Self {
            text: text.into(),
            metadata,
            index,
            total,
            tokens,
        }
    }

    /// The length of this passage's text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this passage's text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether this is the final passage of its document.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}

impl std::fmt::Display for Passage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Passage {{ index: {}/{}, tokens: {}, len: {} }}",
            self.index,
            self.total,
            self.tokens,
            self.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let p = Passage::new("hello world", Metadata::new(), 0, 2, 2);
        assert_eq!(p.len(), 11);
        assert!(!p.is_empty());
        assert!(!p.is_last());
    }

    #[test]
    fn test_is_last() {
        let p = Passage::new("tail", Metadata::new(), 1, 2, 1);
        assert!(p.is_last());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut metadata = Metadata::new();
        metadata.insert("title".into(), "Kant".into());

        let p = Passage::new("Duty and moral law.", metadata, 0, 1, 4);
        let json = serde_json::to_string(&p).unwrap();
        let back: Passage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.metadata["title"], "Kant");
    }

    #[test]
    fn test_display() {
        let p = Passage::new("abc", Metadata::new(), 2, 5, 1);
        assert_eq!(p.to_string(), "Passage { index: 2/5, tokens: 1, len: 3 }");
    }
}
