//! Token-budgeted sentence chunking with overlap.
//!
//! ## The Algorithm
//!
//! Split on sentence boundaries, then accumulate sentences greedily until
//! the token budget would overflow:
//!
//! ```text
//! Budget: 100 tokens, Overlap: 20 tokens
//!
//! Sentences:  [S1:40] [S2:35] [S3:30] [S4:45] ...
//!
//! Pending: S1 (40) → S1 S2 (75) → S3 would make 105, overflow!
//!
//! Passage 0:  S1 S2          (75 tokens)
//! Seed:       S2             (35 > 20? then empty; else carried forward)
//! Pending:    [seed] S3 ...
//! ```
//!
//! Two rules keep the loop total:
//!
//! - **Oversized sentence**: a single sentence larger than the whole budget
//!   cannot be merged with anything and cannot be split (we only cut on
//!   sentence boundaries). It becomes its own over-budget passage.
//! - **Overflow**: when the next sentence would blow the budget, the
//!   pending sentences are sealed into a passage and the accumulator
//!   restarts from the overlap seed.
//!
//! ## The Overlap Seed
//!
//! The seed is built by walking the sealed passage's sentences backward,
//! collecting whole sentences while their cumulative tokens stay within
//! the overlap allowance. Sentences are never split to hit the allowance
//! exactly, and the seed only ever comes from the immediately preceding
//! passage. An allowance of zero (or a tail sentence already larger than
//! the allowance) means the next passage starts fresh.
//!
//! ## Short-Circuits
//!
//! Documents that fit the budget whole are returned as a single passage
//! without paying for segmentation. So is any input the segmenter cannot
//! find sentences in — degenerate input is the caller's data, not an
//! error.

use tracing::{debug, trace};

use crate::{
    ChunkConfig, Chunker, Metadata, Passage, Result, SentenceSegmenter, TokenCounter,
    UnicodeSegmenter,
};

/// A segmented sentence and its token count.
///
/// Counted once when first seen; the count is reused for budget checks and
/// seed construction since the counter is deterministic.
#[derive(Debug, Clone)]
struct Sentence {
    text: String,
    tokens: usize,
}

/// A sealed sentence run, not yet formatted into a [`Passage`].
#[derive(Debug)]
struct Sealed {
    sentences: Vec<Sentence>,
    tokens: usize,
}

impl Sealed {
    /// Join the sentences with single spaces.
    fn join(&self) -> String {
        let parts: Vec<&str> = self.sentences.iter().map(|s| s.text.as_str()).collect();
        parts.join(" ")
    }
}

/// The accumulator: the one passage currently being assembled.
#[derive(Debug, Default)]
struct PendingPassage {
    sentences: Vec<Sentence>,
    tokens: usize,
}

impl PendingPassage {
    fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Would appending `additional` tokens exceed `budget`?
    fn would_overflow(&self, additional: usize, budget: usize) -> bool {
        self.tokens.saturating_add(additional) > budget
    }

    fn push(&mut self, sentence: Sentence) {
        self.tokens += sentence.tokens;
        self.sentences.push(sentence);
    }

    /// Seal the accumulated sentences and reset to empty.
    fn seal(&mut self) -> Sealed {
        Sealed {
            sentences: std::mem::take(&mut self.sentences),
            tokens: std::mem::take(&mut self.tokens),
        }
    }

    /// Restart from the overlap seed of a just-sealed passage.
    ///
    /// Walks the sealed sentences tail-first, taking whole sentences while
    /// their cumulative tokens stay within `overlap`, and keeps them in
    /// original order. Must only be called on an empty accumulator.
    fn reseed(&mut self, previous: &Sealed, overlap: usize) {
        debug_assert!(self.is_empty());

        let mut seed_tokens = 0;
        let mut seed_len = 0;
        for sentence in previous.sentences.iter().rev() {
            if seed_tokens + sentence.tokens > overlap {
                break;
            }
            seed_tokens += sentence.tokens;
            seed_len += 1;
        }

        let tail_start = previous.sentences.len() - seed_len;
        self.sentences
            .extend(previous.sentences[tail_start..].iter().cloned());
        self.tokens = seed_tokens;
    }
}

/// Sentence-boundary chunker with a token budget and token-bounded overlap.
///
/// Both capabilities are injected: a [`TokenCounter`] matching the
/// downstream embedding model, and a [`SentenceSegmenter`] (UAX #29 by
/// default). Any conforming implementation is substitutable, which is also
/// what makes the chunker unit-testable with stub counts.
///
/// ## Example
///
/// ```rust
/// use passages::{ChunkConfig, Chunker, SentenceChunker, WhitespaceCounter};
///
/// let config = ChunkConfig::new(8, 3).unwrap();
/// let chunker = SentenceChunker::new(config, WhitespaceCounter);
///
/// let text = "One two three. Four five six. Seven eight nine.";
/// let passages = chunker.chunk(text, None).unwrap();
///
/// assert_eq!(passages.len(), 2);
/// assert_eq!(passages[0].text, "One two three. Four five six.");
/// // "Four five six." fits the 3-token overlap allowance, so it is
/// // carried into the next passage.
/// assert_eq!(passages[1].text, "Four five six. Seven eight nine.");
/// ```
#[derive(Debug, Clone)]
pub struct SentenceChunker<C, S = UnicodeSegmenter> {
    config: ChunkConfig,
    counter: C,
    segmenter: S,
}

impl<C: TokenCounter> SentenceChunker<C> {
    /// Create a chunker with the default UAX #29 segmenter.
    pub fn new(config: ChunkConfig, counter: C) -> Self {
        Self::with_segmenter(config, counter, UnicodeSegmenter)
    }
}

impl<C: TokenCounter, S: SentenceSegmenter> SentenceChunker<C, S> {
    /// Create a chunker with a custom sentence segmenter.
    pub fn with_segmenter(config: ChunkConfig, counter: C, segmenter: S) -> Self {
        Self {
            config,
            counter,
            segmenter,
        }
    }

    /// The validated configuration this chunker runs with.
    #[must_use]
    pub fn config(&self) -> ChunkConfig {
        self.config
    }

    /// The whole input as one passage. Used for documents within budget
    /// and for input the segmenter finds no sentences in.
    fn single_passage(text: &str, metadata: Option<Metadata>, tokens: usize) -> Vec<Passage> {
        vec![Passage::new(
            text,
            metadata.unwrap_or_default(),
            0,
            1,
            tokens,
        )]
    }

    /// Run the greedy accumulation loop over segmented sentences.
    fn accumulate(&self, sentences: Vec<String>) -> Result<Vec<Sealed>> {
        let budget = self.config.chunk_size();
        let overlap = self.config.overlap();

        let mut sealed = Vec::new();
        let mut pending = PendingPassage::default();

        for text in sentences {
            let tokens = self.counter.count_tokens(&text)?;
            let sentence = Sentence { text, tokens };

            // A sentence larger than the whole budget cannot be merged
            // with anything: flush whatever is pending, then emit it alone.
            // No seed is carried out of either passage.
            if sentence.tokens > budget {
                if !pending.is_empty() {
                    sealed.push(pending.seal());
                }
                sealed.push(Sealed {
                    sentences: vec![sentence],
                    tokens,
                });
                continue;
            }

            if pending.would_overflow(sentence.tokens, budget) && !pending.is_empty() {
                let done = pending.seal();
                pending.reseed(&done, overlap);
                sealed.push(done);
            }

            pending.push(sentence);
        }

        if !pending.is_empty() {
            sealed.push(pending.seal());
        }

        Ok(sealed)
    }
}

impl<C: TokenCounter, S: SentenceSegmenter> Chunker for SentenceChunker<C, S> {
    fn chunk(&self, text: &str, metadata: Option<Metadata>) -> Result<Vec<Passage>> {
        let total_tokens = self.counter.count_tokens(text)?;

        if total_tokens <= self.config.chunk_size() {
            debug!(total_tokens, "document fits in a single passage");
            return Ok(Self::single_passage(text, metadata, total_tokens));
        }

        let sentences = self.segmenter.split_sentences(text);
        if sentences.is_empty() {
            debug!(total_tokens, "no sentences found, emitting a single passage");
            return Ok(Self::single_passage(text, metadata, total_tokens));
        }

        let sealed = self.accumulate(sentences)?;

        let metadata = metadata.unwrap_or_default();
        let total = sealed.len();
        let mut passages = Vec::with_capacity(total);
        for (index, run) in sealed.into_iter().enumerate() {
            trace!(
                index,
                tokens = run.tokens,
                sentences = run.sentences.len(),
                "sealed passage"
            );
            passages.push(Passage::new(
                run.join(),
                metadata.clone(),
                index,
                total,
                run.tokens,
            ));
        }

        debug!(total_tokens, passages = total, "chunked document");
        Ok(passages)
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        // ~4 bytes per token for English prose; each passage advances by
        // (chunk_size - overlap) net tokens, which the config keeps > 0.
        let estimated_tokens = text_len / 4;
        let step = self.config.chunk_size() - self.config.overlap();
        (estimated_tokens / step).max(1)
    }
}
