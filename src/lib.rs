/// This crate is a text similarity checker for plagiarism screening.
/// It compares an original document with a candidate document by the cosine
/// similarity of their term-frequency vectors.
pub mod vectorizer;
pub mod tokenizer;
pub mod document;
pub mod config;
pub mod error;

/// Similarity Engine
/// The top-level struct of this crate.
/// It tokenizes two documents, builds term-frequency vectors over their shared
/// vocabulary and returns the cosine similarity of the two vectors.
///
/// `SimilarityEngine<S>` has one generic parameter:
/// - `S`: Segmenter used for tokenization (default `JiebaSegmenter`)
///
/// Edge cases:
/// - two documents without tokens are identical (`1.0`)
/// - a document without tokens against a non-empty one scores `0.0`
///
/// The engine holds no mutable state and can be shared across threads.
/// `similarity_batch` compares one original against many candidates in parallel.
pub use vectorizer::{SimilarityEngine, SimilarityReport};

/// Token Frequency structure
/// Counts the occurrences of each token of one document in a single pass.
/// Tokens keep their first-seen order.
pub use vectorizer::token::TokenFrequency;

/// Vocabulary
/// The ordered union of the terms of two documents.
/// Both term-frequency vectors of one comparison are projected through the same
/// vocabulary, so index `i` refers to the same term in both.
pub use vectorizer::vocabulary::Vocabulary;

/// Vector comparison
/// Dot product, L2 norm and cosine similarity for count (`u32`) and `f64` vectors.
pub use vectorizer::compare::{Compare, DefaultCompare};

/// Segmenter trait and implementations
/// - `JiebaSegmenter`: dictionary/statistical Chinese word segmentation (jieba-rs)
/// - `WhitespaceSegmenter`: whitespace splitting for whitespace-delimited scripts
///
/// `tokenize` applies a segmenter and drops whitespace-only fragments.
pub use tokenizer::{tokenize, CutMode, JiebaSegmenter, Segmenter, WhitespaceSegmenter};

/// Document I/O
/// Reading documents and writing the score formatted to two decimal places.
pub use document::{format_score, read_document, write_score};

/// Runtime configuration read from `PAPER_CHECKER_*` environment variables.
pub use config::{CheckerConfig, SegmenterKind};

/// Error type for I/O and configuration failures.
/// The similarity computation itself never fails.
pub use error::{CheckError, Result};

/// Cosine similarity of two texts with the default jieba engine.
///
/// ```
/// let score = paper_checker::similarity("今天天气很好", "今天天气很好");
/// assert!((score - 1.0).abs() < 1e-9);
/// ```
pub fn similarity(original: &str, candidate: &str) -> f64 {
    SimilarityEngine::new().similarity(original, candidate)
}
