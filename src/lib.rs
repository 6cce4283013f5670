/// This crate is a pairwise lexical similarity engine for plain-text documents.
///
/// Each document is reduced to a normalized frequency profile of its most
/// common words (stop-words removed, case folded, punctuation stripped),
/// every pair of documents is scored by the sparse dot product of their
/// profiles over shared vocabulary, and the top-K most similar pairs are
/// reported.
pub mod analyzer;
pub mod error;

/// Term Frequency structure
/// Counts normalized word occurrences within one document, plus the
/// document's total word count.
///
/// The tokenizer lives here as well: words are split on whitespace, stripped
/// to ASCII alphanumerics, uppercased, and filtered against a stop-word set.
/// Stop-words count toward the total word count but never enter the
/// frequency map, so derived weights are fractions of the true document
/// length.
pub use analyzer::term::TermFrequency;

/// Profile of one document
/// The top-N terms of a document, each weighted by relative frequency
/// (count / total word count). Immutable once derived; at most
/// `top_term_count` entries, every weight in (0, 1].
///
/// `Profile::dot` is the pairwise similarity primitive: a sparse dot product
/// over the vocabulary shared by two profiles.
pub use analyzer::profile::Profile;

/// Pipeline configuration
/// The fixed parameters of a run: profile size (N, default 100), number of
/// reported pairs (K, default 10), and the stop-word set (default
/// {A, AND, AN, OF, IN, THE}). Passed explicitly into the pipeline instead
/// of living as hidden globals, so tests can vary it.
pub use analyzer::profile::ProfileConfig;

/// Corpus of profiled documents
/// An ordered collection of documents, each with its derived profile.
/// Order is positional identity: the similarity matrix and result pairs
/// refer to documents by their position here.
///
/// `Corpus::from_paths` reads and profiles files in parallel; a document
/// that cannot be read is skipped and reported per-document, never aborting
/// the run.
pub use analyzer::corpus::{Corpus, DocumentProfile};

/// Similarity matrix
/// The symmetric table of pairwise scores. Each unordered pair is scored
/// exactly once and mirrored, so symmetry is exact by construction; the
/// diagonal is never computed.
pub use analyzer::matrix::SimilarityMatrix;

/// Result pair
/// Two document positions (a < b) and their similarity score.
/// `SimilarityMatrix::top_pairs` returns these sorted by score descending
/// with a deterministic ascending-(a, b) tie-break.
pub use analyzer::rank::SimilarPair;

/// Crate error type
/// Per-document failures carry the path of the document they belong to.
pub use error::Error;
