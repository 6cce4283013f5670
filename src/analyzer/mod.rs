//! The analysis pipeline: tokenize and count, profile, score, rank.
//!
//! The stages compose linearly per run: [`term::TermFrequency`] counts a
//! document's words, [`profile::Profile`] keeps the top terms normalized by
//! the document length, [`corpus::Corpus`] holds one profile per document,
//! [`matrix::SimilarityMatrix`] scores every unordered pair, and
//! [`rank`] extracts the highest-scoring pairs.

pub mod corpus;
pub mod matrix;
pub mod profile;
pub mod rank;
pub mod term;
