use serde::Serialize;
use tracing::debug;

use super::matrix::SimilarityMatrix;

/// One reported result pair: two document positions and their similarity
/// score, with `a < b` so no pair is reported twice.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SimilarPair {
    pub a: usize,
    pub b: usize,
    pub score: f64,
}

/// Top-K extraction
impl SimilarityMatrix {
    /// The `k` highest-scoring pairs, descending.
    ///
    /// The ordering is total and deterministic: primary key score descending
    /// (`f64::total_cmp`), ties broken by ascending (a, b). When fewer than
    /// `k` pairs exist, all of them are returned; an empty or single-document
    /// matrix yields an empty result.
    pub fn top_pairs(&self, k: usize) -> Vec<SimilarPair> {
        let n = self.doc_num();
        let mut pairs: Vec<SimilarPair> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .map(|(a, b)| SimilarPair {
                a,
                b,
                score: self.score(a, b),
            })
            .collect();
        pairs.sort_by(|x, y| {
            y.score
                .total_cmp(&x.score)
                .then_with(|| (x.a, x.b).cmp(&(y.a, y.b)))
        });
        pairs.truncate(k);
        debug!(pairs = pairs.len(), "ranked similar pairs");
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::corpus::Corpus;
    use crate::analyzer::profile::ProfileConfig;

    fn matrix_of(texts: &[&str]) -> SimilarityMatrix {
        let config = ProfileConfig::default();
        let mut corpus = Corpus::new();
        for (i, text) in texts.iter().enumerate() {
            corpus.add_document(format!("doc{i}"), text, &config);
        }
        SimilarityMatrix::build(&corpus)
    }

    #[test]
    fn pairs_come_out_descending() {
        let matrix = matrix_of(&[
            "apple banana cherry",
            "apple banana cherry",
            "apple zebra yak",
            "qoph waw resh",
        ]);
        let pairs = matrix.top_pairs(10);
        assert_eq!(pairs.len(), 6);
        for window in pairs.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
        // The identical pair ranks first.
        assert_eq!((pairs[0].a, pairs[0].b), (0, 1));
    }

    #[test]
    fn ties_break_by_ascending_index_pair() {
        // Three identical documents: all three pairs share one score.
        let matrix = matrix_of(&["same text here", "same text here", "same text here"]);
        let pairs = matrix.top_pairs(10);
        let order: Vec<(usize, usize)> = pairs.iter().map(|p| (p.a, p.b)).collect();
        assert_eq!(order, [(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn result_is_truncated_to_k() {
        let matrix = matrix_of(&["a b", "b c", "c d", "d e", "e f"]);
        assert_eq!(matrix.top_pairs(3).len(), 3);
    }

    #[test]
    fn two_documents_yield_one_pair_even_for_large_k() {
        let matrix = matrix_of(&["cat mat", "cat hat"]);
        let pairs = matrix.top_pairs(10);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].a, pairs[0].b), (0, 1));
    }

    #[test]
    fn no_self_pairs_appear() {
        let matrix = matrix_of(&["x y z", "x y z", "x y q"]);
        for pair in matrix.top_pairs(10) {
            assert!(pair.a < pair.b);
        }
    }

    #[test]
    fn empty_and_single_document_matrices_yield_no_pairs() {
        assert!(matrix_of(&[]).top_pairs(10).is_empty());
        assert!(matrix_of(&["lonely document"]).top_pairs(10).is_empty());
    }
}
