use rayon::prelude::*;
use tracing::debug;

use super::corpus::Corpus;

/// SimilarityMatrix struct
/// Symmetric |D|×|D| table of pairwise similarity scores. Each unordered
/// pair is scored exactly once by [`Profile::dot`](super::profile::Profile::dot)
/// and mirrored across the diagonal, so `score(i, j) == score(j, i)` holds
/// exactly. Self-similarity is never computed; the diagonal stays 0.0 and is
/// excluded from ranking.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    /// Row-major n×n scores
    scores: Vec<f64>,
    doc_num: usize,
}

impl SimilarityMatrix {
    /// Score every unordered pair of distinct documents in the corpus.
    ///
    /// Pairs are independent, so the upper triangle is scored in parallel;
    /// each task produces one (i, j, score) cell and the matrix is assembled
    /// from the finished results. The corpus is only read.
    pub fn build(corpus: &Corpus) -> Self {
        let n = corpus.len();
        let docs = corpus.documents();

        let pair_indices: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();
        let scored: Vec<(usize, usize, f64)> = pair_indices
            .into_par_iter()
            .map(|(i, j)| (i, j, docs[i].profile.dot(&docs[j].profile)))
            .collect();

        let mut scores = vec![0.0; n * n];
        for (i, j, score) in scored {
            scores[i * n + j] = score;
            scores[j * n + i] = score;
        }
        debug!(documents = n, "assembled similarity matrix");
        SimilarityMatrix { scores, doc_num: n }
    }

    /// Number of documents the matrix covers
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.doc_num
    }

    /// Score of the pair (i, j)
    ///
    /// # Panics
    /// Panics when an index is out of range.
    #[inline]
    pub fn score(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.doc_num && j < self.doc_num, "document index out of range");
        self.scores[i * self.doc_num + j]
    }
}
