//! Pairwise similarity scores over a corpus.
use crate::signature::Signature;
use crate::similarity::similarity;

use rayon::prelude::*;

/// Similarity scores for all unordered document pairs.
///
/// Only the strict upper triangle is materialized: similarity is symmetric
/// and self-similarity is definitionally 1. Row `i` holds the scores against
/// documents `i + 1 .. n - 1`, so `(i, j)` lives at offset `j - i - 1` within
/// the row. Rows are stored back to back in one flat buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityMatrix {
    num_docs: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Scores every unordered pair of the given signatures.
    pub fn from_signatures(signatures: &[Signature]) -> Self {
        let num_docs = signatures.len();
        let mut scores = Vec::with_capacity(num_docs * num_docs.saturating_sub(1) / 2);
        for (i, a) in signatures.iter().enumerate() {
            for b in &signatures[i + 1..] {
                scores.push(similarity(a, b));
            }
        }
        Self { num_docs, scores }
    }

    /// Scores every unordered pair, spreading rows of the upper triangle
    /// across worker threads. Produces the same matrix as
    /// [`from_signatures`](Self::from_signatures).
    pub fn from_signatures_in_parallel(signatures: &[Signature]) -> Self {
        let num_docs = signatures.len();
        let rows: Vec<Vec<f64>> = (0..num_docs)
            .into_par_iter()
            .map(|i| {
                let a = &signatures[i];
                signatures[i + 1..].iter().map(|b| similarity(a, b)).collect()
            })
            .collect();
        Self {
            num_docs,
            scores: rows.concat(),
        }
    }

    /// Gets the score of the pair `(i, j)`.
    ///
    /// # Panics
    ///
    /// Unless `i < j < n`: the diagonal and the lower triangle do not exist.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < j && j < self.num_docs,
            "Pair ({i}, {j}) is not in the strict upper triangle."
        );
        self.scores[self.index(i, j)]
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        // Row i starts after the i previous rows of lengths n-1, n-2, ...
        i * (2 * self.num_docs - i - 1) / 2 + (j - i - 1)
    }

    /// Iterates over `(i, j, score)` triplets in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n = self.num_docs;
        (0..n)
            .flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
            .zip(self.scores.iter().copied())
            .map(|((i, j), score)| (i, j, score))
    }

    /// Gets the flat score buffer in row-major order.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Gets the number of documents.
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Gets the number of scored pairs, `n * (n - 1) / 2`.
    pub fn num_pairs(&self) -> usize {
        self.scores.len()
    }

    #[cfg(test)]
    pub(crate) fn from_raw(num_docs: usize, scores: Vec<f64>) -> Self {
        debug_assert_eq!(scores.len(), num_docs * num_docs.saturating_sub(1) / 2);
        Self { num_docs, scores }
    }
}
