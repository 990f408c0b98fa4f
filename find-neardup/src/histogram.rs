//! Distribution of similarity scores across fixed buckets.
use crate::matrix::SimilarityMatrix;

const NUM_BUCKETS: usize = 11;

/// Counts of pair scores per 0.1-wide bucket.
///
/// Bucket `b` (lower bound `b / 10`) counts scores in `[b / 10, b / 10 + 0.1)`
/// for `b < 1.0`. The top bucket counts scores of exactly 1.0, so perfect
/// matches do not overflow the 0.9 bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: [usize; NUM_BUCKETS],
}

impl Histogram {
    /// Builds the histogram in a single pass over all matrix entries.
    pub fn from_matrix(matrix: &SimilarityMatrix) -> Self {
        let mut counts = [0; NUM_BUCKETS];
        for &score in matrix.scores() {
            counts[bucket_of(score)] += 1;
        }
        Self { counts }
    }

    /// Iterates over `(lower bound, count)` per bucket in ascending order.
    pub fn buckets(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(b, &count)| (b as f64 / 10., count))
    }

    /// Gets the total count over all buckets, i.e., the number of pairs.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[inline]
fn bucket_of(score: f64) -> usize {
    ((score * 10.).floor() as usize).min(NUM_BUCKETS - 1)
}
