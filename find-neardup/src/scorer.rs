//! Corpus-level scoring of all document pairs.
use crate::errors::{FindNeardupError, Result};
use crate::hashing::HashFamily;
use crate::histogram::Histogram;
use crate::matrix::SimilarityMatrix;
use crate::signature::Signature;

use rand::SeedableRng;
use rayon::prelude::*;

/// Configuration for signature construction.
#[derive(Clone, Copy, Debug)]
pub struct MinHashConfig {
    /// Number of consecutive tokens fingerprinted together as one shingle.
    pub window_size: usize,
    /// Number of hash functions, and thus the length of every signature.
    pub num_hashes: usize,
    /// Exclusive upper bound for sampling hash coefficients (at most 2^32).
    pub coefficient_bound: u64,
    /// Prime modulus of every hash function; must exceed `u32::MAX` to
    /// dominate any shingle fingerprint.
    pub modulus: u64,
}

impl Default for MinHashConfig {
    fn default() -> Self {
        Self {
            window_size: 2,
            num_hashes: 42,
            coefficient_bound: u64::from(u32::MAX),
            modulus: 4_294_969_733,
        }
    }
}

/// Scorer flagging probable near-duplicate document pairs via MinHash
/// signatures.
///
/// One hash family is generated up front and shared read-only by every
/// signature, so that the fraction of matching slots between two signatures
/// approximates the Jaccard similarity of the documents' shingle sets.
///
/// # Examples
///
/// ```
/// use find_neardup::{MinHashConfig, MinHashScorer};
///
/// let documents = [
///     "the cat sat on the mat",
///     "the cat sat on the mat",
///     "completely unrelated content here",
/// ];
/// let scorer = MinHashScorer::new(MinHashConfig::default(), Some(42))?
///     .build_signatures(documents)?
///     .score_pairs();
///
/// // Identical documents always score exactly 1.0 and are reported as exact,
/// // not near, duplicates.
/// let matrix = scorer.similarity_matrix().unwrap();
/// assert_eq!(matrix.get(0, 1), 1.0);
/// assert!(scorer.similar_pairs(0.7).is_empty());
/// # Ok::<(), find_neardup::errors::FindNeardupError>(())
/// ```
pub struct MinHashScorer {
    config: MinHashConfig,
    family: HashFamily,
    signatures: Vec<Signature>,
    matrix: Option<SimilarityMatrix>,
    shows_progress: bool,
}

impl MinHashScorer {
    /// Creates an instance, generating the shared hash family.
    ///
    /// # Arguments
    ///
    /// * `config` - Signature construction parameters.
    /// * `seed` - Seed value for random values. If `None`, a random seed is
    ///            drawn, making signatures incomparable across runs.
    ///
    /// # Errors
    ///
    /// When the configuration is invalid (zero window size, zero hash
    /// functions, a sampling range too small for `2 * num_hashes` distinct
    /// coefficients, or a modulus not exceeding `u32::MAX`).
    pub fn new(config: MinHashConfig, seed: Option<u64>) -> Result<Self> {
        if config.window_size == 0 {
            return Err(FindNeardupError::config("Window size must not be 0."));
        }
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        let mut seeder = rand_xoshiro::SplitMix64::seed_from_u64(seed);
        let family = HashFamily::generate(
            config.num_hashes,
            config.coefficient_bound,
            config.modulus,
            &mut seeder,
        )?;
        Ok(Self {
            config,
            family,
            signatures: vec![],
            matrix: None,
            shows_progress: false,
        })
    }

    /// Shows the progress via the standard error output?
    pub const fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Builds one signature per document, in input order.
    ///
    /// Documents are tokenized on whitespace.
    ///
    /// # Errors
    ///
    /// When a document contains no tokens.
    pub fn build_signatures<I, D>(mut self, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<str>,
    {
        let mut signatures = vec![];
        for (i, doc) in documents.into_iter().enumerate() {
            if self.shows_progress && (i + 1) % 1000 == 0 {
                eprintln!("Processed {} documents...", i + 1);
            }
            signatures.push(self.signature_of(doc.as_ref())?);
        }
        self.signatures = signatures;
        Ok(self)
    }

    /// Builds one signature per document with the work spread across worker
    /// threads. Signatures depend only on their own document and the shared
    /// family, so the result is identical to
    /// [`build_signatures`](Self::build_signatures), in input order.
    pub fn build_signatures_in_parallel<I, D>(mut self, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<str> + Sync,
    {
        let documents: Vec<D> = documents.into_iter().collect();
        let signatures = documents
            .par_iter()
            .map(|doc| self.signature_of(doc.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.signatures = signatures;
        Ok(self)
    }

    fn signature_of(&self, text: &str) -> Result<Signature> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        Signature::compute(&tokens, self.config.window_size, &self.family)
    }

    /// Scores every unordered document pair into the upper-triangular
    /// similarity matrix.
    pub fn score_pairs(mut self) -> Self {
        self.matrix = Some(SimilarityMatrix::from_signatures(&self.signatures));
        self
    }

    /// Scores every unordered document pair with matrix rows spread across
    /// worker threads. Produces the same matrix as
    /// [`score_pairs`](Self::score_pairs).
    pub fn score_pairs_in_parallel(mut self) -> Self {
        self.matrix = Some(SimilarityMatrix::from_signatures_in_parallel(
            &self.signatures,
        ));
        self
    }

    /// Gets the similarity matrix, or `None` before scoring.
    pub fn similarity_matrix(&self) -> Option<&SimilarityMatrix> {
        self.matrix.as_ref()
    }

    /// Builds the score distribution histogram, or `None` before scoring.
    pub fn histogram(&self) -> Option<Histogram> {
        self.matrix.as_ref().map(Histogram::from_matrix)
    }

    /// Reports candidate near-duplicate pairs: triplets `(i, j, score)` with
    /// `threshold < score < 1.0`, in row-major order.
    ///
    /// Pairs scoring exactly 1.0 are exact duplicates, a separate concern,
    /// and are excluded here; they remain visible in the matrix and in the
    /// histogram's top bucket.
    pub fn similar_pairs(&self, threshold: f64) -> Vec<(usize, usize, f64)> {
        self.matrix.as_ref().map_or_else(Vec::new, |matrix| {
            matrix
                .iter()
                .filter(|&(_, _, score)| threshold < score && score < 1.0)
                .collect()
        })
    }

    /// Gets the signatures built so far, in document order.
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Gets the shared hash family.
    pub fn hash_family(&self) -> &HashFamily {
        &self.family
    }

    /// Gets the number of input documents.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Checks if no documents have been processed.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Gets the configuration.
    pub const fn config(&self) -> MinHashConfig {
        self.config
    }
}
