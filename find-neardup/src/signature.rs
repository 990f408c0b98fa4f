//! MinHash signatures of single documents.
use crate::errors::{FindNeardupError, Result};
use crate::hashing::HashFamily;
use crate::shingling::ShingleIter;

use hashbrown::HashSet;

/// A MinHash signature: one slot per hash function, holding the minimum hash
/// value over all shingles of the document.
///
/// Every signature built from the same family has the same length, making
/// slot-wise comparison meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    slots: Vec<u64>,
}

impl Signature {
    /// Computes the signature of a tokenized document.
    ///
    /// All per-function minimums are folded in a single pass over the
    /// shingles. Repeated fingerprints are skipped since they cannot change
    /// any minimum.
    ///
    /// # Errors
    ///
    /// When the document produces no shingles, i.e., it has no tokens.
    pub fn compute<T>(tokens: &[T], window_size: usize, family: &HashFamily) -> Result<Self>
    where
        T: AsRef<str>,
    {
        let mut slots = vec![u64::MAX; family.len()];
        let mut seen = HashSet::new();
        for fingerprint in ShingleIter::new(tokens, window_size) {
            if !seen.insert(fingerprint) {
                continue;
            }
            for (slot, function) in slots.iter_mut().zip(family.functions()) {
                let h = function.hash(fingerprint);
                if h < *slot {
                    *slot = h;
                }
            }
        }
        if seen.is_empty() {
            return Err(FindNeardupError::input(
                "Document must contain at least one token.",
            ));
        }
        Ok(Self { slots })
    }

    pub(crate) fn from_slots(slots: Vec<u64>) -> Self {
        Self { slots }
    }

    /// Gets the slot values in hash-function order.
    pub fn slots(&self) -> &[u64] {
        &self.slots
    }

    /// Gets the signature length.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Checks if the signature has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand_xoshiro::rand_core::SeedableRng;
    use rand_xoshiro::SplitMix64;

    fn family(num_hashes: usize) -> HashFamily {
        let mut rng = SplitMix64::seed_from_u64(42);
        HashFamily::generate(num_hashes, u64::from(u32::MAX), 4_294_969_733, &mut rng).unwrap()
    }

    #[test]
    fn test_length_is_family_size() {
        let family = family(42);
        let long = ["the", "cat", "sat", "on", "the", "mat"];
        let short = ["cat"];
        assert_eq!(Signature::compute(&long, 2, &family).unwrap().len(), 42);
        assert_eq!(Signature::compute(&short, 2, &family).unwrap().len(), 42);
    }

    #[test]
    fn test_identical_tokens_identical_signatures() {
        let family = family(16);
        let tokens = ["the", "cat", "sat", "on", "the", "mat"];
        let a = Signature::compute(&tokens, 2, &family).unwrap();
        let b = Signature::compute(&tokens, 2, &family).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeated_shingles_do_not_change_slots() {
        let family = family(16);
        let once = ["a", "b"];
        let twice = ["a", "b", "a", "b"];
        // "a b" occurs twice in the second document; its minimums are the
        // minimums over {"a b", "b a"}.
        let a = Signature::compute(&once, 2, &family).unwrap();
        let b = Signature::compute(&twice, 2, &family).unwrap();
        for (x, y) in a.slots().iter().zip(b.slots()) {
            assert!(y <= x);
        }
    }

    #[test]
    fn test_empty_document() {
        let family = family(16);
        let tokens: Vec<&str> = vec![];
        let result = Signature::compute(&tokens, 2, &family);
        assert!(result.is_err());
    }

    #[test]
    fn test_slots_below_modulus() {
        let family = family(42);
        let tokens = ["the", "cat", "sat", "on", "the", "mat"];
        let signature = Signature::compute(&tokens, 2, &family).unwrap();
        for &slot in signature.slots() {
            assert!(slot < 4_294_969_733);
        }
    }
}
