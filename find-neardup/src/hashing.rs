//! Families of independent linear hash functions over shingle fingerprints.
use crate::errors::{FindNeardupError, Result};

use rand::seq::index::sample;
use rand::RngCore;

/// A linear hash function `f(x) = (multiplier * x + offset) mod modulus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashFunction {
    multiplier: u64,
    offset: u64,
    modulus: u64,
}

impl HashFunction {
    pub(crate) const fn new(multiplier: u64, offset: u64, modulus: u64) -> Self {
        Self {
            multiplier,
            offset,
            modulus,
        }
    }

    /// Hashes a shingle fingerprint.
    #[inline(always)]
    pub fn hash(&self, fingerprint: u32) -> u64 {
        // Coefficients are below 2^32, so the linear form fits in u64.
        (self.multiplier * u64::from(fingerprint) + self.offset) % self.modulus
    }
}

/// An ordered family of hash functions, generated once per run and shared
/// read-only by every signature computation.
///
/// All coefficients are drawn without replacement, so no two functions in a
/// family are coefficient-identical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashFamily {
    functions: Vec<HashFunction>,
}

impl HashFamily {
    /// Generates `num_hashes` functions whose `2 * num_hashes` coefficients
    /// are sampled without replacement from `[0, coefficient_bound)`, paired
    /// consecutively.
    ///
    /// The random source must be seeded by the caller; no seeding happens
    /// here, so a fixed source makes generation fully deterministic.
    pub fn generate<R>(
        num_hashes: usize,
        coefficient_bound: u64,
        modulus: u64,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: RngCore,
    {
        if num_hashes == 0 {
            return Err(FindNeardupError::config(
                "Number of hash functions must not be 0.",
            ));
        }
        if coefficient_bound > 1 << 32 {
            return Err(FindNeardupError::config(
                "Coefficient bound must not exceed 2^32.",
            ));
        }
        if modulus <= u64::from(u32::MAX) {
            return Err(FindNeardupError::config(
                "Hash modulus must exceed the maximum fingerprint value 2^32 - 1.",
            ));
        }
        let num_coefficients = num_hashes as u64 * 2;
        if num_coefficients > coefficient_bound {
            return Err(FindNeardupError::config(
                "Sampling range is too small for the requested number of hash functions.",
            ));
        }

        let coefficients = sample(rng, coefficient_bound as usize, num_coefficients as usize);
        let mut iter = coefficients.into_iter();
        let mut functions = Vec::with_capacity(num_hashes);
        while let (Some(multiplier), Some(offset)) = (iter.next(), iter.next()) {
            functions.push(HashFunction::new(multiplier as u64, offset as u64, modulus));
        }
        Ok(Self { functions })
    }

    /// Gets the functions in generation order.
    pub fn functions(&self) -> &[HashFunction] {
        &self.functions
    }

    /// Gets the number of functions, i.e., the signature length.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Checks if the family has no functions.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hashbrown::HashSet;
    use rand_xoshiro::rand_core::SeedableRng;
    use rand_xoshiro::SplitMix64;

    const MODULUS: u64 = 4_294_969_733;

    #[test]
    fn test_formula() {
        let f = HashFunction::new(3, 5, MODULUS);
        assert_eq!(f.hash(7), 26);
        assert_eq!(f.hash(0), 5);
    }

    #[test]
    fn test_hash_below_modulus() {
        let mut rng = SplitMix64::seed_from_u64(42);
        let family = HashFamily::generate(42, u64::from(u32::MAX), MODULUS, &mut rng).unwrap();
        for f in family.functions() {
            assert!(f.hash(u32::MAX) < MODULUS);
            assert!(f.hash(0) < MODULUS);
        }
    }

    #[test]
    fn test_len() {
        let mut rng = SplitMix64::seed_from_u64(42);
        let family = HashFamily::generate(42, u64::from(u32::MAX), MODULUS, &mut rng).unwrap();
        assert_eq!(family.len(), 42);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let mut r1 = SplitMix64::seed_from_u64(42);
        let mut r2 = SplitMix64::seed_from_u64(42);
        let f1 = HashFamily::generate(16, u64::from(u32::MAX), MODULUS, &mut r1).unwrap();
        let f2 = HashFamily::generate(16, u64::from(u32::MAX), MODULUS, &mut r2).unwrap();
        assert_eq!(f1, f2);
    }

    #[test]
    fn test_coefficients_distinct() {
        let mut rng = SplitMix64::seed_from_u64(42);
        let family = HashFamily::generate(64, u64::from(u32::MAX), MODULUS, &mut rng).unwrap();
        let mut coefficients = HashSet::new();
        for f in family.functions() {
            coefficients.insert(f.multiplier);
            coefficients.insert(f.offset);
        }
        assert_eq!(coefficients.len(), 64 * 2);
    }

    #[test]
    fn test_coefficients_in_range() {
        let bound = 1000;
        let mut rng = SplitMix64::seed_from_u64(42);
        let family = HashFamily::generate(100, bound, MODULUS, &mut rng).unwrap();
        for f in family.functions() {
            assert!(f.multiplier < bound);
            assert!(f.offset < bound);
        }
    }

    #[test]
    fn test_zero_hashes() {
        let mut rng = SplitMix64::seed_from_u64(42);
        let result = HashFamily::generate(0, u64::from(u32::MAX), MODULUS, &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn test_range_too_small() {
        let mut rng = SplitMix64::seed_from_u64(42);
        let result = HashFamily::generate(4, 6, MODULUS, &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn test_modulus_too_small() {
        let mut rng = SplitMix64::seed_from_u64(42);
        let result = HashFamily::generate(4, u64::from(u32::MAX), u64::from(u32::MAX), &mut rng);
        assert!(result.is_err());
    }
}
