//! Similarity estimation between signatures.
use crate::signature::Signature;

/// Estimates the Jaccard similarity of two documents as the fraction of
/// matching signature slots, a value in `[0, 1]`.
///
/// # Panics
///
/// If the signatures differ in length. Lengths are fixed per run, so a
/// mismatch is a programming error, not a data issue.
///
/// # Examples
///
/// ```
/// use find_neardup::hashing::HashFamily;
/// use find_neardup::signature::Signature;
/// use find_neardup::similarity::similarity;
/// use rand_xoshiro::rand_core::SeedableRng;
///
/// let mut rng = rand_xoshiro::SplitMix64::seed_from_u64(42);
/// let family = HashFamily::generate(16, u64::from(u32::MAX), 4_294_969_733, &mut rng)?;
///
/// let tokens = ["the", "cat", "sat"];
/// let a = Signature::compute(&tokens, 2, &family)?;
/// let b = Signature::compute(&tokens, 2, &family)?;
/// assert_eq!(similarity(&a, &b), 1.0);
/// # Ok::<(), find_neardup::errors::FindNeardupError>(())
/// ```
pub fn similarity(a: &Signature, b: &Signature) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "Signatures must have identical lengths."
    );
    let matched = a
        .slots()
        .iter()
        .zip(b.slots())
        .filter(|(x, y)| x == y)
        .count();
    matched as f64 / a.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let a = Signature::from_slots(vec![1, 2, 3, 4]);
        assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn test_symmetry_and_range() {
        let a = Signature::from_slots(vec![1, 2, 3, 4]);
        let b = Signature::from_slots(vec![1, 2, 9, 9]);
        assert_eq!(similarity(&a, &b), similarity(&b, &a));
        assert_eq!(similarity(&a, &b), 0.5);
        let c = Signature::from_slots(vec![9, 9, 9, 9]);
        assert_eq!(similarity(&a, &c), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_mismatched_lengths() {
        let a = Signature::from_slots(vec![1, 2, 3]);
        let b = Signature::from_slots(vec![1, 2]);
        similarity(&a, &b);
    }
}
