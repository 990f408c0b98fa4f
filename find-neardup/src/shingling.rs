//! Extraction of w-shingle fingerprints from token sequences.
use xxhash_rust::xxh32::Xxh32;

/// Fingerprints a window of tokens.
///
/// The digest is that of the tokens joined by single spaces, computed without
/// materializing the joined string. xxh32 keeps fingerprints within 32 bits,
/// below the hash-function modulus.
pub fn fingerprint<T>(window: &[T]) -> u32
where
    T: AsRef<str>,
{
    let mut hasher = Xxh32::new(0);
    for (i, token) in window.iter().enumerate() {
        if i != 0 {
            hasher.update(b" ");
        }
        hasher.update(token.as_ref().as_bytes());
    }
    hasher.digest()
}

/// Iterator over the shingle fingerprints of a token sequence, one per window
/// position in left-to-right order.
///
/// A sequence of `n >= window_size` tokens yields `n - window_size + 1`
/// fingerprints. A non-empty sequence shorter than the window yields exactly
/// one fingerprint over all available tokens. An empty sequence yields none.
pub struct ShingleIter<'a, T> {
    tokens: &'a [T],
    window_size: usize,
    position: usize,
}

impl<'a, T> ShingleIter<'a, T> {
    /// Creates an iterator over windows of `window_size` tokens.
    ///
    /// # Panics
    ///
    /// If `window_size` is 0.
    pub fn new(tokens: &'a [T], window_size: usize) -> Self {
        assert_ne!(window_size, 0);
        Self {
            tokens,
            window_size,
            position: 0,
        }
    }
}

impl<'a, T> Iterator for ShingleIter<'a, T>
where
    T: AsRef<str>,
{
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tokens.is_empty() {
            return None;
        }
        if self.tokens.len() < self.window_size {
            // A document shorter than the window forms a single shingle.
            if self.position != 0 {
                return None;
            }
            self.position = 1;
            return Some(fingerprint(self.tokens));
        }
        if self.tokens.len() < self.position + self.window_size {
            return None;
        }
        let window = &self.tokens[self.position..self.position + self.window_size];
        self.position += 1;
        Some(fingerprint(window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use xxhash_rust::xxh32::xxh32;

    #[test]
    fn test_w1() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = ShingleIter::new(&tokens, 1);
        assert_eq!(iter.next(), Some(fingerprint(&["a"])));
        assert_eq!(iter.next(), Some(fingerprint(&["b"])));
        assert_eq!(iter.next(), Some(fingerprint(&["c"])));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_w2() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = ShingleIter::new(&tokens, 2);
        assert_eq!(iter.next(), Some(fingerprint(&["a", "b"])));
        assert_eq!(iter.next(), Some(fingerprint(&["b", "c"])));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_w3() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = ShingleIter::new(&tokens, 3);
        assert_eq!(iter.next(), Some(fingerprint(&["a", "b", "c"])));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_w4_short_document() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = ShingleIter::new(&tokens, 4);
        assert_eq!(iter.next(), Some(fingerprint(&["a", "b", "c"])));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty() {
        let tokens: Vec<&str> = vec![];
        let mut iter = ShingleIter::new(&tokens, 2);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_num_shingles() {
        let tokens = vec!["a", "b", "c", "d", "e", "f"];
        for window_size in 1..=tokens.len() {
            let num = ShingleIter::new(&tokens, window_size).count();
            assert_eq!(num, tokens.len() - window_size + 1);
        }
    }

    #[test]
    fn test_deterministic() {
        let tokens = vec!["the", "cat", "sat", "on", "the", "mat"];
        let a: Vec<_> = ShingleIter::new(&tokens, 2).collect();
        let b: Vec<_> = ShingleIter::new(&tokens, 2).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_is_space_joined() {
        assert_eq!(fingerprint(&["the", "cat"]), xxh32(b"the cat", 0));
        assert_eq!(fingerprint(&["the"]), xxh32(b"the", 0));
    }

    #[test]
    #[should_panic]
    fn test_zero_window() {
        let tokens = vec!["a"];
        ShingleIter::new(&tokens, 0);
    }
}
