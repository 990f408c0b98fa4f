//! Near-duplicate detection in document collections with MinHash signatures.
#![deny(missing_docs)]

pub mod errors;
pub mod hashing;
pub mod histogram;
pub mod matrix;
pub mod scorer;
pub mod shingling;
pub mod signature;
pub mod similarity;

pub use scorer::{MinHashConfig, MinHashScorer};
