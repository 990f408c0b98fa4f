use find_neardup::{MinHashConfig, MinHashScorer};

fn main() {
    let documents = vec![
        "Welcome to Jimbocho, the town of books and curry!",
        "Welcome to Jimbocho, the city of books and curry!",
        "Welcome to Jimbocho, the town of books and curry!",
        "Totally different sentence about nothing in particular.",
    ];

    // Creates a scorer with 64 hash functions over word bigrams
    // (with random seed value 42).
    let scorer = MinHashScorer::new(
        MinHashConfig {
            num_hashes: 64,
            ..MinHashConfig::default()
        },
        Some(42),
    )
    .unwrap()
    // Builds one signature per document and scores all pairs.
    .build_signatures_in_parallel(documents.iter())
    .unwrap()
    .score_pairs_in_parallel();

    let matrix = scorer.similarity_matrix().unwrap();

    // Documents 0 and 2 are identical, so their estimate is exactly 1.0
    // and the pair is reported as an exact, not near, duplicate.
    assert_eq!(matrix.get(0, 2), 1.0);

    // Reports candidate near-duplicate pairs above similarity 0.5.
    for (i, j, score) in scorer.similar_pairs(0.5) {
        println!("i={i}, j={j}, score={score}");
        println!("{}", documents[i]);
        println!("{}", documents[j]);
    }
}
