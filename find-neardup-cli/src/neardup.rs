use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use find_neardup::{MinHashConfig, MinHashScorer};

#[derive(Deserialize, Debug)]
struct Document {
    id: serde_json::Value,
    text: String,
}

#[derive(Parser, Debug)]
#[clap(
    name = "neardup",
    about = "A program to find near-duplicate documents."
)]
struct Args {
    /// File path to a JSON array of documents with id and text fields.
    #[clap(short = 'i', long)]
    document_path: PathBuf,

    /// Window size for w-shingling over whitespace tokens (must be more than 0).
    #[clap(short = 'w', long, default_value = "2")]
    window_size: usize,

    /// Number of hash functions, i.e., the signature length.
    #[clap(short = 'k', long, default_value = "42")]
    num_hashes: usize,

    /// Similarity threshold in the range of [0,1]; pairs scoring above it
    /// (but below 1) are reported.
    #[clap(short = 't', long, default_value = "0.7")]
    threshold: f64,

    /// Seed value for random values.
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// Disables parallel construction.
    #[clap(short = 'p', long)]
    disable_parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let document_path = args.document_path;
    let window_size = args.window_size;
    let num_hashes = args.num_hashes;
    let threshold = args.threshold;
    let seed = args.seed;
    let disable_parallel = args.disable_parallel;

    let file = File::open(&document_path)
        .with_context(|| format!("Could not open {}", document_path.display()))?;
    let documents: Vec<Document> =
        serde_json::from_reader(BufReader::new(file)).context("Could not parse documents")?;
    eprintln!("#documents = {}", documents.len());

    let config = MinHashConfig {
        window_size,
        num_hashes,
        ..MinHashConfig::default()
    };
    let mut scorer = MinHashScorer::new(config, seed)?.shows_progress(true);

    {
        eprintln!("Building signatures...");
        let start = Instant::now();
        let texts = documents.iter().map(|doc| doc.text.as_str());
        scorer = if disable_parallel {
            scorer.build_signatures(texts)?
        } else {
            scorer.build_signatures_in_parallel(texts)?
        };
        eprintln!(
            "Built {} signatures in {} sec",
            scorer.len(),
            start.elapsed().as_secs_f64()
        );
    }

    {
        eprintln!("Scoring all document pairs...");
        let start = Instant::now();
        scorer = if disable_parallel {
            scorer.score_pairs()
        } else {
            scorer.score_pairs_in_parallel()
        };
        eprintln!("Scored in {} sec", start.elapsed().as_secs_f64());
    }

    eprintln!("Similarity histogram:");
    for (bucket, count) in scorer.histogram().unwrap().buckets() {
        eprintln!("{bucket:.1} => {count}");
    }

    println!("id1,id2,score");
    for (i, j, score) in scorer.similar_pairs(threshold) {
        println!(
            "{},{},{score}",
            format_id(&documents[i].id),
            format_id(&documents[j].id)
        );
    }

    Ok(())
}

fn format_id(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        v => v.to_string(),
    }
}
