use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

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
#[clap(name = "neardup-dump", about = "A program to dump MinHash signatures.")]
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

    /// Seed value for random values.
    #[clap(short = 's', long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let file = File::open(&args.document_path)
        .with_context(|| format!("Could not open {}", args.document_path.display()))?;
    let documents: Vec<Document> =
        serde_json::from_reader(BufReader::new(file)).context("Could not parse documents")?;

    let config = MinHashConfig {
        window_size: args.window_size,
        num_hashes: args.num_hashes,
        ..MinHashConfig::default()
    };
    let scorer = MinHashScorer::new(config, args.seed)?
        .build_signatures(documents.iter().map(|doc| doc.text.as_str()))?;

    for (document, signature) in documents.iter().zip(scorer.signatures()) {
        let mut row = String::new();
        for &slot in signature.slots() {
            if !row.is_empty() {
                row.push(' ');
            }
            write!(row, "{slot}")?;
        }
        println!("{}\t{row}", format_id(&document.id));
    }

    Ok(())
}

fn format_id(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        v => v.to_string(),
    }
}
