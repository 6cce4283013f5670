use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lexsim::{Corpus, ProfileConfig, SimilarityMatrix};

/// Report the most lexically similar pairs of plain-text documents in a
/// directory.
#[derive(Parser)]
#[command(name = "lexsim", version, about)]
struct Cli {
    /// Directory scanned (non-recursively) for .txt documents
    dir: PathBuf,

    /// Profile size: how many top terms each document keeps
    #[arg(long, default_value_t = 100)]
    top_terms: usize,

    /// How many result pairs to report
    #[arg(long, default_value_t = 10)]
    top_pairs: usize,

    /// Emit the ranked pairs as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ReportPair<'a> {
    document_a: &'a str,
    document_b: &'a str,
    score: f64,
}

/// Collect the .txt files of a directory, sorted by path so that document
/// positions (and therefore tie-breaks) are reproducible across runs.
fn collect_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read document directory {}", dir.display()))?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .collect();
    paths.sort();
    Ok(paths)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ProfileConfig {
        top_term_count: cli.top_terms,
        top_pair_count: cli.top_pairs,
        ..ProfileConfig::default()
    };

    let paths = collect_documents(&cli.dir)?;
    info!(documents = paths.len(), dir = %cli.dir.display(), "collected documents");

    let (corpus, failures) = Corpus::from_paths(&paths, &config);
    for failure in &failures {
        warn!(document = %failure.path().display(), error = %failure, "skipped unreadable document");
    }

    let matrix = SimilarityMatrix::build(&corpus);
    let pairs = matrix.top_pairs(config.top_pair_count);

    if cli.json {
        let report: Vec<ReportPair> = pairs
            .iter()
            .map(|pair| ReportPair {
                document_a: &corpus.documents()[pair.a].name,
                document_b: &corpus.documents()[pair.b].name,
                score: pair.score,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for pair in &pairs {
            println!(
                "Similarity between \"{}\" and \"{}\" is {:.6}",
                corpus.documents()[pair.a].name,
                corpus.documents()[pair.b].name,
                pair.score
            );
        }
    }

    Ok(())
}
