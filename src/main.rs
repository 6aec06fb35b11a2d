#![forbid(unsafe_code)]
//! # Review Phrases CLI
//!
//! Command-line interface for the `review_phrases` crate. Reads location
//! datasets (`data.json` as produced by the review fetcher), extracts key
//! phrases for every location and exports the annotated records.
//!
//! ## Example
//! ```bash
//! cargo run --release -- data.json --top-n 5 --export-format csv
//! ```
//!
//! See `--help` for all available options.

use clap::Parser;
use log::error;
use review_phrases::{ExportFormat, ExtractOptions, StopWords, analyze_path, collect_files};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Dataset file or directory of dataset files (.json)
    path: PathBuf,

    /// Optional path to additional stopword file (.txt, one word per line)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Maximum number of key phrases per location
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    top_n: u16,

    /// Rank single words only, without bigrams
    #[arg(long, default_value_t = false)]
    single_words: bool,

    /// Output format for export (txt, csv, tsv, json)
    #[arg(long, default_value = "json")]
    export_format: ExportFormat,

    /// Directory for exported files (default: current directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.path.exists() {
        error!("Error: path does not exist: {}", cli.path.display());
        process::exit(1);
    }

    let stop_words = match &cli.stopwords {
        Some(file) => match StopWords::from_file(file) {
            Ok(set) => set,
            Err(e) => {
                error!("Error: {}", e);
                process::exit(1);
            }
        },
        None => StopWords::english(),
    };

    let options = ExtractOptions {
        top_n: usize::from(cli.top_n),
        with_ngrams: !cli.single_words,
    };
    let out_dir = cli.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));

    let files = collect_files(&cli.path);
    if files.is_empty() {
        error!("Error: no .json datasets found in {}", cli.path.display());
        process::exit(1);
    }

    let mut any_errors = false;
    for file in files {
        if !analyze_one(&file, &stop_words, &options, cli.export_format, &out_dir) {
            any_errors = true;
        }
    }
    if any_errors {
        process::exit(1);
    }
}

fn analyze_one(
    file: &Path,
    stop_words: &StopWords,
    options: &ExtractOptions,
    format: ExportFormat,
    out_dir: &Path,
) -> bool {
    match analyze_path(file, stop_words, options, format, out_dir) {
        Ok(report) => {
            println!("{}", report.result);
            println!(
                "Saved to {} (locations: {})",
                report.output.display(),
                report.locations
            );
            true
        }
        Err(e) => {
            error!("Error analyzing {}: {}", file.display(), e);
            false
        }
    }
}
