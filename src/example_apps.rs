//! Reusable demo runners shared by the demo binaries.

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::listing::list_ids_and_paths;
use crate::metadata::{extract_metadata, resolve_listing};
use crate::preprocess::{Preprocessor, PreprocessorConfig};
use crate::record::{CleanedRecord, RawRecord};

#[derive(Debug, Parser)]
#[command(
    name = "clean_jsonl",
    disable_help_subcommand = true,
    about = "Clean raw product records from a JSON-lines file",
    long_about = "Read raw product rows from a JSON-lines file, normalize them into the canonical null-free schema, and write cleaned JSON-lines.",
    after_help = "Set RUST_LOG=debug to see per-run id-integrity accounting."
)]
struct CleanJsonlCli {
    /// Input JSON-lines file of raw records.
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Output JSON-lines file for cleaned records.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
    #[arg(long, help = "Uppercase the normalized text fields")]
    uppercase: bool,
    #[arg(long, help = "Parse and flatten the optional details blob")]
    include_details: bool,
    #[arg(
        long,
        value_name = "PATH",
        help = "Optional image folder to correlate against the cleaned metadata"
    )]
    image_folder: Option<PathBuf>,
}

/// Run the JSONL cleaning demo over `args_iter` (binary name excluded).
pub fn run_clean_jsonl<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = CleanJsonlCli::parse_from(
        std::iter::once("clean_jsonl".to_string()).chain(args_iter),
    );

    let reader = BufReader::new(File::open(&cli.input)?);
    let mut raw_records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        raw_records.push(RawRecord::from_value(serde_json::from_str(&line)?));
    }
    info!(records = raw_records.len(), input = %cli.input.display(), "loaded raw records");

    let preprocessor = Preprocessor::new(PreprocessorConfig {
        uppercase_text: cli.uppercase,
        include_details: cli.include_details,
        ..PreprocessorConfig::default()
    });
    let cleaned = preprocessor.preprocess_parallel(&raw_records);

    let mut writer = BufWriter::new(File::create(&cli.output)?);
    for record in &cleaned {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    info!(records = cleaned.len(), output = %cli.output.display(), "wrote cleaned records");

    if let Some(folder) = cli.image_folder {
        let listing = list_ids_and_paths(&folder)?;
        let raw_views: Vec<RawRecord> = cleaned.iter().map(CleanedRecord::to_raw).collect();
        let index = extract_metadata(raw_views, cleaned.len())?;
        let resolved = resolve_listing(&listing, &index)?;
        info!(
            files = listing.len(),
            resolved = resolved.len(),
            folder = %folder.display(),
            "correlated image listing against cleaned metadata"
        );
    }

    Ok(())
}
