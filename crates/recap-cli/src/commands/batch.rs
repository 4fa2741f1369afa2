//! Batch command - run the full pipeline over many receipt files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use recap_core::models::receipt::GroupedOutput;
use recap_core::pipeline::ReceiptPipeline;

use super::process::{load_config, read_document_text};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output path for the grouped JSON artifact
    #[arg(short, long, default_value = "grouped_receipts.json")]
    output: PathBuf,

    /// Also write a per-vendor totals CSV next to the artifact
    #[arg(long)]
    summary: bool,

    /// Skip files that fail to read instead of aborting
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} receipts to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Collect phase: one document at a time, the full set before aggregation.
    let mut pipeline = ReceiptPipeline::new();
    let mut skipped = 0usize;

    for path in &files {
        match read_document_text(path, &config) {
            Ok(text) => pipeline.ingest(&text),
            Err(e) => {
                if args.continue_on_error {
                    warn!("Skipping {}: {}", path.display(), e);
                    skipped += 1;
                } else {
                    anyhow::bail!("Failed to read {}: {}", path.display(), e);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let collected = pipeline.len();
    let grouped = pipeline.finish();

    let artifact = if config.output.pretty {
        serde_json::to_string_pretty(&grouped)?
    } else {
        serde_json::to_string(&grouped)?
    };
    fs::write(&args.output, artifact)?;
    println!(
        "{} Grouped artifact written to {}",
        style("✓").green(),
        args.output.display()
    );

    if args.summary {
        let summary_path = args.output.with_file_name("vendor_totals.csv");
        write_summary(&summary_path, &grouped)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} receipts across {} vendors in {:?}",
        style("✓").green(),
        collected,
        grouped.len(),
        start.elapsed()
    );
    if skipped > 0 {
        println!("   {} skipped", style(skipped).red());
    }

    Ok(())
}

fn write_summary(path: &Path, grouped: &GroupedOutput) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["company", "receipts", "total"])?;
    for group in grouped.iter() {
        wtr.write_record([
            group.company_name.as_str(),
            &group.receipts.len().to_string(),
            &group.total().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
