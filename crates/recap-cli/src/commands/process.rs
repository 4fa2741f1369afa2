//! Process command - extract fields from a single receipt file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use recap_core::models::config::RecapConfig;
use recap_core::pdf::{PdfExtractor, PdfProcessor};
use recap_core::receipt::RuleBasedParser;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show which field rules missed
    #[arg(long)]
    show_warnings: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = read_document_text(&args.input, &config)?;
    let report = RuleBasedParser::new().parse_report(&text);

    if args.show_warnings && !report.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &report.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = if config.output.pretty {
        serde_json::to_string_pretty(&report.record)?
    } else {
        serde_json::to_string(&report.record)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            println!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", output),
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<RecapConfig> {
    Ok(match config_path {
        Some(path) => RecapConfig::from_file(Path::new(path))?,
        None => RecapConfig::default(),
    })
}

/// Read already-decoded text from a receipt document.
///
/// `.txt` inputs are taken as-is; `.pdf` goes through the embedded-text
/// extractor. Anything else is unsupported.
pub(crate) fn read_document_text(path: &Path, config: &RecapConfig) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "txt" | "text" => Ok(fs::read_to_string(path)?),
        "pdf" => {
            let data = fs::read(path)?;
            let mut extractor = PdfExtractor::new();
            extractor.load(&data)?;
            debug!("PDF has {} pages", extractor.page_count());

            let text = extractor.extract_text()?;
            if text.trim().len() < config.pdf.min_text_length {
                warn!(
                    "{} has only {} chars of embedded text; fields will likely default",
                    path.display(),
                    text.trim().len()
                );
            }
            Ok(text)
        }
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}
