// reset; cargo run -- ./intake/First_Bank_Individual-Borrower_Jan2024.xlsx
// reset; cargo run -- --json ./intake/First_Bank_Credit-Information_Jan2024.xlsx

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use cleaner_lib::{CleanerConfig, process_uploaded_file};

#[derive(Parser)]
#[command(name = "crb-cleaner")]
#[command(about = "Clean and validate credit-bureau submission workbooks")]
#[command(version)]
struct Args {
    /// Workbook files to process. Each filename must contain one of the
    /// document-type markers (e.g. Individual-Borrower, Credit-Information)
    /// and end in .xlsx.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Destination folder for pipe-delimited exports
    #[arg(long, default_value = "processed")]
    processed_dir: PathBuf,

    /// Destination folder for quarantine workbooks
    #[arg(long, default_value = "data quality")]
    data_quality_dir: PathBuf,

    /// Print each run report as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = CleanerConfig {
        processed_dir: args.processed_dir,
        data_quality_dir: args.data_quality_dir,
    };
    config.ensure_dirs()?;

    let mut failures = 0usize;
    for file in &args.files {
        println!("Processing file: {}", file.display());
        let started = Instant::now();
        match process_uploaded_file(file, &config) {
            Ok(report) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    for line in report.summary_lines() {
                        println!("   {line}");
                    }
                }
                println!(
                    "✅ {} processed successfully in {:.2} seconds",
                    file.display(),
                    started.elapsed().as_secs_f64()
                );
            }
            Err(e) => {
                eprintln!("❌ {}: {e}", file.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("❌ {failures} file(s) failed");
        std::process::exit(1);
    }
    Ok(())
}
