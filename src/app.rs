// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod progress;
pub mod scanner;
pub mod writer;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use std::path::PathBuf;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::models::ScanConfig;
use self::scanner::Scanner;
use self::writer::OutputWriter;

const NO_FILES_MESSAGE: &str = "No files found matching the specified criteria.";

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    let args = Cli::parse();
    let config = resolve_config(args)?;
    consolidate(&config)?;
    Ok(())
}

/// Count → Collect → Write → Summarize.
///
/// Returns the path of the consolidated file, or `None` when nothing matched
/// or the output could not be written. Write failures are logged, not raised.
pub fn consolidate(config: &ScanConfig) -> Result<Option<PathBuf>> {
    consolidate_at(config, &Local::now().naive_local())
}

/// Same as [`consolidate`], naming the output after `started`.
pub fn consolidate_at(config: &ScanConfig, started: &NaiveDateTime) -> Result<Option<PathBuf>> {
    println!("Scanning directories from... {}", config.start_dir.display());

    let scanner = Scanner::new(config)?;
    let total_files = scanner.count_matching();
    if total_files == 0 {
        println!("{}", NO_FILES_MESSAGE);
        return Ok(None);
    }
    println!("Found {} files to process", total_files);

    let (records, summary) = scanner.collect(total_files);
    if records.is_empty() {
        println!("{}", NO_FILES_MESSAGE);
        return Ok(None);
    }

    println!("\nWriting {} files to output...", records.len());
    let writer =
        OutputWriter::new(&config.output_dir, config.prefix.clone()).with_quiet(config.quiet);
    match writer.write_at(&records, started) {
        Ok(path) => {
            print!("{}", OutputGenerator::generate_summary(&summary, &records));
            println!("\nCreated consolidated file: {}", path.display());
            Ok(Some(path))
        }
        Err(err) => {
            log::error!("Error writing output file: {:#}", err);
            Ok(None)
        }
    }
}
