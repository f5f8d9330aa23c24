pub mod analyzer;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod strategy;

use std::io::{Read, Write};

use analyzer::analyze_sales_data;
use error::Result;
use models::Dataset;
use output::{write_report, OutputFormat};
use strategy::AnalyzeOptions;

/// Read a JSON dataset, analyze it and write the seller report
pub fn process_sales_data<R: Read, W: Write>(
    reader: R,
    writer: W,
    options: &AnalyzeOptions,
    format: OutputFormat,
) -> Result<()> {
    let dataset = Dataset::from_reader(reader)?;

    let reports = analyze_sales_data(&dataset, options)?;

    write_report(&reports, writer, format)?;

    Ok(())
}
