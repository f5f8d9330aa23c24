use std::io::Write;

use clap::ValueEnum;

use crate::error::Result;
use crate::models::report::CsvRow;
use crate::models::SellerReport;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Write the report as a pretty-printed JSON array
pub fn write_report_json<W: Write>(reports: &[SellerReport], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write the report as CSV, one row per seller in rank order
pub fn write_report_csv<W: Write>(reports: &[SellerReport], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for report in reports {
        csv_writer.serialize(CsvRow(report))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the report in the requested format
pub fn write_report<W: Write>(reports: &[SellerReport], writer: W, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_report_json(reports, writer),
        OutputFormat::Csv => write_report_csv(reports, writer),
    }
}
