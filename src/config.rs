use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::strategy::{bonus_strategy, revenue_strategy, AnalyzeOptions};

/// Seller performance report: revenue, profit, bonus and top products
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// JSON dataset with sellers, products, purchase_records and customers
    pub input: PathBuf,

    /// Output format of the report
    #[arg(long, value_enum, env = "SALES_REPORT_FORMAT", default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Revenue policy applied to each line item
    #[arg(long, env = "SALES_REVENUE_STRATEGY", default_value = "simple")]
    pub revenue_strategy: String,

    /// Bonus policy applied to each ranked seller
    #[arg(long, env = "SALES_BONUS_STRATEGY", default_value = "profit")]
    pub bonus_strategy: String,
}

impl Config {
    /// Resolve the configured strategy names into analyzer options
    pub fn analyze_options(&self) -> Result<AnalyzeOptions> {
        Ok(AnalyzeOptions {
            calculate_revenue: Some(revenue_strategy(&self.revenue_strategy)?),
            calculate_bonus: Some(bonus_strategy(&self.bonus_strategy)?),
        })
    }
}
