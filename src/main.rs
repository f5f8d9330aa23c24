use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use sales_analytics::config::Config;
use sales_analytics::process_sales_data;

fn main() -> Result<()> {
    // A missing .env file is fine, settings then come from flags and the environment
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::parse();

    let options = config
        .analyze_options()
        .context("Failed to resolve revenue/bonus strategies")?;

    let file = File::open(&config.input)
        .with_context(|| format!("Failed to open input file '{}'", config.input.display()))?;

    process_sales_data(BufReader::new(file), io::stdout().lock(), &options, config.format)
        .context("Failed to analyze sales data and write report")?;

    Ok(())
}
