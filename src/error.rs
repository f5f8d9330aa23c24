use thiserror::Error;

/// Errors that can occur while analyzing sales data
/// All of them abort the current analysis; no partial report is produced
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Missing strategy: {0}")]
    MissingStrategy(String),

    #[error("Invalid strategy type: '{0}' is not a known strategy")]
    InvalidStrategyType(String),

    #[error("Purchase record references unknown seller '{0}'")]
    UnknownSeller(String),

    #[error("Line item references unknown product '{0}'")]
    UnknownProduct(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
