use thiserror::Error;

/// Errors from the data-loading boundary. The engine itself never raises:
/// malformed definitions clamp to degenerate behavior and inconsistent
/// ledger rows are excluded from every query.
#[derive(Debug, Error)]
pub enum LedgerParseError {
    // IO-related.
    #[error("error reading file")]
    Read(#[source] std::io::Error),

    // Parsing-related.
    #[error("invalid CSV format")]
    InvalidCsv(#[source] csv::Error),
    #[error("invalid CSV content: {details}")]
    InvalidCsvContent { details: String },
    #[error("invalid {ron_type} (invalid RON format)")]
    InvalidRon {
        ron_type: &'static str,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid JSON snapshot")]
    InvalidJson(#[source] serde_json::Error),
    #[error("invalid ISO date: {date}")]
    InvalidIsoDate { date: String },
    #[error("invalid ISO timestamp: {value}")]
    InvalidIsoTimestamp { value: String },
    #[error("invalid amount: '{value}'")]
    InvalidAmount { value: String },
}
