use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("amount must be a finite number, got {amount}")]
    InvalidAmount { amount: f64 },
    #[error("date range requires both start_date and end_date, {missing} is missing")]
    MissingRangeBound { missing: &'static str },
    #[error("at least one filter criterion is required")]
    NoFilterCriteria,
    #[error("no fields to update were supplied")]
    NoUpdateFields,
}

impl ValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidAmount { .. } => "invalid_amount",
            ValidationError::MissingRangeBound { .. } => "missing_range_bound",
            ValidationError::NoFilterCriteria => "no_filter_criteria",
            ValidationError::NoUpdateFields => "no_update_fields",
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode category document: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum CategoryError {
    #[error("category file {} not found", .path.display())]
    Missing { path: PathBuf },
    #[error("failed to read category file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("category file {} is malformed: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV parse error on line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },
    #[error("invalid row on line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<rusqlite::Error> for ImportError {
    fn from(err: rusqlite::Error) -> Self {
        ImportError::Store(StoreError::Database(err))
    }
}
