use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("Invalid principal {0}: must be a finite, non-negative amount")]
    InvalidPrincipal(f64),
    #[error("Invalid interest rate {0}%: must be a finite, non-negative percentage")]
    InvalidRate(f64),
    #[error("Invalid term {0}: at least one payment period is required")]
    InvalidTerm(f64),
    #[error("Payment is too large to represent for these loan terms")]
    PaymentOverflow,
    #[error("Unknown compounding convention '{0}' (expected Daily or Monthly)")]
    UnknownCompounding(String),
    #[error("Entry {0} not found")]
    EntryNotFound(u32),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, LoanError>;
