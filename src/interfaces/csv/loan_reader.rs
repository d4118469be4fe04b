use crate::application::calculator::LoanForm;
use crate::domain::loan::LoanKind;
use crate::error::{LoanError, Result};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One row of a batch file: `kind, principal, rate, term, compounding`.
///
/// Numeric columns are kept as text so they go through the same sanitizing
/// as interactive input. An empty cell is empty text (and so sanitizes to 0);
/// only a column missing from a short row is `None` and takes the default.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct LoanRequest {
    pub kind: LoanKind,
    #[serde(default, deserialize_with = "cell_text")]
    pub principal: Option<String>,
    #[serde(default, deserialize_with = "cell_text")]
    pub rate: Option<String>,
    #[serde(default, deserialize_with = "cell_text")]
    pub term: Option<String>,
    #[serde(default, deserialize_with = "cell_text")]
    pub compounding: Option<String>,
}

fn cell_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl LoanRequest {
    pub fn form(&self) -> LoanForm {
        LoanForm {
            amount: self.principal.clone(),
            annual_rate_percent: self.rate.clone(),
            term: self.term.clone(),
            compounding: self.compounding.clone(),
        }
    }
}

/// Reads loan requests from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and tolerating short rows, and
/// yields requests lazily.
pub struct LoanRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> LoanRequestReader<R> {
    /// Creates a new `LoanRequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn requests(self) -> impl Iterator<Item = Result<LoanRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LoanError::from))
    }
}
