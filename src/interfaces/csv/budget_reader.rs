use crate::domain::budget::EntryKind;
use crate::error::{LoanError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a budget file: `kind, name, amount`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct EntryRecord {
    pub kind: EntryKind,
    pub name: String,
    pub amount: String,
}

/// Reads budget entries from a CSV source.
pub struct EntryReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EntryReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn entries(self) -> impl Iterator<Item = Result<EntryRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LoanError::from))
    }
}
