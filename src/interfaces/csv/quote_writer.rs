use crate::application::calculator::LoanQuote;
use crate::domain::compounding::CompoundingConvention;
use crate::domain::loan::LoanKind;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct QuoteRecord {
    kind: LoanKind,
    principal: f64,
    rate: f64,
    periods: f64,
    compounding: CompoundingConvention,
    monthly_payment: String,
    total_cost: String,
}

impl From<&LoanQuote> for QuoteRecord {
    fn from(quote: &LoanQuote) -> Self {
        Self {
            kind: quote.kind,
            principal: quote.parameters.principal(),
            rate: quote.parameters.annual_rate_percent(),
            periods: quote.parameters.term_in_payment_periods(),
            compounding: quote.parameters.compounding(),
            monthly_payment: format!("{:.2}", quote.result.monthly_payment),
            total_cost: format!("{:.2}", quote.result.total_cost),
        }
    }
}

/// Writes quotes as CSV with money columns rounded to cents.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_quote(&mut self, quote: &LoanQuote) -> Result<()> {
        self.writer.serialize(QuoteRecord::from(quote))?;
        Ok(())
    }

    pub fn write_quotes<'a>(&mut self, quotes: impl IntoIterator<Item = &'a LoanQuote>) -> Result<()> {
        for quote in quotes {
            self.write_quote(quote)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
