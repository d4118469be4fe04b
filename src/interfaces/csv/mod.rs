//! CSV adapters for batch loan requests, budget entries and quote output.

pub mod budget_reader;
pub mod loan_reader;
pub mod quote_writer;
