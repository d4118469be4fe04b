//! Application layer: the collaborators that sit between user input and the
//! domain.
//!
//! `LoanCalculator` sanitizes loan forms and prices them; `BudgetLedger` owns
//! the budget entries and keeps their totals in step.

pub mod calculator;
pub mod ledger;
