use crate::error::{LoanError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub};

/// A monthly amount of money in the budget.
///
/// Wraps `rust_decimal::Decimal` so budget sums never pick up binary
/// floating-point drift as entries are added and removed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A source of monthly income.
    Income,
    /// A recurring expense such as a subscription.
    #[serde(alias = "subscription")]
    Expense,
}

/// A named income source or recurring expense.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct BudgetEntry {
    pub id: u32,
    pub kind: EntryKind,
    pub name: String,
    pub amount: Money,
}

impl BudgetEntry {
    /// Builds an entry, refusing blank names.
    pub fn new(id: u32, kind: EntryKind, name: &str, amount: Money) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LoanError::ValidationError(
                "Entry name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            kind,
            name: name.to_string(),
            amount,
        })
    }
}

/// Running monthly income and expense totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BudgetTotals {
    pub monthly_income: Money,
    pub monthly_expenses: Money,
}

impl BudgetTotals {
    pub fn apply_income_delta(&mut self, delta: Money) {
        self.monthly_income += delta;
    }

    pub fn apply_expense_delta(&mut self, delta: Money) {
        self.monthly_expenses += delta;
    }

    /// Applies the delta to whichever side of the budget `kind` names.
    pub fn apply_delta(&mut self, kind: EntryKind, delta: Money) {
        match kind {
            EntryKind::Income => self.apply_income_delta(delta),
            EntryKind::Expense => self.apply_expense_delta(delta),
        }
    }

    /// What is left each month after recurring expenses.
    pub fn net(&self) -> Money {
        self.monthly_income - self.monthly_expenses
    }
}
