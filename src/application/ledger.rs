use crate::domain::budget::{BudgetEntry, BudgetTotals, EntryKind, Money};
use crate::domain::ports::EntryStoreBox;
use crate::error::{LoanError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Owns the budget entries and the running totals derived from them.
///
/// Every add or remove updates the store and the totals in the same call, so
/// `totals()` always equals the sum of the entries currently stored.
pub struct BudgetLedger {
    store: EntryStoreBox,
    totals: BudgetTotals,
    next_id: u32,
}

impl BudgetLedger {
    /// Creates an empty ledger backed by `store`.
    pub fn new(store: EntryStoreBox) -> Self {
        Self {
            store,
            totals: BudgetTotals::default(),
            next_id: 1,
        }
    }

    pub fn add_income(&mut self, name: &str, amount: &str) -> Result<u32> {
        self.add(EntryKind::Income, name, amount)
    }

    pub fn add_expense(&mut self, name: &str, amount: &str) -> Result<u32> {
        self.add(EntryKind::Expense, name, amount)
    }

    /// Adds an entry from form text and returns its id.
    ///
    /// Nothing changes when the name is blank or the amount is not a number.
    pub fn add(&mut self, kind: EntryKind, name: &str, amount: &str) -> Result<u32> {
        let amount = Decimal::from_str(amount.trim()).map_err(|_| {
            LoanError::ValidationError(format!("Amount '{}' is not a number", amount.trim()))
        })?;
        self.add_entry(kind, name, Money::new(amount))
    }

    pub fn add_entry(&mut self, kind: EntryKind, name: &str, amount: Money) -> Result<u32> {
        let entry = BudgetEntry::new(self.next_id, kind, name, amount)?;
        let id = entry.id;

        self.store.store(entry)?;
        self.totals.apply_delta(kind, amount);
        self.next_id += 1;

        tracing::debug!(id, ?kind, amount = %amount.value(), "budget entry added");
        Ok(id)
    }

    /// Removes an entry and takes its amount back out of the totals.
    pub fn remove(&mut self, id: u32) -> Result<BudgetEntry> {
        let entry = self.store.remove(id)?.ok_or(LoanError::EntryNotFound(id))?;
        self.totals.apply_delta(entry.kind, -entry.amount);

        tracing::debug!(id, kind = ?entry.kind, "budget entry removed");
        Ok(entry)
    }

    pub fn entries(&self) -> Result<Vec<BudgetEntry>> {
        self.store.all_entries()
    }

    pub fn totals(&self) -> BudgetTotals {
        self.totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryEntryStore;
    use rust_decimal_macros::dec;

    fn ledger() -> BudgetLedger {
        BudgetLedger::new(Box::new(InMemoryEntryStore::new()))
    }

    #[test]
    fn test_totals_follow_adds_and_removes() {
        let mut ledger = ledger();

        let salary = ledger.add_income("Salary", "3000").unwrap();
        ledger.add_income("Tutoring", "250.50").unwrap();
        let gym = ledger.add_expense("Gym", "45.99").unwrap();
        ledger.add_expense("Streaming", "15.49").unwrap();

        let totals = ledger.totals();
        assert_eq!(totals.monthly_income, Money::new(dec!(3250.50)));
        assert_eq!(totals.monthly_expenses, Money::new(dec!(61.48)));

        ledger.remove(gym).unwrap();
        ledger.remove(salary).unwrap();

        let totals = ledger.totals();
        assert_eq!(totals.monthly_income, Money::new(dec!(250.50)));
        assert_eq!(totals.monthly_expenses, Money::new(dec!(15.49)));
        assert_eq!(totals.net(), Money::new(dec!(235.01)));

        let names: Vec<String> = ledger
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Tutoring", "Streaming"]);
    }

    #[test]
    fn test_invalid_entries_leave_ledger_untouched() {
        let mut ledger = ledger();

        assert!(matches!(
            ledger.add_income("Salary", "lots"),
            Err(LoanError::ValidationError(_))
        ));
        assert!(matches!(
            ledger.add_expense("", "10"),
            Err(LoanError::ValidationError(_))
        ));

        assert!(ledger.entries().unwrap().is_empty());
        assert_eq!(ledger.totals(), BudgetTotals::default());
    }

    #[test]
    fn test_remove_unknown_entry() {
        let mut ledger = ledger();
        let id = ledger.add_income("Salary", "100").unwrap();
        ledger.remove(id).unwrap();

        assert!(matches!(ledger.remove(id), Err(LoanError::EntryNotFound(_))));
        assert_eq!(ledger.totals().monthly_income, Money::ZERO);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut ledger = ledger();
        let first = ledger.add_expense("Phone", "30").unwrap();
        ledger.remove(first).unwrap();
        let second = ledger.add_expense("Phone", "30").unwrap();
        assert_ne!(first, second);
    }
}
