use super::budget::BudgetEntry;
use crate::error::Result;

/// Storage for the entries shown in the budget.
///
/// Implementations keep entries for the lifetime of the process only.
pub trait EntryStore {
    fn store(&mut self, entry: BudgetEntry) -> Result<()>;
    fn remove(&mut self, id: u32) -> Result<Option<BudgetEntry>>;
    /// All entries in the order they were first stored.
    fn all_entries(&self) -> Result<Vec<BudgetEntry>>;
}

pub type EntryStoreBox = Box<dyn EntryStore>;
