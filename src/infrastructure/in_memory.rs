use crate::domain::budget::BudgetEntry;
use crate::domain::ports::EntryStore;
use crate::error::Result;
use std::collections::BTreeMap;

/// An in-memory store for budget entries.
///
/// Entries are keyed by id in a `BTreeMap`; since the ledger hands out ids in
/// increasing order, iteration order is insertion order.
#[derive(Default, Clone)]
pub struct InMemoryEntryStore {
    entries: BTreeMap<u32, BudgetEntry>,
}

impl InMemoryEntryStore {
    /// Creates a new, empty in-memory entry store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for InMemoryEntryStore {
    fn store(&mut self, entry: BudgetEntry) -> Result<()> {
        self.entries.insert(entry.id, entry);
        Ok(())
    }

    fn remove(&mut self, id: u32) -> Result<Option<BudgetEntry>> {
        Ok(self.entries.remove(&id))
    }

    fn all_entries(&self) -> Result<Vec<BudgetEntry>> {
        Ok(self.entries.values().cloned().collect())
    }
}
