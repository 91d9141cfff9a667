//! Storage abstraction for the persisted expense slot.

use std::sync::Mutex;

use spendlog_domain::Expense;

use crate::CoreError;

/// Abstraction over persistence backends holding the single expense slot.
///
/// The slot always contains the whole collection: every save overwrites it,
/// there is no partial update, no envelope, and no versioning.
pub trait ExpenseStorage: Send + Sync {
    /// Returns the persisted records, or an empty list when no slot exists yet.
    fn load(&self) -> Result<Vec<Expense>, CoreError>;

    /// Overwrites the slot with the full collection.
    fn save(&self, records: &[Expense]) -> Result<(), CoreError>;
}

/// In-memory backend, the drop-in test double for the JSON backend.
#[derive(Debug, Default)]
pub struct MemoryExpenseStorage {
    records: Mutex<Vec<Expense>>,
}

impl MemoryExpenseStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored records, in slot order.
    pub fn snapshot(&self) -> Vec<Expense> {
        self.records.lock().expect("lock slot").clone()
    }
}

impl ExpenseStorage for MemoryExpenseStorage {
    fn load(&self) -> Result<Vec<Expense>, CoreError> {
        Ok(self.records.lock().expect("lock slot").clone())
    }

    fn save(&self, records: &[Expense]) -> Result<(), CoreError> {
        *self.records.lock().expect("lock slot") = records.to_vec();
        Ok(())
    }
}
