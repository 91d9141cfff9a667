//! The expense repository: the only mutator of the persisted slot.

use std::cmp::Reverse;

use spendlog_domain::{Expense, ExpenseDraft, ExpenseId};
use tracing::warn;

use crate::{id::IdSource, storage::ExpenseStorage, CoreError};

/// Callback invoked whenever a storage failure is swallowed.
pub type StorageFailureHook = Box<dyn Fn(&CoreError) + Send + Sync>;

/// Repository over the persisted expense slot.
///
/// Every operation returns the authoritative list ordered by date
/// descending; records sharing a date keep a stable relative order within a
/// single call. Storage failures never reach the caller: a failed or
/// unparseable load reads as an empty history, and a failed save leaves the
/// in-memory result authoritative for the rest of the session. Swallowed
/// failures are logged and reported to the optional failure hook.
pub struct ExpenseService {
    storage: Box<dyn ExpenseStorage>,
    ids: Box<dyn IdSource>,
    failure_hook: Option<StorageFailureHook>,
}

impl ExpenseService {
    pub fn new(storage: Box<dyn ExpenseStorage>, ids: Box<dyn IdSource>) -> Self {
        Self {
            storage,
            ids,
            failure_hook: None,
        }
    }

    /// Registers a callback observing swallowed storage failures.
    pub fn with_failure_hook(mut self, hook: StorageFailureHook) -> Self {
        self.failure_hook = Some(hook);
        self
    }

    /// Returns the expense history, newest date first. Does not mutate storage.
    pub fn list(&self) -> Vec<Expense> {
        let mut records = self.load_or_empty();
        sort_newest_first(&mut records);
        records
    }

    /// Creates a record from the submitted draft, persists the full list, and
    /// returns the updated history.
    ///
    /// The draft is expected to have passed `check_draft` at the form
    /// boundary; this method does not re-validate. A malformed amount is
    /// coerced to a non-number rather than rejected, and a missing date falls
    /// back to the epoch date.
    pub fn add(&self, draft: ExpenseDraft) -> Vec<Expense> {
        let mut records = self.list();
        let expense = Expense {
            id: self.ids.next_id(),
            amount: draft.parsed_amount().unwrap_or(f64::NAN),
            category: draft.category,
            date: draft.date.unwrap_or_default(),
            summary: draft.summary,
        };
        records.insert(0, expense);
        self.persist(&records);
        sort_newest_first(&mut records);
        records
    }

    /// Removes the record with the given id, persists the remainder, and
    /// returns the updated history. Unknown ids are a no-op, not an error.
    pub fn delete(&self, id: ExpenseId) -> Vec<Expense> {
        let mut records = self.list();
        records.retain(|expense| expense.id != id);
        self.persist(&records);
        records
    }

    fn load_or_empty(&self) -> Vec<Expense> {
        match self.storage.load() {
            Ok(records) => records,
            Err(err) => {
                warn!("failed to read expense slot, treating as empty: {err}");
                self.observe(&err);
                Vec::new()
            }
        }
    }

    fn persist(&self, records: &[Expense]) {
        if let Err(err) = self.storage.save(records) {
            warn!("failed to write expense slot, keeping in-memory state: {err}");
            self.observe(&err);
        }
    }

    fn observe(&self, err: &CoreError) {
        if let Some(hook) = &self.failure_hook {
            hook(err);
        }
    }
}

fn sort_newest_first(records: &mut [Expense]) {
    records.sort_by_key(|expense| Reverse(expense.date));
}
