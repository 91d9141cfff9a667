//! Id assignment for newly created expense records.

use std::sync::Mutex;

use spendlog_domain::ExpenseId;

use crate::time::{Clock, SystemClock};

/// Source of fresh record identifiers, injected so `add` stays deterministic
/// in tests.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> ExpenseId;
}

/// Production source deriving ids from the current time in milliseconds.
///
/// Two inserts within the same millisecond bump past the previous id, so ids
/// stay unique for the lifetime of the source even under rapid inserts.
pub struct SystemIdSource {
    clock: Box<dyn Clock>,
    last: Mutex<ExpenseId>,
}

impl SystemIdSource {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            last: Mutex::new(0),
        }
    }
}

impl Default for SystemIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SystemIdSource {
    fn next_id(&self) -> ExpenseId {
        let mut last = self.last.lock().expect("lock id state");
        let candidate = self.clock.now().timestamp_millis();
        let next = if candidate > *last { candidate } else { *last + 1 };
        *last = next;
        next
    }
}

/// Deterministic counter starting at 1, for tests.
pub struct SequentialIdSource {
    next: Mutex<ExpenseId>,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self {
            next: Mutex::new(1),
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> ExpenseId {
        let mut next = self.next.lock().expect("lock id state");
        let id = *next;
        *next += 1;
        id
    }
}
