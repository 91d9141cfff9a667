#![doc(test(attr(deny(warnings))))]

//! spendlog-core
//!
//! Business logic for the expense tracker: the expense repository, derived
//! view computation, draft validation, and the storage/clock/id abstractions
//! they depend on. No rendering, no filesystem layout knowledge.

pub mod error;
pub mod expense_service;
pub mod id;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod validation;

pub use error::CoreError;
pub use expense_service::{ExpenseService, StorageFailureHook};
pub use id::{IdSource, SequentialIdSource, SystemIdSource};
pub use storage::{ExpenseStorage, MemoryExpenseStorage};
pub use summary_service::SummaryService;
pub use time::{Clock, SystemClock};
pub use validation::{check_draft, DraftIssue};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("spendlog_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("spendlog core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
