//! spendlog-domain
//!
//! Pure domain models (Expense, drafts, filters, summaries).
//! No I/O, no storage. Only data types and the small logic they carry.

pub mod expense;
pub mod filter;
pub mod summary;

pub use expense::*;
pub use filter::*;
pub use summary::*;
