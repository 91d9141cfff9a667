//! Filter specifications applied to the expense history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expense::Expense;

/// Sentinel option in the category dropdown that matches every record.
pub const CATEGORY_FILTER_ALL: &str = "All";

/// What the history view is currently narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ExpenseFilter {
    #[default]
    All,
    Category(String),
    Date(NaiveDate),
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            ExpenseFilter::All => true,
            ExpenseFilter::Category(name) if name == CATEGORY_FILTER_ALL => true,
            ExpenseFilter::Category(name) => expense.category == *name,
            ExpenseFilter::Date(date) => expense.date == *date,
        }
    }
}
