//! Pure derived views over the expense history: totals and filtered subsets.

use spendlog_domain::{Expense, ExpenseFilter, Summary, UNCATEGORIZED};

pub struct SummaryService;

impl SummaryService {
    /// Computes the grand total and the per-category breakdown. Records with
    /// an empty category land in the `Uncategorized` bucket.
    pub fn summarize(records: &[Expense]) -> Summary {
        let mut summary = Summary::default();
        for expense in records {
            summary.total_amount += expense.amount;
            let category = if expense.category.is_empty() {
                UNCATEGORIZED
            } else {
                expense.category.as_str()
            };
            *summary
                .category_totals
                .entry(category.to_string())
                .or_insert(0.0) += expense.amount;
        }
        summary
    }

    /// Returns the subset matching `filter`, preserving relative order.
    pub fn filter(records: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
        records
            .iter()
            .filter(|expense| filter.matches(expense))
            .cloned()
            .collect()
    }
}
