//! Aggregated totals derived from the expense history.

use std::collections::BTreeMap;

use serde::Serialize;

/// Bucket name used for records whose category is empty.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Grand total plus the per-category breakdown. Derived data, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_amount: f64,
    pub category_totals: BTreeMap<String, f64>,
}

impl Summary {
    /// Category totals ordered by amount descending, the order the summary
    /// panel and the pie chart consume them in.
    pub fn ranked_categories(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = self
            .category_totals
            .iter()
            .map(|(name, total)| (name.clone(), *total))
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.category_totals.is_empty()
    }
}
