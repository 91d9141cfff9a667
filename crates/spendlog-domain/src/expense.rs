//! Domain models for logged expenses and the drafts that create them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a record when it is created. Derived from the
/// creation time in milliseconds, unique across the persisted collection.
pub type ExpenseId = i64;

/// Fixed category choices offered by the expense form.
pub const CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Other",
];

/// One logged spending event, exactly as it lives in the persisted slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub summary: String,
}

impl Expense {
    pub fn new(
        id: ExpenseId,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            date,
            summary: summary.into(),
        }
    }
}

/// Raw form payload submitted by the presentation layer.
///
/// `amount` keeps the text the user typed; numeric coercion happens when the
/// repository accepts the draft. `date` is `None` until the user picks one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: String,
    pub date: Option<NaiveDate>,
    pub summary: String,
}

impl ExpenseDraft {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        date: Option<NaiveDate>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            date,
            summary: summary.into(),
        }
    }

    /// The amount as a number, when the typed text parses as one.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount.trim().parse::<f64>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_layout_has_flat_fields_and_iso_date() {
        let expense = Expense::new(
            1704844800000,
            50.5,
            "Food",
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            "Lunch",
        );
        let json = serde_json::to_value(&expense).expect("serialize expense");
        assert_eq!(json["id"], 1704844800000i64);
        assert_eq!(json["amount"], 50.5);
        assert_eq!(json["category"], "Food");
        assert_eq!(json["date"], "2024-01-10");
        assert_eq!(json["summary"], "Lunch");
    }

    #[test]
    fn parsed_amount_accepts_decimals_and_rejects_text() {
        let mut draft = ExpenseDraft::new("50.5", "Food", None, "");
        assert_eq!(draft.parsed_amount(), Some(50.5));
        draft.amount = " 20 ".into();
        assert_eq!(draft.parsed_amount(), Some(20.0));
        draft.amount = "abc".into();
        assert_eq!(draft.parsed_amount(), None);
        draft.amount.clear();
        assert_eq!(draft.parsed_amount(), None);
    }
}
