//! Form-boundary validation for submitted expense drafts.
//!
//! The repository trusts its input; these checks run at the presentation
//! boundary before a draft reaches `ExpenseService::add`.

use chrono::NaiveDate;
use spendlog_domain::ExpenseDraft;
use thiserror::Error;

/// One rejected aspect of a submitted draft, worded for the form field it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftIssue {
    #[error("Please enter a valid positive amount.")]
    InvalidAmount,
    #[error("Please select a category.")]
    MissingCategory,
    #[error("Please select a date.")]
    MissingDate,
    #[error("Expense date cannot be in the future.")]
    FutureDate,
}

/// Checks a draft against the business rules, returning every issue found so
/// the form can flag each offending field at once.
pub fn check_draft(draft: &ExpenseDraft, today: NaiveDate) -> Vec<DraftIssue> {
    let mut issues = Vec::new();
    match draft.parsed_amount() {
        Some(amount) if amount > 0.0 => {}
        _ => issues.push(DraftIssue::InvalidAmount),
    }
    if draft.category.trim().is_empty() {
        issues.push(DraftIssue::MissingCategory);
    }
    match draft.date {
        None => issues.push(DraftIssue::MissingDate),
        Some(date) if date > today => issues.push(DraftIssue::FutureDate),
        Some(_) => {}
    }
    issues
}
