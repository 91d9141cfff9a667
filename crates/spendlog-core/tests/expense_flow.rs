use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use chrono::NaiveDate;
use spendlog_core::{
    CoreError, ExpenseService, ExpenseStorage, MemoryExpenseStorage, SequentialIdSource,
    SummaryService,
};
use spendlog_domain::{Expense, ExpenseDraft, ExpenseFilter};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn add_list_summarize_scenario() {
    let service = ExpenseService::new(
        Box::new(MemoryExpenseStorage::new()),
        Box::new(SequentialIdSource::new()),
    );

    service.add(ExpenseDraft::new(
        "50.5",
        "Food",
        Some(date(2024, 1, 10)),
        "Lunch",
    ));
    let listed = service.add(ExpenseDraft::new(
        "20",
        "Transport",
        Some(date(2024, 1, 12)),
        "",
    ));

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].category, "Transport");
    assert_eq!(listed[0].amount, 20.0);
    assert_eq!(listed[0].date, date(2024, 1, 12));
    assert_eq!(listed[1].category, "Food");
    assert_eq!(listed[1].amount, 50.5);
    assert_eq!(listed[1].date, date(2024, 1, 10));

    let summary = SummaryService::summarize(&listed);
    assert_eq!(summary.total_amount, 70.5);
    assert_eq!(summary.category_totals["Transport"], 20.0);
    assert_eq!(summary.category_totals["Food"], 50.5);

    let food_only = SummaryService::filter(&listed, &ExpenseFilter::Category("Food".into()));
    assert_eq!(food_only.len(), 1);
    assert_eq!(food_only[0].category, "Food");
}

struct BrokenStorage;

impl ExpenseStorage for BrokenStorage {
    fn load(&self) -> Result<Vec<Expense>, CoreError> {
        Err(CoreError::Storage("slot unreadable".into()))
    }

    fn save(&self, _records: &[Expense]) -> Result<(), CoreError> {
        Err(CoreError::Storage("slot unwritable".into()))
    }
}

#[test]
fn storage_failures_are_swallowed_and_observed() {
    let failures = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&failures);
    let service = ExpenseService::new(Box::new(BrokenStorage), Box::new(SequentialIdSource::new()))
        .with_failure_hook(Box::new(move |_err| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

    assert!(service.list().is_empty());

    // add still returns the in-memory result even though both the load and
    // the save behind it fail.
    let listed = service.add(ExpenseDraft::new(
        "12",
        "Bills",
        Some(date(2024, 1, 5)),
        "",
    ));
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].amount, 12.0);

    // one load failure from list(), then a load and a save failure from add().
    assert_eq!(failures.load(Ordering::SeqCst), 3);
}

#[test]
fn memory_storage_round_trips_through_the_service() {
    let storage = Box::new(MemoryExpenseStorage::new());
    let service = ExpenseService::new(storage, Box::new(SequentialIdSource::new()));

    service.add(ExpenseDraft::new("10", "Food", Some(date(2024, 1, 10)), ""));
    service.add(ExpenseDraft::new("20", "Food", Some(date(2024, 1, 11)), ""));
    let listed = service.list();
    let deleted = service.delete(listed[1].id);

    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].date, date(2024, 1, 11));
    assert_eq!(service.list(), deleted);
}
