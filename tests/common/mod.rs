//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use todo_manager::{TaskStore, TodoConsole};

/// Build a timestamp at 09:00 on the given day
pub fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

/// Fixed clock used by deterministic stores
pub fn fixed_now() -> NaiveDateTime {
    at(2025, 3, 10)
}

/// Fixed clock sitting on the last day of a month
pub fn month_end_now() -> NaiveDateTime {
    at(2024, 1, 31)
}

/// Create an empty store on the fixed clock
pub fn get_test_store() -> TaskStore {
    TaskStore::with_clock(fixed_now)
}

/// Create a store on the fixed clock holding one task per title
pub fn store_with_titles(titles: &[&str]) -> TaskStore {
    let mut store = get_test_store();
    for title in titles {
        store.add(Some(*title), None).unwrap();
    }
    store
}

/// Create a console around `store_with_titles`
pub fn console_with_titles(titles: &[&str]) -> TodoConsole {
    TodoConsole::new(store_with_titles(titles))
}

/// Extract the task id from an "(ID: N)" console response
pub fn extract_id_from_response(response: &str) -> u32 {
    let start = response.rfind("(ID: ").expect("response carries an id") + 5;
    let rest = &response[start..];
    let end = rest.find(')').expect("id is closed by a parenthesis");
    rest[..end].parse().unwrap()
}
