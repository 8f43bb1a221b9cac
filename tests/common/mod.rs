#![allow(dead_code)]

use std::{fs, path::PathBuf, sync::Mutex};

use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Mutex<Vec<TempDir>> = Mutex::new(Vec::new());

/// Payload in the shape returned by the backend `/summary` endpoint.
pub const SUMMARY_PAYLOAD: &str = r#"{
    "total_income": 1250.0,
    "total_expenses": 420.4,
    "total_balance": 829.6,
    "budgets": [{"name": "groceries", "amount": 300.0, "spent": 120.0}],
    "savings": [],
    "incomeTransactions": [
        {"amount": 50.0, "date": "2024-03-01T00:00:00", "type": "income"},
        {"amount": 1000.0, "date": "2024-03-11T09:15:00.250000", "type": "income"},
        {"amount": 200.0, "date": "2023-07-04T12:00:00", "type": "income"}
    ],
    "expenseTransactions": [
        {"amount": 20.0, "date": "2024-03-01T18:30:00", "type": "expense"},
        {"amount": 400.4, "date": "2024-03-29T08:00:00", "type": "expense"}
    ]
}"#;

/// Writes `contents` to a file inside a temporary directory kept alive for the run.
pub fn write_payload(name: &str, contents: &str) -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join(name);
    fs::write(&path, contents).expect("write payload");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}
