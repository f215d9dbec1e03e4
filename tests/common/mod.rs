#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use finance_core::core::FixedClock;
use finance_core::domain::{Transaction, TransactionDraft, TransactionId, TransactionKind};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Fresh directory usable as `FINANCE_CORE_HOME`.
pub fn isolated_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn clock_on(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock::on(date(y, m, d))
}

pub fn txn(id: &str, kind: TransactionKind, category: &str, amount: f64, on: &str) -> Transaction {
    let on = NaiveDate::parse_from_str(on, "%Y-%m-%d").expect("iso date");
    Transaction::from_draft(
        TransactionId::new(id),
        TransactionDraft::new(kind, category, amount, on),
    )
}

pub fn income(id: &str, category: &str, amount: f64, on: &str) -> Transaction {
    txn(id, TransactionKind::Income, category, amount, on)
}

pub fn expense(id: &str, category: &str, amount: f64, on: &str) -> Transaction {
    txn(id, TransactionKind::Expense, category, amount, on)
}
