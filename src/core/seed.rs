//! Example records a fresh dashboard starts with when seeding is enabled.

use chrono::NaiveDate;

use crate::domain::{Transaction, TransactionDraft, TransactionId, TransactionKind};

const SAMPLE_ROWS: [(&str, TransactionKind, &str, f64, &str, (i32, u32, u32)); 8] = [
    ("1", TransactionKind::Income, "Salary", 5000.0, "Monthly salary", (2024, 1, 15)),
    ("2", TransactionKind::Expense, "Food", 800.0, "Supermarket", (2024, 1, 10)),
    ("3", TransactionKind::Expense, "Transport", 300.0, "Fuel", (2024, 1, 8)),
    ("4", TransactionKind::Income, "Freelance", 1200.0, "Web project", (2024, 1, 5)),
    ("5", TransactionKind::Expense, "Housing", 1500.0, "Rent", (2023, 12, 1)),
    ("6", TransactionKind::Income, "Investments", 2000.0, "Dividends", (2023, 11, 15)),
    ("7", TransactionKind::Expense, "Health", 400.0, "Doctor visit", (2022, 6, 20)),
    ("8", TransactionKind::Income, "Bonus", 3000.0, "Annual bonus", (2021, 12, 31)),
];

pub fn sample_transactions() -> Vec<Transaction> {
    SAMPLE_ROWS
        .iter()
        .filter_map(|(id, kind, category, amount, description, (y, m, d))| {
            let date = NaiveDate::from_ymd_opt(*y, *m, *d)?;
            let draft =
                TransactionDraft::new(*kind, *category, *amount, date).with_description(*description);
            Some(Transaction::from_draft(TransactionId::new(*id), draft))
        })
        .collect()
}
