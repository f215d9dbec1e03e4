//! Transaction records and the derived aggregate shapes computed from them.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Amounted, Displayable, Identifiable};

/// Opaque identifier assigned by the store when a transaction is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(TransactionKind::Income),
            "expense" | "out" => Ok(TransactionKind::Expense),
            other => Err(format!("unknown transaction type `{other}`")),
        }
    }
}

/// A transaction before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            description: String::new(),
            date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A recorded income or expense. Never edited in place once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn from_draft(id: TransactionId, draft: TransactionDraft) -> Self {
        Self {
            id,
            kind: draft.kind,
            category: draft.category,
            amount: draft.amount,
            description: draft.description,
            date: draft.date,
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month, 1-based.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Zero-padded `YYYY-MM` bucket key.
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.year(), self.month())
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &TransactionId {
        &self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn kind(&self) -> TransactionKind {
        self.kind
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{} {}]", self.id, self.kind, self.category)
    }
}

/// Income, expense and balance totals for a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl FinancialSummary {
    pub fn new(income: f64, expenses: f64) -> Self {
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.balance >= 0.0
    }
}

/// Income and expense sums for one `YYYY-MM` bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    pub month_key: String,
    pub income: f64,
    pub expense: f64,
}

impl MonthlyTotals {
    pub fn empty(month_key: impl Into<String>) -> Self {
        Self {
            month_key: month_key.into(),
            income: 0.0,
            expense: 0.0,
        }
    }

    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        let draft = TransactionDraft::new(
            TransactionKind::Expense,
            "Food",
            800.0,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
        .with_description("Groceries");
        Transaction::from_draft(TransactionId::new("txn-1"), draft)
    }

    #[test]
    fn month_key_is_zero_padded() {
        assert_eq!(sample().month_key(), "2024-01");
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(
            "Income".parse::<TransactionKind>(),
            Ok(TransactionKind::Income)
        );
        assert_eq!(
            " EXPENSE ".parse::<TransactionKind>(),
            Ok(TransactionKind::Expense)
        );
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn serializes_kind_under_type_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["id"], "txn-1");
        assert_eq!(json["date"], "2024-01-10");
    }

    #[test]
    fn draft_uses_the_same_type_key_as_transactions() {
        let draft = TransactionDraft::new(
            TransactionKind::Income,
            "Salary",
            5000.0,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        );
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "income");
        assert!(json.get("kind").is_none());

        let parsed: TransactionDraft = serde_json::from_str(
            r#"{"type":"expense","category":"Food","amount":12.5,"date":"2024-01-10"}"#,
        )
        .unwrap();
        assert_eq!(parsed.kind, TransactionKind::Expense);
        assert!(parsed.description.is_empty());
    }

    #[test]
    fn signed_amount_negates_expenses() {
        assert_eq!(sample().signed_amount(), -800.0);
    }

    #[test]
    fn summary_balance_is_income_minus_expenses() {
        let summary = FinancialSummary::new(100.0, 250.0);
        assert_eq!(summary.balance, -150.0);
        assert!(!summary.is_positive());
    }
}
