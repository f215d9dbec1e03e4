//! Domain models: transactions, period filters and the category catalog.

pub mod category;
pub mod common;
pub mod period;
pub mod transaction;

pub use category::{catalog_for, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use common::{Amounted, Displayable, Identifiable};
pub use period::{Month, MonthFilter, PeriodFilter};
pub use transaction::{
    CategoryTotal, FinancialSummary, MonthlyTotals, Transaction, TransactionDraft, TransactionId,
    TransactionKind,
};
