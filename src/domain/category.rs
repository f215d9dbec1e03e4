use crate::domain::transaction::TransactionKind;

/// Suggested labels offered when recording income.
pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Investments", "Sales", "Other"];

/// Suggested labels offered when recording an expense.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Housing",
    "Health",
    "Education",
    "Entertainment",
    "Shopping",
    "Other",
];

/// Returns the suggested categories for `kind`. Advisory only: stores accept any label.
pub fn catalog_for(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Case-insensitive lookup that returns the canonical catalog spelling.
pub fn canonical_category(kind: TransactionKind, label: &str) -> Option<&'static str> {
    let needle = label.trim();
    catalog_for(kind)
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(needle))
}
