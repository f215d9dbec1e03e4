//! Pure rollups over a transaction slice. Nothing here mutates its input or fails.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{
    CategoryTotal, FinancialSummary, MonthlyTotals, PeriodFilter, Transaction, TransactionKind,
};

pub struct AggregationService;

impl AggregationService {
    /// Transactions whose date falls inside `filter`, in their original order.
    pub fn filter_by_period(transactions: &[Transaction], filter: &PeriodFilter) -> Vec<Transaction> {
        let filtered: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .cloned()
            .collect();
        tracing::debug!(
            total = transactions.len(),
            kept = filtered.len(),
            period = %filter,
            "filtered transactions by period"
        );
        filtered
    }

    pub fn summarize(transactions: &[Transaction]) -> FinancialSummary {
        let (income, expenses) =
            transactions
                .iter()
                .fold((0.0, 0.0), |(income, expenses), txn| match txn.kind {
                    TransactionKind::Income => (income + txn.amount, expenses),
                    TransactionKind::Expense => (income, expenses + txn.amount),
                });
        FinancialSummary::new(income, expenses)
    }

    /// Per-`YYYY-MM` income and expense sums, oldest month first.
    pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
        let mut months: BTreeMap<String, MonthlyTotals> = BTreeMap::new();
        for txn in transactions {
            let key = txn.month_key();
            let entry = months
                .entry(key)
                .or_insert_with_key(|key| MonthlyTotals::empty(key.clone()));
            match txn.kind {
                TransactionKind::Income => entry.income += txn.amount,
                TransactionKind::Expense => entry.expense += txn.amount,
            }
        }
        months.into_values().collect()
    }

    /// Expense totals per category, largest first. Equal totals keep the order in
    /// which their categories were first seen.
    pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            match index.get(txn.category.as_str()) {
                Some(&slot) => totals[slot].amount += txn.amount,
                None => {
                    index.insert(txn.category.as_str(), totals.len());
                    totals.push(CategoryTotal {
                        category: txn.category.clone(),
                        amount: txn.amount,
                    });
                }
            }
        }
        totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        totals
    }

    pub fn count_by_kind(transactions: &[Transaction], kind: TransactionKind) -> usize {
        transactions.iter().filter(|txn| txn.kind == kind).count()
    }

    /// Balance as a percentage of income; `None` when there is no income to relate to.
    pub fn balance_share(summary: &FinancialSummary) -> Option<f64> {
        if summary.income == 0.0 {
            None
        } else {
            Some(summary.balance / summary.income * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{MonthFilter, TransactionDraft, TransactionId};

    fn txn(id: &str, kind: TransactionKind, category: &str, amount: f64, date: &str) -> Transaction {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Transaction::from_draft(
            TransactionId::new(id),
            TransactionDraft::new(kind, category, amount, date),
        )
    }

    fn scenario() -> Vec<Transaction> {
        vec![
            txn("1", TransactionKind::Income, "Salary", 5000.0, "2024-01-15"),
            txn("2", TransactionKind::Expense, "Food", 800.0, "2024-01-10"),
            txn("3", TransactionKind::Expense, "Transport", 300.0, "2024-02-08"),
        ]
    }

    #[test]
    fn scenario_summary_and_series() {
        let filtered =
            AggregationService::filter_by_period(&scenario(), &PeriodFilter::year(2024));
        let summary = AggregationService::summarize(&filtered);
        assert_eq!(summary, FinancialSummary::new(5000.0, 1100.0));
        assert_eq!(summary.balance, 3900.0);

        let series = AggregationService::monthly_series(&filtered);
        assert_eq!(
            series,
            vec![
                MonthlyTotals {
                    month_key: "2024-01".into(),
                    income: 5000.0,
                    expense: 800.0,
                },
                MonthlyTotals {
                    month_key: "2024-02".into(),
                    income: 0.0,
                    expense: 300.0,
                },
            ]
        );
    }

    #[test]
    fn empty_input_summarizes_to_zero() {
        assert_eq!(
            AggregationService::summarize(&[]),
            FinancialSummary {
                income: 0.0,
                expenses: 0.0,
                balance: 0.0
            }
        );
        assert!(AggregationService::monthly_series(&[]).is_empty());
        assert!(AggregationService::expenses_by_category(&[]).is_empty());
    }

    #[test]
    fn month_filter_keeps_only_that_month_in_order() {
        let filter = PeriodFilter::new(2024, "1".parse::<MonthFilter>().unwrap());
        let ids: Vec<_> = AggregationService::filter_by_period(&scenario(), &filter)
            .into_iter()
            .map(|t| t.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn category_ties_keep_first_seen_order() {
        let data = vec![
            txn("1", TransactionKind::Expense, "Transport", 100.0, "2024-03-01"),
            txn("2", TransactionKind::Expense, "Food", 50.0, "2024-03-02"),
            txn("3", TransactionKind::Income, "Salary", 900.0, "2024-03-03"),
            txn("4", TransactionKind::Expense, "Health", 100.0, "2024-03-04"),
            txn("5", TransactionKind::Expense, "Food", 150.0, "2024-03-05"),
        ];
        let categories: Vec<_> = AggregationService::expenses_by_category(&data)
            .into_iter()
            .map(|c| (c.category, c.amount))
            .collect();
        assert_eq!(
            categories,
            vec![
                ("Food".to_string(), 200.0),
                ("Transport".to_string(), 100.0),
                ("Health".to_string(), 100.0),
            ]
        );
    }

    #[test]
    fn balance_share_is_undefined_without_income() {
        assert_eq!(
            AggregationService::balance_share(&FinancialSummary::new(0.0, 300.0)),
            None
        );
        let share = AggregationService::balance_share(&FinancialSummary::new(5000.0, 1100.0))
            .expect("income present");
        assert!((share - 78.0).abs() < 1e-9, "unexpected share {share}");
    }

    #[test]
    fn counts_by_kind() {
        let data = scenario();
        assert_eq!(
            AggregationService::count_by_kind(&data, TransactionKind::Income),
            1
        );
        assert_eq!(
            AggregationService::count_by_kind(&data, TransactionKind::Expense),
            2
        );
    }
}
