use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::time::Clock;
use crate::domain::Transaction;

/// Widest window, in years, on either side of the current year.
pub const MAX_YEAR_SPAN: u32 = 100;

/// Window settings for the year selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRangeOptions {
    pub years_back: u32,
    pub years_forward: u32,
    pub include_transaction_years: bool,
}

impl Default for YearRangeOptions {
    fn default() -> Self {
        Self {
            years_back: 5,
            years_forward: 5,
            include_transaction_years: true,
        }
    }
}

/// Contiguous window around `current_year`, optionally widened by the years that
/// transactions fall in. Deduplicated and most recent first. Each side of the
/// window is capped at [`MAX_YEAR_SPAN`].
pub fn generate_year_range(
    current_year: i32,
    years_back: u32,
    years_forward: u32,
    include_transaction_years: bool,
    transactions: &[Transaction],
) -> Vec<String> {
    let start = current_year.saturating_sub_unsigned(years_back.min(MAX_YEAR_SPAN));
    let end = current_year.saturating_add_unsigned(years_forward.min(MAX_YEAR_SPAN));
    let mut years: BTreeSet<i32> = (start..=end).collect();
    if include_transaction_years {
        years.extend(transactions.iter().map(Transaction::year));
    }
    years.into_iter().rev().map(|year| year.to_string()).collect()
}

pub struct YearRangeService;

impl YearRangeService {
    pub fn years(
        clock: &dyn Clock,
        options: YearRangeOptions,
        transactions: &[Transaction],
    ) -> Vec<String> {
        generate_year_range(
            clock.current_year(),
            options.years_back,
            options.years_forward,
            options.include_transaction_years,
            transactions,
        )
    }

    pub fn is_current_year(clock: &dyn Clock, year: &str) -> bool {
        year.trim() == clock.current_year().to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::core::time::FixedClock;
    use crate::domain::{TransactionDraft, TransactionId, TransactionKind};

    fn on(date: &str) -> Transaction {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Transaction::from_draft(
            TransactionId::new("t"),
            TransactionDraft::new(TransactionKind::Expense, "Health", 400.0, date),
        )
    }

    #[test]
    fn default_window_is_eleven_descending_years() {
        let years = generate_year_range(2026, 5, 5, false, &[]);
        let expected: Vec<String> = (2021..=2031).rev().map(|y| y.to_string()).collect();
        assert_eq!(years, expected);
    }

    #[test]
    fn transaction_years_are_merged_and_deduplicated() {
        let txns = vec![on("2019-03-01"), on("2019-07-01"), on("2026-01-01")];
        assert_eq!(
            generate_year_range(2026, 0, 0, true, &txns),
            vec!["2026", "2019"]
        );
        assert_eq!(generate_year_range(2019, 0, 0, true, &txns[..1]), vec!["2019"]);
    }

    #[test]
    fn transaction_years_are_ignored_when_disabled() {
        assert_eq!(
            generate_year_range(2026, 0, 1, false, &[on("2001-01-01")]),
            vec!["2027", "2026"]
        );
    }

    #[test]
    fn oversized_windows_are_capped() {
        let years = generate_year_range(2026, 50_000_000, u32::MAX, false, &[]);
        assert_eq!(years.len(), 2 * MAX_YEAR_SPAN as usize + 1);
        assert_eq!(years.first().map(String::as_str), Some("2126"));
        assert_eq!(years.last().map(String::as_str), Some("1926"));
    }

    #[test]
    fn service_reads_current_year_from_clock() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let years = YearRangeService::years(&clock, YearRangeOptions::default(), &[]);
        assert_eq!(years.first().map(String::as_str), Some("2029"));
        assert_eq!(years.last().map(String::as_str), Some("2019"));
        assert!(YearRangeService::is_current_year(&clock, "2024"));
        assert!(!YearRangeService::is_current_year(&clock, "2023"));
    }
}
