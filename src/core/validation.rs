//! Boundary checks that turn raw form input into a [`TransactionDraft`].
//!
//! Every problem is collected so the caller can show the full list at once;
//! an invalid draft never reaches the store.

use chrono::NaiveDate;
use thiserror::Error;

use crate::currency::LocaleConfig;
use crate::domain::{category::canonical_category, TransactionDraft, TransactionKind};

pub const MISSING_KIND: &str = "Select the transaction type";
pub const MISSING_CATEGORY: &str = "Select a category";
pub const INVALID_AMOUNT: &str = "Enter a valid amount greater than zero";
pub const MISSING_DATE: &str = "Select a date";
pub const INVALID_DATE: &str = "Enter a valid date (YYYY-MM-DD)";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Unvalidated form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDraft {
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join("; "))]
pub struct ValidationErrors {
    pub messages: Vec<String>,
}

impl ValidationErrors {
    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }
}

/// Checks every field of `raw`; amounts are read with the separators of `locale`.
pub fn validate_draft(
    raw: &RawDraft,
    locale: &LocaleConfig,
) -> Result<TransactionDraft, ValidationErrors> {
    let mut messages = Vec::new();

    let kind = match raw.kind.trim() {
        "" => {
            messages.push(MISSING_KIND.to_string());
            None
        }
        value => match value.parse::<TransactionKind>() {
            Ok(kind) => Some(kind),
            Err(err) => {
                messages.push(err);
                None
            }
        },
    };

    let category = raw.category.trim();
    if category.is_empty() {
        messages.push(MISSING_CATEGORY.to_string());
    }

    let amount = parse_amount(&raw.amount, locale).filter(|value| *value > 0.0);
    if amount.is_none() {
        messages.push(INVALID_AMOUNT.to_string());
    }

    let date = match raw.date.trim() {
        "" => {
            messages.push(MISSING_DATE.to_string());
            None
        }
        value => {
            let parsed = parse_date(value);
            if parsed.is_none() {
                messages.push(INVALID_DATE.to_string());
            }
            parsed
        }
    };

    match (kind, amount, date) {
        (Some(kind), Some(amount), Some(date)) if messages.is_empty() => {
            let category = canonical_category(kind, category)
                .map(str::to_string)
                .unwrap_or_else(|| category.to_string());
            Ok(TransactionDraft::new(kind, category, amount, date)
                .with_description(raw.description.trim()))
        }
        _ => {
            tracing::warn!(issues = messages.len(), "rejected transaction draft");
            Err(ValidationErrors { messages })
        }
    }
}

/// Parses an amount typed under `locale`.
///
/// When both `.` and `,` appear, the last one is the decimal separator and the
/// other groups thousands (`5.000,50` and `5,000.50` both read as 5000.5). A
/// lone separator that is the locale's grouping separator and is followed only
/// by three-digit groups groups thousands too, so `1.500` is 1500 under `pt-BR`
/// and `1,500` is 1500 under `en-US`. Any other lone separator is the decimal.
pub fn parse_amount(raw: &str, locale: &LocaleConfig) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    let (decimal, grouping) = match (compact.rfind(','), compact.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => (Some(','), Some('.')),
        (Some(_), Some(_)) => (Some('.'), Some(',')),
        (Some(_), None) => lone_separator(&compact, ',', locale),
        (None, Some(_)) => lone_separator(&compact, '.', locale),
        (None, None) => (None, None),
    };
    let normalized: String = compact
        .chars()
        .filter(|c| Some(*c) != grouping)
        .map(|c| if Some(c) == decimal { '.' } else { c })
        .collect();
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Returns `(decimal, grouping)` for an amount that uses only `separator`.
fn lone_separator(
    compact: &str,
    separator: char,
    locale: &LocaleConfig,
) -> (Option<char>, Option<char>) {
    if separator == locale.grouping_separator && is_digit_grouping(compact, separator) {
        (None, Some(separator))
    } else {
        (Some(separator), None)
    }
}

/// `1.500` or `12.345.678`: one to three leading digits without a leading
/// zero, then groups of exactly three.
fn is_digit_grouping(value: &str, separator: char) -> bool {
    let unsigned = value.strip_prefix(&['-', '+'][..]).unwrap_or(value);
    let all_digits = |group: &str| group.chars().all(|c| c.is_ascii_digit());
    let mut groups = unsigned.split(separator);
    match groups.next() {
        Some(head) if (1..=3).contains(&head.len()) && !head.starts_with('0') => {
            all_digits(head) && groups.all(|group| group.len() == 3 && all_digits(group))
        }
        _ => false,
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw.trim(), format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt_br() -> LocaleConfig {
        LocaleConfig::for_tag("pt-BR")
    }

    fn en_us() -> LocaleConfig {
        LocaleConfig::for_tag("en-US")
    }

    fn raw(kind: &str, category: &str, amount: &str, date: &str) -> RawDraft {
        RawDraft {
            kind: kind.into(),
            category: category.into(),
            amount: amount.into(),
            description: "  Monthly salary ".into(),
            date: date.into(),
        }
    }

    #[test]
    fn valid_draft_is_typed_and_trimmed() {
        let draft =
            validate_draft(&raw("income", "salary", "5000", "2024-01-15"), &pt_br()).unwrap();
        assert_eq!(draft.kind, TransactionKind::Income);
        assert_eq!(draft.category, "Salary");
        assert_eq!(draft.amount, 5000.0);
        assert_eq!(draft.description, "Monthly salary");
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn empty_draft_reports_every_problem_in_order() {
        let err = validate_draft(&RawDraft::default(), &pt_br()).unwrap_err();
        assert_eq!(
            err.messages,
            vec![MISSING_KIND, MISSING_CATEGORY, INVALID_AMOUNT, MISSING_DATE]
        );
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        for amount in ["0", "-10", "abc", "NaN", "inf"] {
            let err = validate_draft(&raw("expense", "Food", amount, "2024-01-10"), &pt_br())
                .unwrap_err();
            assert_eq!(err.messages, vec![INVALID_AMOUNT], "amount {amount}");
        }
    }

    #[test]
    fn malformed_date_is_rejected_at_the_boundary() {
        let err = validate_draft(&raw("expense", "Food", "10", "2024-13-40"), &pt_br()).unwrap_err();
        assert!(err.contains(INVALID_DATE));
    }

    #[test]
    fn amount_accepts_both_decimal_conventions() {
        let locale = pt_br();
        assert_eq!(parse_amount("1234,5", &locale), Some(1234.5));
        assert_eq!(parse_amount("5.000,50", &locale), Some(5000.5));
        assert_eq!(parse_amount("5,000.50", &locale), Some(5000.5));
        assert_eq!(parse_amount(" 42 ", &locale), Some(42.0));
        assert_eq!(parse_amount("", &locale), None);
    }

    #[test]
    fn lone_grouping_separator_reads_as_thousands() {
        assert_eq!(parse_amount("1.500", &pt_br()), Some(1500.0));
        assert_eq!(parse_amount("1,500", &en_us()), Some(1500.0));
        assert_eq!(parse_amount("1.234.567", &pt_br()), Some(1_234_567.0));
        assert_eq!(parse_amount("1 500", &LocaleConfig::for_tag("fr-FR")), Some(1500.0));
    }

    #[test]
    fn lone_separator_is_decimal_unless_it_groups_digits() {
        assert_eq!(parse_amount("250,75", &pt_br()), Some(250.75));
        assert_eq!(parse_amount("1,500", &pt_br()), Some(1.5));
        assert_eq!(parse_amount("1.500", &en_us()), Some(1.5));
        assert_eq!(parse_amount("1.5", &pt_br()), Some(1.5));
        assert_eq!(parse_amount("0.500", &pt_br()), Some(0.5));
        assert_eq!(parse_amount("1.50.0", &pt_br()), None);
    }

    #[test]
    fn drafts_read_amounts_with_the_given_locale() {
        let draft =
            validate_draft(&raw("expense", "Housing", "1.500", "2024-01-01"), &pt_br()).unwrap();
        assert_eq!(draft.amount, 1500.0);
        let draft =
            validate_draft(&raw("expense", "Housing", "1,500", "2024-01-01"), &en_us()).unwrap();
        assert_eq!(draft.amount, 1500.0);
    }

    #[test]
    fn brazilian_date_format_is_accepted() {
        assert_eq!(
            parse_date("31/12/2021"),
            NaiveDate::from_ymd_opt(2021, 12, 31)
        );
    }
}
