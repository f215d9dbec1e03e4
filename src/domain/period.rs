//! Year/month selection used to narrow the transactions under consideration.

use std::{fmt, str::FromStr};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::domain::transaction::Transaction;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const PORTUGUESE_MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// A calendar month, always within `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

impl Month {
    pub fn new(number: u32) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }

    pub fn portuguese_name(&self) -> &'static str {
        PORTUGUESE_MONTH_NAMES[(self.0 - 1) as usize]
    }

    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }
}

impl TryFrom<u32> for Month {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Month::new(value).ok_or_else(|| format!("month {value} is outside 1..=12"))
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Month {
    type Err = String;

    /// Accepts `1`..`12` as well as English or Portuguese month names,
    /// abbreviated to at least three letters.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Month::try_from(number);
        }
        let lowered = trimmed.to_lowercase();
        if lowered.chars().count() < 3 {
            return Err(format!("unknown month `{trimmed}`"));
        }
        Month::all()
            .find(|month| {
                [month.name(), month.portuguese_name()]
                    .iter()
                    .any(|name| name.to_lowercase().starts_with(&lowered))
            })
            .ok_or_else(|| format!("unknown month `{trimmed}`"))
    }
}

/// Month half of a period filter: every month, or one specific month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthFilter {
    #[default]
    All,
    Month(Month),
}

impl MonthFilter {
    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(selected) => selected.number() == month,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MonthFilter::All => "All months",
            MonthFilter::Month(month) => month.name(),
        }
    }

    /// Selector entries in display order, `all` first.
    pub fn options() -> Vec<MonthFilter> {
        std::iter::once(MonthFilter::All)
            .chain(Month::all().map(MonthFilter::Month))
            .collect()
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(month) => write!(f, "{month}"),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        value.parse::<Month>().map(MonthFilter::Month)
    }
}

/// A `(year, month-or-all)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodFilter {
    pub year: i32,
    pub month: MonthFilter,
}

impl PeriodFilter {
    pub fn new(year: i32, month: MonthFilter) -> Self {
        Self { year, month }
    }

    pub fn year(year: i32) -> Self {
        Self::new(year, MonthFilter::All)
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        transaction.date.year() == self.year && self.month.matches(transaction.date.month())
    }
}

impl fmt::Display for PeriodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.year, self.month.label())
    }
}
