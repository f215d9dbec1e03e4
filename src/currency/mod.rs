//! Locale-aware rendering of amounts, percentages, dates and month keys.
//!
//! Amounts stay currency-agnostic inside the engine; only output is decorated.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{Month, MonthFilter, PeriodFilter};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("BRL")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormatStyle {
    /// `2024-01-15`
    Iso,
    /// `15/01/2024`
    DayMonthYear,
    /// `01/15/2024`
    MonthDayYear,
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub date_format: DateFormatStyle,
    /// Whether a space separates the currency symbol from the number.
    pub symbol_spacing: bool,
}

impl LocaleConfig {
    /// Known tags get their conventions; anything else gets ISO dates and `.` decimals.
    pub fn for_tag(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-");
        let (decimal_separator, grouping_separator, date_format, symbol_spacing) =
            match normalized.to_ascii_lowercase().as_str() {
                "pt-br" | "pt" => (',', '.', DateFormatStyle::DayMonthYear, true),
                "de-de" | "es-es" | "it-it" => (',', '.', DateFormatStyle::DayMonthYear, true),
                "fr-fr" => (',', ' ', DateFormatStyle::DayMonthYear, true),
                "en-us" => ('.', ',', DateFormatStyle::MonthDayYear, false),
                "en-gb" => ('.', ',', DateFormatStyle::DayMonthYear, false),
                _ => ('.', ',', DateFormatStyle::Iso, false),
            };
        Self {
            language_tag: normalized,
            decimal_separator,
            grouping_separator,
            date_format,
            symbol_spacing,
        }
    }

    /// Primary language subtag, `pt` for `pt-BR`.
    pub fn language(&self) -> &str {
        self.language_tag.split('-').next().unwrap_or_default()
    }

    fn is_portuguese(&self) -> bool {
        self.language().eq_ignore_ascii_case("pt")
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::for_tag("pt-BR")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "BRL" => "R$".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders `amount` as `R$ 5.000,00` / `$5,000.00`; negatives lead with `-`.
pub fn format_currency(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let body = format_number(locale, amount.abs(), minor_units_for(code.as_str()));
    let symbol = symbol_for(code.as_str());
    let sign = if amount < 0.0 { "-" } else { "" };
    let spacer = if locale.symbol_spacing { " " } else { "" };
    format!("{sign}{symbol}{spacer}{body}")
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let raw = format!("{:.*}", precision as usize, value);
    let (int_part, fraction) = match raw.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (raw.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let grouped = group_digits(digits, locale.grouping_separator);
    match fraction {
        Some(fraction) => format!("{sign}{grouped}{}{fraction}", locale.decimal_separator),
        None => format!("{sign}{grouped}"),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// One decimal place followed by `%`, e.g. `78,0%`.
pub fn format_percent(locale: &LocaleConfig, value: f64) -> String {
    format!("{}%", format_number(locale, value, 1))
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    match locale.date_format {
        DateFormatStyle::Iso => date.format("%Y-%m-%d").to_string(),
        DateFormatStyle::DayMonthYear => date.format("%d/%m/%Y").to_string(),
        DateFormatStyle::MonthDayYear => date.format("%m/%d/%Y").to_string(),
    }
}

/// Month name in the locale's language. Portuguese locales get Portuguese
/// names; everything else falls back to English.
pub fn month_name(locale: &LocaleConfig, month: Month) -> &'static str {
    if locale.is_portuguese() {
        month.portuguese_name()
    } else {
        month.name()
    }
}

pub fn month_short_name(locale: &LocaleConfig, month: Month) -> String {
    month_name(locale, month).chars().take(3).collect()
}

pub fn month_filter_label(locale: &LocaleConfig, filter: MonthFilter) -> &'static str {
    match filter {
        MonthFilter::All if locale.is_portuguese() => "Todos os meses",
        MonthFilter::All => "All months",
        MonthFilter::Month(month) => month_name(locale, month),
    }
}

/// `2024 / Janeiro` under `pt-BR`, `2024 / January` under `en-US`.
pub fn period_label(locale: &LocaleConfig, filter: &PeriodFilter) -> String {
    format!("{} / {}", filter.year, month_filter_label(locale, filter.month))
}

/// Short axis label for a `YYYY-MM` key: `Jan/24`. Unparsable keys come back unchanged.
pub fn month_key_label(locale: &LocaleConfig, month_key: &str) -> String {
    let parsed = month_key.split_once('-').and_then(|(year, month)| {
        let year = year.parse::<i32>().ok()?;
        let month = Month::new(month.parse::<u32>().ok()?)?;
        Some((year, month))
    });
    match parsed {
        Some((year, month)) => format!(
            "{}/{:02}",
            month_short_name(locale, month),
            year.rem_euclid(100)
        ),
        None => month_key.to_string(),
    }
}

/// Long form of a date's month, `Fevereiro 2024` or `February 2024`.
pub fn month_year_label(locale: &LocaleConfig, date: NaiveDate) -> String {
    match Month::new(date.month()) {
        Some(month) => format!("{} {}", month_name(locale, month), date.year()),
        None => date.format("%Y-%m").to_string(),
    }
}
