//! Plain-text rendering of dashboard output. No colors here so the lines stay
//! stable for tests; handlers decorate them when printing.

use crate::core::DashboardView;
use crate::currency::{
    format_currency, format_date, format_percent, month_key_label, period_label, CurrencyCode,
    LocaleConfig,
};
use crate::domain::{Amounted, CategoryTotal, MonthlyTotals, PeriodFilter, Transaction};

pub struct RenderContext<'a> {
    pub locale: &'a LocaleConfig,
    pub currency: &'a CurrencyCode,
}

impl RenderContext<'_> {
    pub fn money(&self, amount: f64) -> String {
        format_currency(amount, self.currency, self.locale)
    }

    pub fn percent(&self, value: f64) -> String {
        format_percent(self.locale, value)
    }

    pub fn period(&self, filter: &PeriodFilter) -> String {
        period_label(self.locale, filter)
    }
}

pub fn filter_line(ctx: &RenderContext<'_>, filter: &PeriodFilter, found: usize) -> String {
    format!("Period {}: {found} transaction(s) found", ctx.period(filter))
}

pub fn transactions(ctx: &RenderContext<'_>, rows: &[Transaction]) -> Vec<String> {
    if rows.is_empty() {
        return vec!["No transactions found for this period.".to_string()];
    }
    let mut lines = vec![format!(
        "{:<10} {:<10} {:<8} {:<14} {:>14}  {}",
        "ID", "DATE", "TYPE", "CATEGORY", "AMOUNT", "DESCRIPTION"
    )];
    lines.extend(rows.iter().map(|txn| {
        format!(
            "{:<10} {:<10} {:<8} {:<14} {:>14}  {}",
            txn.id.as_str(),
            format_date(ctx.locale, txn.date),
            txn.kind.label(),
            txn.category,
            ctx.money(txn.signed_amount()),
            txn.description
        )
    }));
    lines
}

pub fn summary(ctx: &RenderContext<'_>, view: &DashboardView) -> Vec<String> {
    let summary = &view.summary;
    let standing = if summary.is_positive() {
        "Positive"
    } else {
        "Negative"
    };
    let share = view
        .balance_share
        .map(|value| format!("{} of income", ctx.percent(value)))
        .unwrap_or_else(|| "n/a of income".to_string());
    vec![
        format!(
            "Income:   {:>16}  ({} transaction(s))",
            ctx.money(summary.income),
            view.income_count
        ),
        format!(
            "Expenses: {:>16}  ({} transaction(s))",
            ctx.money(summary.expenses),
            view.expense_count
        ),
        format!(
            "Balance:  {:>16}  {standing}, {share}",
            ctx.money(summary.balance)
        ),
    ]
}

pub fn monthly(ctx: &RenderContext<'_>, series: &[MonthlyTotals]) -> Vec<String> {
    if series.is_empty() {
        return vec!["No monthly activity for this period.".to_string()];
    }
    series
        .iter()
        .map(|month| {
            format!(
                "{:<7} income {:>14}  expense {:>14}  net {:>14}",
                month_key_label(ctx.locale, &month.month_key),
                ctx.money(month.income),
                ctx.money(month.expense),
                ctx.money(month.net())
            )
        })
        .collect()
}

pub fn categories(ctx: &RenderContext<'_>, totals: &[CategoryTotal]) -> Vec<String> {
    if totals.is_empty() {
        return vec!["No expenses for this period.".to_string()];
    }
    let overall: f64 = totals.iter().map(|total| total.amount).sum();
    totals
        .iter()
        .map(|total| {
            format!(
                "{:<14} {:>14}  {:>7}",
                total.category,
                ctx.money(total.amount),
                ctx.percent(total.amount / overall * 100.0)
            )
        })
        .collect()
}

/// One line per selectable year; `*` marks the selection.
pub fn years(
    years: &[String],
    selected: i32,
    is_current: impl Fn(&str) -> bool,
) -> Vec<String> {
    let selected = selected.to_string();
    years
        .iter()
        .map(|year| {
            let marker = if *year == selected { "*" } else { " " };
            let suffix = if is_current(year) { " (current)" } else { "" };
            format!("{marker} {year}{suffix}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::config::Config;
    use crate::core::services::YearRangeService;
    use crate::core::{Dashboard, FixedClock};
    use crate::domain::MonthFilter;

    fn january_2024() -> DashboardView {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        let mut dashboard = Dashboard::from_config_with_clock(&Config::default(), Box::new(clock));
        dashboard.set_month("jan".parse::<MonthFilter>().unwrap());
        dashboard.view()
    }

    #[test]
    fn summary_lines_use_locale_formatting() {
        let locale = LocaleConfig::for_tag("pt-BR");
        let currency = CurrencyCode::new("BRL");
        let ctx = RenderContext {
            locale: &locale,
            currency: &currency,
        };
        let rendered = summary(&ctx, &january_2024()).join("\n");
        insta::assert_snapshot!(rendered, @r###"
        Income:        R$ 6.200,00  (2 transaction(s))
        Expenses:      R$ 1.100,00  (2 transaction(s))
        Balance:       R$ 5.100,00  Positive, 82,3% of income
        "###);
    }

    #[test]
    fn category_lines_are_largest_first() {
        let locale = LocaleConfig::for_tag("en-US");
        let currency = CurrencyCode::new("USD");
        let ctx = RenderContext {
            locale: &locale,
            currency: &currency,
        };
        let rendered = categories(&ctx, &january_2024().expenses_by_category);
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].starts_with("Food"));
        assert!(rendered[0].contains("$800.00"));
        assert!(rendered[0].ends_with("72.7%"));
        assert!(rendered[1].starts_with("Transport"));
    }

    #[test]
    fn year_lines_mark_selection_and_current() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        let rendered = years(&["2025".into(), "2024".into()], 2024, |year| {
            YearRangeService::is_current_year(&clock, year)
        });
        assert_eq!(rendered, vec!["  2025 (current)", "* 2024"]);
    }

    #[test]
    fn filter_line_names_the_month_in_the_locale_language() {
        let currency = CurrencyCode::default();
        let filter = PeriodFilter::new(2024, "jan".parse::<MonthFilter>().unwrap());
        let pt = LocaleConfig::for_tag("pt-BR");
        let ctx = RenderContext {
            locale: &pt,
            currency: &currency,
        };
        assert_eq!(
            filter_line(&ctx, &filter, 4),
            "Period 2024 / Janeiro: 4 transaction(s) found"
        );
        let en = LocaleConfig::for_tag("en-US");
        let ctx = RenderContext {
            locale: &en,
            currency: &currency,
        };
        assert_eq!(
            filter_line(&ctx, &filter, 4),
            "Period 2024 / January: 4 transaction(s) found"
        );
    }

    #[test]
    fn empty_period_has_placeholder_rows() {
        let locale = LocaleConfig::default();
        let currency = CurrencyCode::default();
        let ctx = RenderContext {
            locale: &locale,
            currency: &currency,
        };
        assert_eq!(
            transactions(&ctx, &[]),
            vec!["No transactions found for this period."]
        );
        assert_eq!(
            monthly(&ctx, &[]),
            vec!["No monthly activity for this period."]
        );
    }
}
