//! Application state for a single dashboard session.
//!
//! [`Dashboard`] owns the transaction store and the current period selection.
//! Its mutators are the whole write surface; every read goes through
//! [`Dashboard::view`], which recomputes the aggregates from scratch.

use serde::Serialize;

use crate::config::Config;
use crate::core::seed;
use crate::core::services::{
    AggregationService, ServiceResult, TransactionService, YearRangeOptions, YearRangeService,
};
use crate::core::store::TransactionStore;
use crate::core::time::{Clock, SystemClock};
use crate::core::validation::RawDraft;
use crate::currency::LocaleConfig;
use crate::domain::{
    CategoryTotal, FinancialSummary, MonthFilter, MonthlyTotals, PeriodFilter, Transaction,
    TransactionDraft, TransactionId, TransactionKind,
};

/// Everything the presentation layer renders, derived from store + filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub filter: PeriodFilter,
    pub years: Vec<String>,
    pub transactions: Vec<Transaction>,
    pub summary: FinancialSummary,
    pub monthly: Vec<MonthlyTotals>,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub income_count: usize,
    pub expense_count: usize,
    pub balance_share: Option<f64>,
}

pub struct Dashboard {
    store: TransactionStore,
    filter: PeriodFilter,
    year_options: YearRangeOptions,
    locale: LocaleConfig,
    clock: Box<dyn Clock>,
}

impl Dashboard {
    /// Starts on the clock's current year with every month selected.
    pub fn new(
        store: TransactionStore,
        year_options: YearRangeOptions,
        clock: Box<dyn Clock>,
    ) -> Self {
        let filter = PeriodFilter::year(clock.current_year());
        Self {
            store,
            filter,
            year_options,
            locale: LocaleConfig::default(),
            clock,
        }
    }

    /// Locale used to read typed amounts in [`Dashboard::add_transaction`].
    pub fn with_locale(mut self, locale: LocaleConfig) -> Self {
        self.locale = locale;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_config_with_clock(config, Box::new(SystemClock))
    }

    pub fn from_config_with_clock(config: &Config, clock: Box<dyn Clock>) -> Self {
        let ids = config.id_strategy.generator();
        let store = if config.seed_sample_data {
            TransactionStore::seeded(ids, seed::sample_transactions())
        } else {
            TransactionStore::with_generator(ids)
        };
        tracing::debug!(records = store.len(), "dashboard store initialized");
        Self::new(store, config.year_range_options(), clock).with_locale(config.locale_config())
    }

    pub fn add_transaction(&mut self, raw: &RawDraft) -> ServiceResult<Transaction> {
        TransactionService::record(&mut self.store, raw, &self.locale)
    }

    pub fn add_draft(&mut self, draft: TransactionDraft) -> ServiceResult<Transaction> {
        TransactionService::add(&mut self.store, draft)
    }

    pub fn delete_transaction(&mut self, id: &TransactionId) -> Option<Transaction> {
        TransactionService::remove(&mut self.store, id)
    }

    pub fn set_year(&mut self, year: i32) {
        self.filter.year = year;
    }

    pub fn set_month(&mut self, month: MonthFilter) {
        self.filter.month = month;
    }

    pub fn set_filter(&mut self, filter: PeriodFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> PeriodFilter {
        self.filter
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn available_years(&self) -> Vec<String> {
        YearRangeService::years(
            self.clock.as_ref(),
            self.year_options,
            self.store.transactions(),
        )
    }

    pub fn view(&self) -> DashboardView {
        let transactions =
            AggregationService::filter_by_period(self.store.transactions(), &self.filter);
        let summary = AggregationService::summarize(&transactions);
        DashboardView {
            filter: self.filter,
            years: self.available_years(),
            monthly: AggregationService::monthly_series(&transactions),
            expenses_by_category: AggregationService::expenses_by_category(&transactions),
            income_count: AggregationService::count_by_kind(&transactions, TransactionKind::Income),
            expense_count: AggregationService::count_by_kind(
                &transactions,
                TransactionKind::Expense,
            ),
            balance_share: AggregationService::balance_share(&summary),
            summary,
            transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::core::time::FixedClock;

    fn dashboard_in(year: i32) -> Dashboard {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(year, 3, 1).unwrap());
        let config = Config::default();
        Dashboard::from_config_with_clock(&config, Box::new(clock))
    }

    #[test]
    fn defaults_to_current_year_and_all_months() {
        let dashboard = dashboard_in(2024);
        assert_eq!(dashboard.filter(), PeriodFilter::year(2024));
    }

    #[test]
    fn seeded_january_view_matches_sample_data() {
        let mut dashboard = dashboard_in(2024);
        dashboard.set_month("1".parse().unwrap());
        let view = dashboard.view();
        assert_eq!(view.transactions.len(), 4);
        assert_eq!(view.summary, FinancialSummary::new(6200.0, 1100.0));
        assert_eq!(view.income_count, 2);
        assert_eq!(view.expense_count, 2);
        assert_eq!(view.monthly.len(), 1);
    }

    #[test]
    fn years_include_seed_years_outside_the_window() {
        let dashboard = dashboard_in(2030);
        let years = dashboard.available_years();
        assert_eq!(years.first().map(String::as_str), Some("2035"));
        assert!(years.contains(&"2021".to_string()));
        assert!(years.contains(&"2022".to_string()));
    }

    #[test]
    fn view_without_income_has_no_balance_share() {
        let mut dashboard = dashboard_in(2022);
        dashboard.set_filter(PeriodFilter::year(2022));
        let view = dashboard.view();
        assert_eq!(view.summary.expenses, 400.0);
        assert_eq!(view.balance_share, None);
    }
}
