use serde::{Deserialize, Serialize};

use crate::core::ids::IdStrategy;
use crate::core::services::{YearRangeOptions, MAX_YEAR_SPAN};
use crate::currency::{CurrencyCode, LocaleConfig};
use crate::errors::{FinanceError, Result};

/// Stores user-configurable dashboard preferences.
///
/// Every field has a serde default so partial or older files still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_years_back")]
    pub years_back: u32,
    #[serde(default = "Config::default_years_forward")]
    pub years_forward: u32,
    #[serde(default = "Config::default_true")]
    pub include_transaction_years: bool,
    #[serde(default = "Config::default_true")]
    pub seed_sample_data: bool,
    #[serde(default)]
    pub id_strategy: IdStrategy,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            years_back: Self::default_years_back(),
            years_forward: Self::default_years_forward(),
            include_transaction_years: true,
            seed_sample_data: true,
            id_strategy: IdStrategy::default(),
            ui_color_enabled: true,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "pt-BR".into()
    }

    pub fn default_currency() -> String {
        "BRL".into()
    }

    pub fn default_years_back() -> u32 {
        5
    }

    pub fn default_years_forward() -> u32 {
        5
    }

    fn default_true() -> bool {
        true
    }

    pub fn year_range_options(&self) -> YearRangeOptions {
        YearRangeOptions {
            years_back: self.years_back,
            years_forward: self.years_forward,
            include_transaction_years: self.include_transaction_years,
        }
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::for_tag(&self.locale)
    }

    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(&self.currency)
    }

    /// Rejects values the formatter cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() {
            return Err(FinanceError::Config("locale must not be empty".into()));
        }
        let code = self.currency.trim();
        if code.len() != 3 || !code.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(FinanceError::Config(format!(
                "currency `{}` is not a three-letter ISO 4217 code",
                self.currency
            )));
        }
        for (field, span) in [
            ("years_back", self.years_back),
            ("years_forward", self.years_forward),
        ] {
            if span > MAX_YEAR_SPAN {
                return Err(FinanceError::Config(format!(
                    "{field} is {span}, at most {MAX_YEAR_SPAN} years are allowed"
                )));
            }
        }
        Ok(())
    }
}
