//! User settings for SpendWise
//!
//! Display preferences (currency, theme) and the scope budgets are evaluated
//! over.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::SpendwisePaths;
use crate::engine::Theme;
use crate::error::SpendwiseError;
use crate::models::{Currency, MonthPeriod};
use crate::storage::file_io::{read_json_or_else, write_json_atomic};

/// Which transactions budget goals are measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetScope {
    /// The whole ledger (default)
    #[default]
    Lifetime,
    /// Only the selected calendar month
    Monthly,
}

impl BudgetScope {
    /// The month to pre-filter by, if any
    pub fn period(&self, selected: MonthPeriod) -> Option<MonthPeriod> {
        match self {
            Self::Lifetime => None,
            Self::Monthly => Some(selected),
        }
    }
}

impl fmt::Display for BudgetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lifetime => write!(f, "lifetime"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for BudgetScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lifetime" | "all" => Ok(Self::Lifetime),
            "monthly" | "month" => Ok(Self::Monthly),
            other => Err(format!(
                "Unknown budget scope '{}', expected lifetime or monthly",
                other
            )),
        }
    }
}

/// User settings for SpendWise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub budget_scope: BudgetScope,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            theme: Theme::default(),
            budget_scope: BudgetScope::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk
    ///
    /// A missing or malformed file yields the defaults; nothing is written
    /// until [`Settings::save`] is called.
    pub fn load_or_create(paths: &SpendwisePaths) -> Self {
        read_json_or_else(paths.settings_file(), Settings::default)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendwisePaths) -> Result<(), SpendwiseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    pub fn currency_symbol(&self) -> &'static str {
        self.currency.symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, Currency::Usd);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.budget_scope, BudgetScope::Lifetime);
        assert_eq!(settings.currency_symbol(), "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path());

        let settings = Settings {
            currency: Currency::Inr,
            theme: Theme::Dark,
            budget_scope: BudgetScope::Monthly,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), "{ currency: ").unwrap();

        assert_eq!(Settings::load_or_create(&paths), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.currency, Currency::Usd);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_scope_period() {
        let month = MonthPeriod::new(2025, 4).unwrap();
        assert_eq!(BudgetScope::Lifetime.period(month), None);
        assert_eq!(BudgetScope::Monthly.period(month), Some(month));
        assert_eq!("Monthly".parse::<BudgetScope>().unwrap(), BudgetScope::Monthly);
    }
}
