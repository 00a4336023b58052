//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging clap
//! argument parsing with [`crate::state::AppState`] and the engine.

pub mod budget;
pub mod config;
pub mod export;
pub mod subscription;
pub mod summary;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use export::handle_export_command;
pub use subscription::{handle_subscription_command, SubscriptionCommands};
pub use summary::{handle_chart_command, handle_summary_command};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Category, Money, MonthPeriod};

/// Parse a strictly positive amount ("12.50", "$12.50", "1,200")
pub fn parse_amount(input: &str) -> SpendwiseResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| SpendwiseError::Validation(format!("Invalid amount: {}", e)))?;

    if !amount.is_positive() {
        return Err(SpendwiseError::Validation(format!(
            "Amount must be greater than zero (got '{}')",
            input.trim()
        )));
    }

    if amount > Money::MAX_ENTRY {
        return Err(SpendwiseError::Validation(format!(
            "Amount must not exceed {} (got '{}')",
            Money::MAX_ENTRY,
            input.trim()
        )));
    }

    Ok(amount)
}

pub fn parse_category(input: &str) -> SpendwiseResult<Category> {
    input
        .parse()
        .map_err(|e: crate::models::UnknownCategory| SpendwiseError::Validation(e.to_string()))
}

/// Parse an optional month: "YYYY-MM", "current" or "last"
pub fn parse_month(input: Option<&str>) -> SpendwiseResult<Option<MonthPeriod>> {
    let Some(input) = input else {
        return Ok(None);
    };

    let period = match input.trim().to_lowercase().as_str() {
        "current" | "this" | "now" => MonthPeriod::current(),
        "last" | "previous" | "prev" => MonthPeriod::current().previous(),
        other => MonthPeriod::parse(other).map_err(|e| SpendwiseError::Validation(e.to_string()))?,
    };

    Ok(Some(period))
}

pub fn parse_date(input: &str) -> SpendwiseResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        SpendwiseError::Validation(format!(
            "Invalid date '{}', expected YYYY-MM-DD",
            input.trim()
        ))
    })
}

/// Parse a transaction date; midnight UTC on the given day
pub fn parse_instant(input: &str) -> SpendwiseResult<DateTime<Utc>> {
    let date = parse_date(input)?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
        SpendwiseError::Validation(format!("Invalid date '{}'", input.trim()))
    })?;
    Ok(Utc.from_utc_datetime(&midnight))
}

/// Heading for a month-scoped or whole-ledger view
pub fn scope_title(period: Option<MonthPeriod>) -> String {
    match period {
        Some(period) => period.label(),
        None => "All time".to_string(),
    }
}
