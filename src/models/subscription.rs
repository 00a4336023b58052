//! Subscription model
//!
//! Recurring costs (streaming, cloud storage, memberships). Subscriptions are
//! tracked for their monthly-equivalent cost and billing reminders only; they
//! are never turned into ledger transactions.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::SubscriptionId;
use super::money::Money;

/// How often a subscription bills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingCycle {
    /// Number of months covered by one bill
    pub const fn months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Yearly => 12,
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Quarterly => write!(f, "Quarterly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

impl FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "quarterly" | "quarter" | "q" => Ok(Self::Quarterly),
            "yearly" | "annual" | "annually" | "year" | "y" => Ok(Self::Yearly),
            other => Err(format!("Unknown billing cycle: '{}'", other)),
        }
    }
}

/// A recurring cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    /// Amount charged per billing cycle
    pub amount: Money,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: NaiveDate,
    #[serde(default = "default_alert_enabled")]
    pub alert_enabled: bool,
    #[serde(default = "default_alert_lead_days")]
    pub alert_lead_days: u32,
    #[serde(default = "default_category")]
    pub category: Category,
}

fn default_alert_enabled() -> bool {
    true
}

fn default_alert_lead_days() -> u32 {
    3
}

fn default_category() -> Category {
    Category::Entertainment
}

/// Required fields for a new subscription
#[derive(Debug, Clone)]
pub struct SubscriptionInput {
    pub name: String,
    pub amount: Money,
}

/// Optional overrides when building a subscription
///
/// Defaults: monthly cycle, first bill one month after `today`, alerts on
/// three days ahead, Entertainment category.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionOptions {
    pub billing_cycle: Option<BillingCycle>,
    pub next_billing_date: Option<NaiveDate>,
    pub alert_enabled: Option<bool>,
    pub alert_lead_days: Option<u32>,
    pub category: Option<Category>,
}

impl SubscriptionOptions {
    pub fn cycle(mut self, cycle: BillingCycle) -> Self {
        self.billing_cycle = Some(cycle);
        self
    }

    pub fn next_billing(mut self, date: NaiveDate) -> Self {
        self.next_billing_date = Some(date);
        self
    }

    pub fn alert(mut self, enabled: bool) -> Self {
        self.alert_enabled = Some(enabled);
        self
    }

    pub fn lead_days(mut self, days: u32) -> Self {
        self.alert_lead_days = Some(days);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

impl Subscription {
    /// Build a subscription from required fields plus optional overrides
    pub fn build(input: SubscriptionInput, options: SubscriptionOptions, today: NaiveDate) -> Self {
        let billing_cycle = options.billing_cycle.unwrap_or_default();
        let next_billing_date = options.next_billing_date.unwrap_or_else(|| {
            today
                .checked_add_months(Months::new(1))
                .unwrap_or(today)
        });

        Self {
            id: SubscriptionId::new(),
            name: input.name.trim().to_string(),
            amount: input.amount,
            billing_cycle,
            next_billing_date,
            alert_enabled: options.alert_enabled.unwrap_or_else(default_alert_enabled),
            alert_lead_days: options.alert_lead_days.unwrap_or_else(default_alert_lead_days),
            category: options.category.unwrap_or_else(default_category),
        }
    }

    /// Cost normalized to one month, rounded to the nearest cent
    pub fn monthly_equivalent(&self) -> Money {
        let months = self.billing_cycle.months() as f64;
        Money::from_cents((self.amount.cents() as f64 / months).round() as i64)
    }

    /// Days from `today` until the next bill (negative when overdue)
    pub fn days_until_billing(&self, today: NaiveDate) -> i64 {
        (self.next_billing_date - today).num_days()
    }

    /// Whether a billing reminder should be shown on `today`
    pub fn is_alert_due(&self, today: NaiveDate) -> bool {
        if !self.alert_enabled {
            return false;
        }
        let days = self.days_until_billing(today);
        days >= 0 && days <= i64::from(self.alert_lead_days)
    }

    /// Copy with the next billing date advanced by whole cycles until it is
    /// on or after `today`
    ///
    /// Every candidate is measured from the current billing date, so a bill
    /// on the 31st lands on the last day of short months without drifting.
    pub fn rolled_forward(&self, today: NaiveDate) -> Self {
        let anchor = self.next_billing_date;
        let cycle = self.billing_cycle.months();
        let mut next = anchor;
        let mut cycles: u32 = 0;
        while next < today {
            cycles += 1;
            match cycle
                .checked_mul(cycles)
                .and_then(|months| anchor.checked_add_months(Months::new(months)))
            {
                Some(advanced) => next = advanced,
                None => break,
            }
        }

        Self {
            next_billing_date: next,
            ..self.clone()
        }
    }

    /// Validate the subscription
    pub fn validate(&self) -> Result<(), SubscriptionValidationError> {
        if self.name.trim().is_empty() {
            return Err(SubscriptionValidationError::EmptyName);
        }

        if !self.amount.is_positive() {
            return Err(SubscriptionValidationError::NonPositiveAmount);
        }

        if !self.category.is_expense() {
            return Err(SubscriptionValidationError::IncomeCategory(self.category));
        }

        Ok(())
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (next {})",
            self.name,
            self.amount,
            self.billing_cycle,
            self.next_billing_date.format("%Y-%m-%d")
        )
    }
}

/// Validation errors for subscriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionValidationError {
    EmptyName,
    NonPositiveAmount,
    IncomeCategory(Category),
}

impl fmt::Display for SubscriptionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Subscription name cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Subscription amount must be greater than zero"),
            Self::IncomeCategory(category) => write!(
                f,
                "Subscriptions must use an expense category, not '{}'",
                category
            ),
        }
    }
}

impl std::error::Error for SubscriptionValidationError {}
