//! Core data models for SpendWise
//!
//! This module contains the records that make up the ledger (transactions,
//! budget goals, subscriptions) and the value types they are built from.

pub mod budget;
pub mod category;
pub mod currency;
pub mod ids;
pub mod money;
pub mod period;
pub mod subscription;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::{Category, UnknownCategory};
pub use currency::Currency;
pub use ids::{BudgetId, SubscriptionId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{MonthPeriod, PeriodParseError};
pub use subscription::{
    BillingCycle, Subscription, SubscriptionInput, SubscriptionOptions,
    SubscriptionValidationError,
};
pub use transaction::{
    PaymentMethod, Transaction, TransactionType, TransactionValidationError,
};
