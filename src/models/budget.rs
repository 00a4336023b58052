//! Budget goal model
//!
//! A goal is a spending limit tied to an expense category. Several goals may
//! target the same category; each one is evaluated against the category's
//! full spend.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::BudgetId;
use super::money::Money;

/// A spending goal for one expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: BudgetId,

    /// Optional display name ("Weekend dining")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub category: Category,

    pub limit: Money,
}

impl Budget {
    /// Create a new unnamed goal
    pub fn new(category: Category, limit: Money) -> Self {
        Self {
            id: BudgetId::new(),
            name: None,
            category,
            limit,
        }
    }

    /// Create a named goal; blank names are dropped
    pub fn named(name: impl Into<String>, category: Category, limit: Money) -> Self {
        let mut budget = Self::new(category, limit);
        let name = name.into();
        if !name.trim().is_empty() {
            budget.name = Some(name.trim().to_string());
        }
        budget
    }

    /// Display name, falling back to the category label
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.category.label())
    }

    /// Goals with a zero or negative limit are ignored by the evaluator
    pub fn is_active(&self) -> bool {
        self.limit.is_positive()
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.category.is_expense() {
            return Err(BudgetValidationError::IncomeCategory(self.category));
        }

        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (limit {})", self.display_name(), self.limit)
    }
}

/// Validation errors for budget goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    IncomeCategory(Category),
    NonPositiveLimit,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncomeCategory(category) => write!(
                f,
                "Budgets can only target expense categories, not '{}'",
                category
            ),
            Self::NonPositiveLimit => write!(f, "Budget limit must be greater than zero"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
