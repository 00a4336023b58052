//! Category model
//!
//! Categories form a closed set split into expense and income categories.
//! Every piece of per-category metadata (label, chart color, icon, quick
//! tags) is an exhaustive `match`, so adding a variant does not compile until
//! each table is updated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::TransactionType;

/// A spending or income category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Housing & Utilities")]
    Housing,
    #[serde(rename = "Food & Groceries")]
    Food,
    #[serde(rename = "Financial Commitments")]
    Finance,
    #[serde(rename = "Travel & Vacation")]
    Travel,
    #[serde(rename = "Personal & Lifestyle")]
    Lifestyle,
    #[serde(rename = "Health & Medical")]
    Health,
    #[serde(rename = "Education & Learning")]
    Education,
    #[serde(rename = "Transportation")]
    Transport,
    #[serde(rename = "Family & Social")]
    Family,
    #[serde(rename = "Entertainment & Leisure")]
    Entertainment,
    #[serde(rename = "Salary")]
    Salary,
    #[serde(rename = "Freelance")]
    Freelance,
    #[serde(rename = "Investments")]
    Investments,
    #[serde(rename = "Gift")]
    Gift,
    #[serde(rename = "Other Income")]
    OtherIncome,
}

impl Category {
    /// Every category, expense categories first, in display order
    pub const ALL: [Category; 15] = [
        Category::Housing,
        Category::Food,
        Category::Finance,
        Category::Travel,
        Category::Lifestyle,
        Category::Health,
        Category::Education,
        Category::Transport,
        Category::Family,
        Category::Entertainment,
        Category::Salary,
        Category::Freelance,
        Category::Investments,
        Category::Gift,
        Category::OtherIncome,
    ];

    pub const EXPENSE: [Category; 10] = [
        Category::Housing,
        Category::Food,
        Category::Finance,
        Category::Travel,
        Category::Lifestyle,
        Category::Health,
        Category::Education,
        Category::Transport,
        Category::Family,
        Category::Entertainment,
    ];

    pub const INCOME: [Category; 5] = [
        Category::Salary,
        Category::Freelance,
        Category::Investments,
        Category::Gift,
        Category::OtherIncome,
    ];

    /// Which transaction type this category belongs to
    pub const fn kind(&self) -> TransactionType {
        match self {
            Self::Housing
            | Self::Food
            | Self::Finance
            | Self::Travel
            | Self::Lifestyle
            | Self::Health
            | Self::Education
            | Self::Transport
            | Self::Family
            | Self::Entertainment => TransactionType::Expense,
            Self::Salary | Self::Freelance | Self::Investments | Self::Gift | Self::OtherIncome => {
                TransactionType::Income
            }
        }
    }

    pub const fn is_expense(&self) -> bool {
        matches!(self.kind(), TransactionType::Expense)
    }

    pub const fn is_income(&self) -> bool {
        matches!(self.kind(), TransactionType::Income)
    }

    /// The category preselected for a new transaction of the given type
    pub const fn default_for(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Expense => Self::Food,
            TransactionType::Income => Self::Salary,
        }
    }

    /// Categories valid for the given transaction type
    pub fn for_kind(kind: TransactionType) -> &'static [Category] {
        match kind {
            TransactionType::Expense => &Self::EXPENSE,
            TransactionType::Income => &Self::INCOME,
        }
    }

    /// Human-readable label (also the serialized form)
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing & Utilities",
            Self::Food => "Food & Groceries",
            Self::Finance => "Financial Commitments",
            Self::Travel => "Travel & Vacation",
            Self::Lifestyle => "Personal & Lifestyle",
            Self::Health => "Health & Medical",
            Self::Education => "Education & Learning",
            Self::Transport => "Transportation",
            Self::Family => "Family & Social",
            Self::Entertainment => "Entertainment & Leisure",
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investments => "Investments",
            Self::Gift => "Gift",
            Self::OtherIncome => "Other Income",
        }
    }

    /// Short variant name, accepted on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Food => "food",
            Self::Finance => "finance",
            Self::Travel => "travel",
            Self::Lifestyle => "lifestyle",
            Self::Health => "health",
            Self::Education => "education",
            Self::Transport => "transport",
            Self::Family => "family",
            Self::Entertainment => "entertainment",
            Self::Salary => "salary",
            Self::Freelance => "freelance",
            Self::Investments => "investments",
            Self::Gift => "gift",
            Self::OtherIncome => "other-income",
        }
    }

    /// Chart and badge color as a hex string
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Housing => "#F8D548",
            Self::Food => "#F38B3C",
            Self::Finance => "#E94D61",
            Self::Travel => "#D63F8D",
            Self::Lifestyle => "#6B52B2",
            Self::Health => "#3062C0",
            Self::Education => "#2898D2",
            Self::Transport => "#63C1B5",
            Self::Family => "#72BF44",
            Self::Entertainment => "#A5CF4C",
            Self::Salary => "#34C759",
            Self::Freelance => "#5856D6",
            Self::Investments => "#AF52DE",
            Self::Gift => "#FF2D55",
            Self::OtherIncome => "#8E8E8E",
        }
    }

    /// Icon reference (Lucide icon name)
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Housing => "home",
            Self::Food => "shopping-cart",
            Self::Finance => "credit-card",
            Self::Travel => "plane",
            Self::Lifestyle => "shopping-bag",
            Self::Health => "heart-pulse",
            Self::Education => "graduation-cap",
            Self::Transport => "car",
            Self::Family => "users",
            Self::Entertainment => "film",
            Self::Salary => "banknote",
            Self::Freelance => "briefcase",
            Self::Investments => "trending-up",
            Self::Gift => "gift",
            Self::OtherIncome => "coins",
        }
    }

    /// Suggested quick notes offered when logging a transaction
    pub const fn tags(&self) -> &'static [&'static str] {
        match self {
            Self::Housing => &[
                "House rent",
                "Maintenance Charges",
                "Property Tax",
                "Electricity",
                "Water Bill",
            ],
            Self::Food => &["Groceries", "Dining Out", "Coffee", "Snacks"],
            Self::Finance => &["Investment", "Loan EMI", "Insurance", "Savings"],
            Self::Travel => &["Flight", "Hotel", "Taxi", "Sightseeing"],
            Self::Lifestyle => &["Clothing", "Personal Care", "Spa", "Gifts"],
            Self::Health => &["Medicine", "Doctor Visit", "Gym", "Lab Test"],
            Self::Education => &["Course Fee", "Books", "Stationery"],
            Self::Transport => &["Fuel", "Parking", "Toll", "Repairs"],
            Self::Family => &["Dining", "Gift", "Money Sent", "Event"],
            Self::Entertainment => &["Netflix", "Movies", "Gaming", "Concert"],
            Self::Salary => &["Monthly Pay", "Bonus", "Overtime"],
            Self::Freelance => &["Web Project", "Design Work", "Consultation"],
            Self::Investments => &["Dividends", "Stock Sale", "Crypto Gain"],
            Self::Gift => &["Birthday", "Holiday", "Red Envelope"],
            Self::OtherIncome => &["Sold Item", "Refund", "Tax Return"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned for unknown category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the short name ("food"), the variant name ("OtherIncome") or
    /// the full label ("Food & Groceries"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| {
                c.name().eq_ignore_ascii_case(needle)
                    || c.label().eq_ignore_ascii_case(needle)
                    || format!("{:?}", c).eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownCategory(needle.to_string()))
    }
}
