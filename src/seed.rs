//! Built-in data: the sample ledger and quick-add subscription presets

use chrono::{DateTime, Utc};

use crate::models::{
    Category, Money, PaymentMethod, Subscription, SubscriptionInput, SubscriptionOptions,
    Transaction, TransactionId, TransactionType,
};

/// A common subscription offered for one-step adding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionPreset {
    pub name: &'static str,
    /// Monthly price
    pub amount: Money,
    /// Brand color
    pub color: &'static str,
}

impl SubscriptionPreset {
    /// Build a monthly subscription from this preset
    pub fn to_subscription(&self, today: chrono::NaiveDate) -> Subscription {
        Subscription::build(
            SubscriptionInput {
                name: self.name.to_string(),
                amount: self.amount,
            },
            SubscriptionOptions::default(),
            today,
        )
    }
}

pub const SUBSCRIPTION_PRESETS: [SubscriptionPreset; 9] = [
    SubscriptionPreset {
        name: "Netflix",
        amount: Money::from_cents(1599),
        color: "#E50914",
    },
    SubscriptionPreset {
        name: "Disney+",
        amount: Money::from_cents(799),
        color: "#006E99",
    },
    SubscriptionPreset {
        name: "Amazon Prime",
        amount: Money::from_cents(1499),
        color: "#FF9900",
    },
    SubscriptionPreset {
        name: "Spotify",
        amount: Money::from_cents(999),
        color: "#1DB954",
    },
    SubscriptionPreset {
        name: "YouTube Premium",
        amount: Money::from_cents(1199),
        color: "#FF0000",
    },
    SubscriptionPreset {
        name: "Apple Music",
        amount: Money::from_cents(1099),
        color: "#FB233B",
    },
    SubscriptionPreset {
        name: "ChatGPT Plus",
        amount: Money::from_cents(2000),
        color: "#10a37f",
    },
    SubscriptionPreset {
        name: "iCloud+",
        amount: Money::from_cents(99),
        color: "#007AFF",
    },
    SubscriptionPreset {
        name: "Adobe CC",
        amount: Money::from_cents(5499),
        color: "#FF0000",
    },
];

/// Find a preset by name, ignoring case and spacing
pub fn find_preset(name: &str) -> Option<&'static SubscriptionPreset> {
    let needle = normalize(name);
    SUBSCRIPTION_PRESETS
        .iter()
        .find(|preset| normalize(preset.name) == needle)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// The demo ledger: one salary and one expense in every expense category,
/// all dated `now`
pub fn sample_ledger(now: DateTime<Utc>) -> Vec<Transaction> {
    use Category::*;
    use PaymentMethod::*;
    use TransactionType::{Expense, Income};

    let rows: [(TransactionType, Category, i64, &str, PaymentMethod); 11] = [
        (Income, Salary, 5000, "Monthly Salary", NetBanking),
        (Expense, Housing, 850, "Rent", NetBanking),
        (Expense, Food, 620, "Weekly Groceries", Upi),
        (Expense, Finance, 610, "Credit Card Pay", NetBanking),
        (Expense, Travel, 380, "Hotel Booking", CreditCard),
        (Expense, Lifestyle, 320, "New Clothes", DebitCard),
        (Expense, Health, 250, "Pharmacy", Upi),
        (Expense, Education, 240, "Online Course", CreditCard),
        (Expense, Transport, 190, "Gas", Upi),
        (Expense, Family, 180, "Dinner", DebitCard),
        (Expense, Entertainment, 150, "Cinema", Upi),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (kind, category, units, note, method))| {
            Transaction::new(*kind, Money::from_units_cents(*units, 0), *category)
                .with_id(TransactionId::from_string(i.to_string()))
                .with_note(*note)
                .with_payment_method(*method)
                .with_date(now)
        })
        .collect()
}
