//! Ledger aggregation
//!
//! Derives totals, per-category expense rollups and the sorted breakdown
//! list from a snapshot of transactions. The functions here aggregate exactly
//! what they are given; period selection happens before the call (see
//! [`super::filter`]).

use tracing::{debug, warn};

use crate::models::{Category, Money, Subscription, Transaction, TransactionType};

/// Expense totals per category, in order of first occurrence in the input
///
/// Only expense categories with spending appear. Looking up any other
/// category yields zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(Category, Money)>,
}

impl CategoryTotals {
    fn add(&mut self, category: Category, amount: Money) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category, amount)),
        }
    }

    /// Total spent in `category` (zero when absent)
    pub fn get(&self, category: Category) -> Money {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, amount)| *amount)
            .unwrap_or_default()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.entries.iter().any(|(c, _)| *c == category)
    }

    /// Iterate in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One row of the spending breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub amount: Money,
    /// Share of total expense, 0-100
    pub percentage: f64,
    pub color: &'static str,
}

/// Everything derived from one ledger snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSummary {
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense; may be negative
    pub balance: Money,
    pub category_totals: CategoryTotals,
    /// Expense categories with spending, largest first
    pub breakdown: Vec<CategoryBreakdown>,
    /// Number of records ignored because they were invalid
    pub skipped: usize,
}

impl LedgerSummary {
    /// Number of categories shown in the breakdown ("N categories active")
    pub fn active_categories(&self) -> usize {
        self.breakdown.len()
    }

    pub fn has_expenses(&self) -> bool {
        !self.breakdown.is_empty()
    }

    /// Breakdown row for a category, if it has spending
    pub fn breakdown_for(&self, category: Category) -> Option<&CategoryBreakdown> {
        self.breakdown.iter().find(|row| row.category == category)
    }
}

/// Aggregate a snapshot of transactions
///
/// Transactions with a non-positive amount, or whose category does not match
/// their type, are skipped entirely so that `total_expense` is always the
/// sum of the amounts behind the breakdown.
pub fn summarize<'a, I>(transactions: I) -> LedgerSummary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut total_income = Money::zero();
    let mut total_expense = Money::zero();
    let mut category_totals = CategoryTotals::default();
    let mut skipped = 0;
    let mut seen = 0;

    for txn in transactions {
        seen += 1;

        if let Err(e) = txn.validate() {
            warn!(id = %txn.id, error = %e, "skipping invalid transaction");
            skipped += 1;
            continue;
        }

        match txn.kind {
            TransactionType::Income => total_income += txn.amount,
            TransactionType::Expense => {
                total_expense += txn.amount;
                category_totals.add(txn.category, txn.amount);
            }
        }
    }

    let breakdown = build_breakdown(&category_totals, total_expense);

    debug!(
        transactions = seen,
        skipped,
        categories = breakdown.len(),
        "ledger summarized"
    );

    LedgerSummary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
        category_totals,
        breakdown,
        skipped,
    }
}

fn build_breakdown(totals: &CategoryTotals, total_expense: Money) -> Vec<CategoryBreakdown> {
    if !total_expense.is_positive() {
        return Vec::new();
    }

    let total = total_expense.cents() as f64;
    let mut rows: Vec<CategoryBreakdown> = totals
        .iter()
        .filter(|(category, amount)| category.is_expense() && amount.is_positive())
        .map(|(category, amount)| CategoryBreakdown {
            category,
            amount,
            percentage: 100.0 * amount.cents() as f64 / total,
            color: category.color(),
        })
        .collect();

    // Stable sort keeps first-occurrence order for equal amounts
    rows.sort_by(|a, b| b.amount.cmp(&a.amount));
    rows
}

/// Recurring-cost rollup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionSummary {
    pub count: usize,
    /// Sum of monthly-equivalent costs
    pub monthly_total: Money,
    pub yearly_total: Money,
    /// Subscriptions ordered by monthly-equivalent cost, most expensive first
    pub by_cost: Vec<Subscription>,
}

/// Normalize every subscription to a monthly cost and total them
pub fn summarize_subscriptions(subscriptions: &[Subscription]) -> SubscriptionSummary {
    let mut by_cost: Vec<Subscription> = subscriptions
        .iter()
        .filter(|s| s.amount.is_positive())
        .cloned()
        .collect();
    by_cost.sort_by(|a, b| b.monthly_equivalent().cmp(&a.monthly_equivalent()));

    let monthly_total: Money = by_cost.iter().map(Subscription::monthly_equivalent).sum();

    SubscriptionSummary {
        count: by_cost.len(),
        monthly_total,
        yearly_total: Money::from_cents(monthly_total.cents().saturating_mul(12)),
        by_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingCycle, SubscriptionInput, SubscriptionOptions};
    use chrono::NaiveDate;

    fn expense(cents: i64, category: Category) -> Transaction {
        Transaction::expense(Money::from_cents(cents), category)
    }

    fn income(cents: i64, category: Category) -> Transaction {
        Transaction::income(Money::from_cents(cents), category)
    }

    #[test]
    fn test_totals_and_balance() {
        let txns = vec![
            expense(10000, Category::Food),
            expense(30000, Category::Housing),
            income(100000, Category::Salary),
        ];
        let summary = summarize(&txns);

        assert_eq!(summary.total_income.cents(), 100000);
        assert_eq!(summary.total_expense.cents(), 40000);
        assert_eq!(summary.balance.cents(), 60000);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_negative_balance_is_preserved() {
        let txns = vec![expense(5000, Category::Travel), income(2000, Category::Gift)];
        let summary = summarize(&txns);
        assert_eq!(summary.balance.cents(), -3000);
    }

    #[test]
    fn test_breakdown_sorted_with_percentages() {
        let txns = vec![
            expense(10000, Category::Food),
            expense(30000, Category::Housing),
            expense(5000, Category::Food),
        ];
        let summary = summarize(&txns);

        let cats: Vec<_> = summary.breakdown.iter().map(|r| r.category).collect();
        assert_eq!(cats, vec![Category::Housing, Category::Food]);
        assert_eq!(summary.breakdown[1].amount.cents(), 15000);
        assert!((summary.breakdown[0].percentage - 66.666_666).abs() < 0.001);
        assert_eq!(summary.breakdown[0].color, Category::Housing.color());
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let txns = vec![
            expense(2000, Category::Travel),
            expense(5000, Category::Health),
            expense(2000, Category::Education),
            expense(2000, Category::Food),
        ];
        let summary = summarize(&txns);

        let cats: Vec<_> = summary.breakdown.iter().map(|r| r.category).collect();
        assert_eq!(
            cats,
            vec![
                Category::Health,
                Category::Travel,
                Category::Education,
                Category::Food
            ]
        );
    }

    #[test]
    fn test_income_never_in_category_totals() {
        let txns = vec![income(5000, Category::Salary), income(100, Category::Gift)];
        let summary = summarize(&txns);

        assert!(summary.category_totals.is_empty());
        assert!(summary.breakdown.is_empty());
        assert_eq!(summary.category_totals.get(Category::Salary), Money::zero());
    }

    #[test]
    fn test_invalid_records_are_skipped() {
        let txns = vec![
            expense(0, Category::Food),
            expense(-500, Category::Food),
            // Expense filed under an income category
            expense(700, Category::Salary),
            expense(1000, Category::Transport),
        ];
        let summary = summarize(&txns);

        assert_eq!(summary.skipped, 3);
        assert_eq!(summary.total_expense.cents(), 1000);
        assert_eq!(summary.breakdown.len(), 1);
        assert_eq!(summary.breakdown[0].percentage, 100.0);
    }

    #[test]
    fn test_empty_input() {
        let summary = summarize(&[]);
        assert_eq!(summary, LedgerSummary::default());
        assert_eq!(summary.active_categories(), 0);
        assert!(!summary.has_expenses());
    }

    #[test]
    fn test_accepts_filtered_iterators() {
        let txns = vec![expense(1000, Category::Food), expense(3000, Category::Family)];
        let summary = summarize(txns.iter().filter(|t| t.category == Category::Family));
        assert_eq!(summary.total_expense.cents(), 3000);
        assert!(summary.breakdown_for(Category::Food).is_none());
    }

    #[test]
    fn test_oversized_amounts_are_skipped() {
        let huge = Money::parse("90000000000000000").unwrap();
        let txns = vec![
            Transaction::expense(huge, Category::Food),
            Transaction::expense(huge, Category::Housing),
            expense(500, Category::Food),
        ];

        let summary = summarize(&txns);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.total_expense.cents(), 500);
        assert_eq!(summary.breakdown.len(), 1);
    }

    #[test]
    fn test_totals_saturate_instead_of_wrapping() {
        let txns: Vec<Transaction> = (0..100_000)
            .map(|_| Transaction::expense(Money::MAX_ENTRY, Category::Travel))
            .collect();

        let summary = summarize(&txns);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.total_expense.cents(), i64::MAX);
        assert!(summary.balance.is_negative());
        assert_eq!(summary.breakdown.len(), 1);
        assert!((summary.breakdown[0].percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_subscription_rollup() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let make = |name: &str, cents: i64, cycle: BillingCycle| {
            Subscription::build(
                SubscriptionInput {
                    name: name.to_string(),
                    amount: Money::from_cents(cents),
                },
                SubscriptionOptions::default().cycle(cycle),
                today,
            )
        };
        let subs = vec![
            make("Spotify", 999, BillingCycle::Monthly),
            make("Adobe", 65988, BillingCycle::Yearly),
            make("Box", 3000, BillingCycle::Quarterly),
        ];

        let summary = summarize_subscriptions(&subs);
        assert_eq!(summary.count, 3);
        // 9.99 + 54.99 + 10.00
        assert_eq!(summary.monthly_total.cents(), 999 + 5499 + 1000);
        assert_eq!(summary.yearly_total.cents(), (999 + 5499 + 1000) * 12);
        assert_eq!(summary.by_cost[0].name, "Adobe");
        assert_eq!(summary.by_cost[2].name, "Spotify");
    }
}
