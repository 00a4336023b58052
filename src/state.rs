//! In-memory ledger state
//!
//! `AppState` owns the ordered transaction list, the budget goals and the
//! subscriptions. It is created by the host shell (usually from
//! [`crate::storage::Storage::load`]) and only changes through the whole-value
//! operations below. Derived figures are recomputed from the current snapshot
//! on every call.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::engine::{self, BudgetReport, HistoryQuery, LedgerSummary, SubscriptionSummary};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Budget, MonthPeriod, Subscription, Transaction};
use crate::seed;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    subscriptions: Vec<Subscription>,
}

impl AppState {
    /// Assemble state from already-loaded collections
    pub fn new(
        transactions: Vec<Transaction>,
        budgets: Vec<Budget>,
        subscriptions: Vec<Subscription>,
    ) -> Self {
        Self {
            transactions,
            budgets,
            subscriptions,
        }
    }

    /// State holding only the sample ledger
    pub fn with_samples(now: DateTime<Utc>) -> Self {
        Self {
            transactions: seed::sample_ledger(now),
            ..Self::default()
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    // ============================================
    // Transactions
    // ============================================

    /// Append a transaction after validating it
    pub fn add_transaction(&mut self, txn: Transaction) -> SpendwiseResult<&Transaction> {
        txn.validate()
            .map_err(|e| SpendwiseError::Validation(e.to_string()))?;

        debug!(id = %txn.id, category = %txn.category, "transaction added");
        self.transactions.push(txn);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Look up a transaction by id or unambiguous id prefix
    pub fn find_transaction(&self, id: &str) -> SpendwiseResult<&Transaction> {
        let index = resolve(&self.transactions, id, |t| t.id.as_str(), "Transaction")?;
        Ok(&self.transactions[index])
    }

    /// Remove a transaction by id or unambiguous id prefix
    pub fn remove_transaction(&mut self, id: &str) -> SpendwiseResult<Transaction> {
        let index = resolve(&self.transactions, id, |t| t.id.as_str(), "Transaction")?;
        let removed = self.transactions.remove(index);
        debug!(id = %removed.id, "transaction removed");
        Ok(removed)
    }

    /// Drop every transaction; budgets and subscriptions are kept
    pub fn clear_transactions(&mut self) -> usize {
        let count = self.transactions.len();
        self.transactions.clear();
        debug!(count, "transactions cleared");
        count
    }

    /// Replace the ledger with the sample data
    pub fn restore_samples(&mut self, now: DateTime<Utc>) {
        self.transactions = seed::sample_ledger(now);
        debug!("sample ledger restored");
    }

    // ============================================
    // Budgets
    // ============================================

    pub fn add_budget(&mut self, budget: Budget) -> SpendwiseResult<&Budget> {
        budget
            .validate()
            .map_err(|e| SpendwiseError::Validation(e.to_string()))?;

        debug!(id = %budget.id, category = %budget.category, "budget added");
        self.budgets.push(budget);
        Ok(&self.budgets[self.budgets.len() - 1])
    }

    pub fn remove_budget(&mut self, id: &str) -> SpendwiseResult<Budget> {
        let index = resolve(&self.budgets, id, |b| b.id.as_str(), "Budget")?;
        Ok(self.budgets.remove(index))
    }

    /// Replace every goal at once; nothing changes if any goal is invalid
    pub fn replace_budgets(&mut self, budgets: Vec<Budget>) -> SpendwiseResult<()> {
        for budget in &budgets {
            budget.validate().map_err(|e| {
                SpendwiseError::Validation(format!("{}: {}", budget.display_name(), e))
            })?;
        }
        self.budgets = budgets;
        Ok(())
    }

    // ============================================
    // Subscriptions
    // ============================================

    pub fn add_subscription(&mut self, subscription: Subscription) -> SpendwiseResult<&Subscription> {
        subscription
            .validate()
            .map_err(|e| SpendwiseError::Validation(e.to_string()))?;

        debug!(id = %subscription.id, name = %subscription.name, "subscription added");
        self.subscriptions.push(subscription);
        Ok(&self.subscriptions[self.subscriptions.len() - 1])
    }

    pub fn remove_subscription(&mut self, id: &str) -> SpendwiseResult<Subscription> {
        let index = resolve(&self.subscriptions, id, |s| s.id.as_str(), "Subscription")?;
        Ok(self.subscriptions.remove(index))
    }

    /// Advance every overdue billing date past `today`
    pub fn roll_subscriptions_forward(&mut self, today: chrono::NaiveDate) -> usize {
        let mut rolled = 0;
        for sub in &mut self.subscriptions {
            if sub.next_billing_date < today {
                *sub = sub.rolled_forward(today);
                rolled += 1;
            }
        }
        rolled
    }

    // ============================================
    // Derived views
    // ============================================

    /// Summary of the whole ledger or of a single month
    pub fn summary(&self, period: Option<MonthPeriod>) -> LedgerSummary {
        match period {
            Some(period) => engine::summarize(engine::in_period(&self.transactions, period)),
            None => engine::summarize(&self.transactions),
        }
    }

    /// Budget progress over the whole ledger or a single month
    pub fn budget_report(&self, period: Option<MonthPeriod>) -> BudgetReport {
        let summary = self.summary(period);
        engine::evaluate(&summary.category_totals, summary.total_expense, &self.budgets)
    }

    pub fn history(&self, query: &HistoryQuery) -> Vec<Transaction> {
        query.apply(&self.transactions)
    }

    pub fn subscription_summary(&self) -> SubscriptionSummary {
        engine::summarize_subscriptions(&self.subscriptions)
    }
}

/// Index of the single item whose id equals `query` or starts with it
fn resolve<T>(
    items: &[T],
    query: &str,
    id_of: impl Fn(&T) -> &str,
    entity_type: &'static str,
) -> SpendwiseResult<usize> {
    let query = query.trim();
    let not_found = || SpendwiseError::not_found(entity_type, query);

    if query.is_empty() {
        return Err(not_found());
    }

    if let Some(index) = items.iter().position(|item| id_of(item) == query) {
        return Ok(index);
    }

    let mut matches = items
        .iter()
        .enumerate()
        .filter(|(_, item)| id_of(item).starts_with(query))
        .map(|(index, _)| index);

    match (matches.next(), matches.next()) {
        (Some(index), None) => Ok(index),
        (Some(_), Some(_)) => Err(SpendwiseError::Validation(format!(
            "{} id prefix '{}' is ambiguous",
            entity_type, query
        ))),
        (None, _) => Err(not_found()),
    }
}
