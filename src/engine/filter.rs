//! Period and search filtering for history views

use crate::models::{MonthPeriod, Transaction};

/// Transactions whose date falls within `period`
pub fn in_period<'a>(
    transactions: &'a [Transaction],
    period: MonthPeriod,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    transactions.iter().filter(move |t| period.contains(&t.date))
}

/// Filter for the transaction history list
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub period: Option<MonthPeriod>,
    pub search: Option<String>,
}

impl HistoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_month(mut self, period: MonthPeriod) -> Self {
        self.period = Some(period);
        self
    }

    pub fn matching(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Normalized search needle, or `None` when there is nothing to match
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Check whether a single transaction passes the filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(period) = self.period {
            if !period.contains(&txn.date) {
                return false;
            }
        }

        match self.needle() {
            Some(needle) => {
                txn.note.to_lowercase().contains(&needle)
                    || txn.category.label().to_lowercase().contains(&needle)
            }
            None => true,
        }
    }

    /// Matching transactions, newest first
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut result: Vec<Transaction> = transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.date.cmp(&a.date));
        result
    }
}
