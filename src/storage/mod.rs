//! Storage layer for SpendWise
//!
//! Each collection lives in its own JSON array file under the data
//! directory. Writes are atomic; reads never fail. Records that cannot be
//! read are skipped, and an unreadable file falls back to the sample ledger
//! (transactions) or an empty list (everything else).

pub mod file_io;

pub use file_io::{read_json, read_json_list_or_else, read_json_or_else, write_json_atomic};

use chrono::Utc;
use tracing::debug;

use crate::config::paths::SpendwisePaths;
use crate::error::SpendwiseError;
use crate::models::{Budget, Subscription, Transaction};
use crate::seed;
use crate::state::AppState;

/// Loads and saves [`AppState`]
#[derive(Debug, Clone)]
pub struct Storage {
    paths: SpendwisePaths,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: SpendwisePaths) -> Result<Self, SpendwiseError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &SpendwisePaths {
        &self.paths
    }

    pub fn load_transactions(&self) -> Vec<Transaction> {
        read_json_list_or_else(self.paths.transactions_file(), || {
            seed::sample_ledger(Utc::now())
        })
    }

    pub fn load_budgets(&self) -> Vec<Budget> {
        read_json_list_or_else(self.paths.budgets_file(), Vec::new)
    }

    pub fn load_subscriptions(&self) -> Vec<Subscription> {
        read_json_list_or_else(self.paths.subscriptions_file(), Vec::new)
    }

    /// Load all collections
    pub fn load(&self) -> AppState {
        let state = AppState::new(
            self.load_transactions(),
            self.load_budgets(),
            self.load_subscriptions(),
        );
        debug!(
            transactions = state.transactions().len(),
            budgets = state.budgets().len(),
            subscriptions = state.subscriptions().len(),
            "state loaded"
        );
        state
    }

    /// Save all collections
    pub fn save(&self, state: &AppState) -> Result<(), SpendwiseError> {
        write_json_atomic(self.paths.transactions_file(), state.transactions())?;
        write_json_atomic(self.paths.budgets_file(), state.budgets())?;
        write_json_atomic(self.paths.subscriptions_file(), state.subscriptions())?;
        Ok(())
    }
}
