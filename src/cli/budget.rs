//! Budget CLI commands
//!
//! Implements CLI commands for spending goals: adding, listing progress and
//! removing.

use clap::Subcommand;

use super::{parse_amount, parse_category, parse_month, scope_title};
use crate::config::settings::Settings;
use crate::display::{format_budget_list, format_budget_report};
use crate::error::SpendwiseResult;
use crate::models::{Budget, MonthPeriod};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Add a spending goal for an expense category
    Add {
        /// Category name
        category: String,
        /// Limit (e.g., "500" or "500.00")
        limit: String,
        /// Display name for the goal
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show goal progress
    List {
        /// Month to measure (YYYY-MM, "current", "last"); overrides the
        /// configured scope
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List goals without progress
    Goals,

    /// Remove a goal
    Remove {
        /// Goal ID (or prefix)
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SpendwiseResult<()> {
    let symbol = settings.currency_symbol();

    match cmd {
        BudgetCommands::Add {
            category,
            limit,
            name,
        } => {
            let category = parse_category(&category)?;
            let limit = parse_amount(&limit)?;
            let budget = match name {
                Some(name) => Budget::named(name, category, limit),
                None => Budget::new(category, limit),
            };

            let mut state = storage.load();
            let added = state.add_budget(budget)?.clone();
            storage.save(&state)?;

            println!("Added goal: {} ({})", added, added.id.short());
        }

        BudgetCommands::List { month } => {
            let period = match parse_month(month.as_deref())? {
                Some(period) => Some(period),
                None => settings.budget_scope.period(MonthPeriod::current()),
            };

            let state = storage.load();
            let report = state.budget_report(period);

            println!("Budget goals: {}", scope_title(period));
            println!();
            print!("{}", format_budget_report(&report, symbol));
        }

        BudgetCommands::Goals => {
            let state = storage.load();
            print!("{}", format_budget_list(state.budgets(), symbol));
        }

        BudgetCommands::Remove { id } => {
            let mut state = storage.load();
            let removed = state.remove_budget(&id)?;
            storage.save(&state)?;
            println!("Removed goal: {}", removed.display_name());
        }
    }

    Ok(())
}
