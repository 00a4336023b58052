//! Transaction CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_category, parse_instant, parse_month};
use crate::config::settings::Settings;
use crate::display::{format_tags, format_transaction_details, format_transaction_table};
use crate::engine::HistoryQuery;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Category, PaymentMethod, Transaction, TransactionType};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Log an income or expense entry
    Add {
        /// "expense" or "income"
        kind: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category (defaults to Food for expenses, Salary for income)
        #[arg(short, long)]
        category: Option<String>,
        /// Note (defaults to the category label)
        #[arg(short, long)]
        note: Option<String>,
        /// Payment method (Cash, UPI, Debit Card, Credit Card, Net Banking)
        #[arg(short, long)]
        payment: Option<String>,
        /// Date (YYYY-MM-DD, defaults to now)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Month to show (YYYY-MM, "current", "last")
        #[arg(short, long)]
        month: Option<String>,
        /// Match against note or category
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one transaction
    Show {
        /// Transaction ID (or prefix)
        id: String,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID (or prefix)
        id: String,
    },

    /// Delete every transaction
    Clear {
        /// Skip the confirmation flag check
        #[arg(long)]
        yes: bool,
    },

    /// Replace the ledger with the sample data
    RestoreSamples,

    /// Show quick-note suggestions for a category
    Tags {
        /// Category name
        category: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> SpendwiseResult<()> {
    let symbol = settings.currency_symbol();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            note,
            payment,
            date,
        } => {
            let kind: TransactionType = kind.parse().map_err(SpendwiseError::Validation)?;
            let amount = parse_amount(&amount)?;
            let category = match category {
                Some(c) => parse_category(&c)?,
                None => Category::default_for(kind),
            };

            let mut txn = Transaction::new(kind, amount, category);
            if let Some(note) = note {
                txn = txn.with_note(note);
            }
            if let Some(payment) = payment {
                let method: PaymentMethod = payment.parse().map_err(SpendwiseError::Validation)?;
                txn = txn.with_payment_method(method);
            }
            if let Some(date) = date {
                txn = txn.with_date(parse_instant(&date)?);
            }

            let mut state = storage.load();
            let added = state.add_transaction(txn)?.clone();
            storage.save(&state)?;

            println!("Added transaction: {}", added.id);
            print!("{}", format_transaction_details(&added, symbol));
        }

        TransactionCommands::List { month, search } => {
            let query = HistoryQuery {
                period: parse_month(month.as_deref())?,
                search,
            };
            let state = storage.load();
            let history = state.history(&query);

            print!("{}", format_transaction_table(&history, symbol));
            if !history.is_empty() {
                println!("{} transaction(s)", history.len());
            }
        }

        TransactionCommands::Show { id } => {
            let state = storage.load();
            let txn = state.find_transaction(&id)?;
            print!("{}", format_transaction_details(txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            let mut state = storage.load();
            let removed = state.remove_transaction(&id)?;
            storage.save(&state)?;
            println!("Deleted transaction: {} ({})", removed.id, removed.note);
        }

        TransactionCommands::Clear { yes } => {
            if !yes {
                return Err(SpendwiseError::Validation(
                    "This deletes every transaction. Re-run with --yes to confirm".into(),
                ));
            }
            let mut state = storage.load();
            let count = state.clear_transactions();
            storage.save(&state)?;
            println!("Deleted {} transaction(s)", count);
        }

        TransactionCommands::RestoreSamples => {
            let mut state = storage.load();
            state.restore_samples(chrono::Utc::now());
            storage.save(&state)?;
            println!(
                "Restored {} sample transaction(s)",
                state.transactions().len()
            );
        }

        TransactionCommands::Tags { category } => {
            print!("{}", format_tags(parse_category(&category)?));
        }
    }

    Ok(())
}
