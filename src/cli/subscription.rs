//! Subscription CLI commands

use chrono::Local;
use clap::Subcommand;

use super::{parse_amount, parse_category, parse_date};
use crate::config::settings::Settings;
use crate::display::{format_presets, format_subscription_summary};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{BillingCycle, Subscription, SubscriptionInput, SubscriptionOptions};
use crate::seed;
use crate::storage::Storage;

/// Subscription subcommands
#[derive(Subcommand)]
pub enum SubscriptionCommands {
    /// Track a recurring cost
    Add {
        /// Service name
        name: String,
        /// Price per billing cycle
        amount: String,
        /// Billing cycle (monthly, quarterly, yearly)
        #[arg(long, default_value = "monthly")]
        cycle: String,
        /// Next billing date (YYYY-MM-DD, defaults to one month from today)
        #[arg(long)]
        next: Option<String>,
        /// Disable the billing reminder
        #[arg(long)]
        no_alert: bool,
        /// Days ahead of billing to start reminding
        #[arg(long)]
        lead_days: Option<u32>,
        /// Category (defaults to Entertainment)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add one of the built-in presets (see `presets`)
    Preset {
        /// Preset name, e.g. "Netflix"
        name: String,
    },

    /// List subscriptions with monthly totals and reminders
    List,

    /// Stop tracking a subscription
    Remove {
        /// Subscription ID (or prefix)
        id: String,
    },

    /// Show the built-in presets
    Presets,
}

/// Handle a subscription command
pub fn handle_subscription_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SubscriptionCommands,
) -> SpendwiseResult<()> {
    let symbol = settings.currency_symbol();
    let today = Local::now().date_naive();

    match cmd {
        SubscriptionCommands::Add {
            name,
            amount,
            cycle,
            next,
            no_alert,
            lead_days,
            category,
        } => {
            let cycle: BillingCycle = cycle.parse().map_err(SpendwiseError::Validation)?;
            let mut options = SubscriptionOptions::default()
                .cycle(cycle)
                .alert(!no_alert);
            if let Some(next) = next {
                options = options.next_billing(parse_date(&next)?);
            }
            if let Some(days) = lead_days {
                options = options.lead_days(days);
            }
            if let Some(category) = category {
                options = options.category(parse_category(&category)?);
            }

            let input = SubscriptionInput {
                name,
                amount: parse_amount(&amount)?,
            };
            add(storage, Subscription::build(input, options, today), symbol)?;
        }

        SubscriptionCommands::Preset { name } => {
            let preset = seed::find_preset(&name)
                .ok_or_else(|| SpendwiseError::not_found("Preset", name.trim()))?;
            add(storage, preset.to_subscription(today), symbol)?;
        }

        SubscriptionCommands::List => {
            let mut state = storage.load();
            if state.roll_subscriptions_forward(today) > 0 {
                storage.save(&state)?;
            }
            let summary = state.subscription_summary();
            print!("{}", format_subscription_summary(&summary, symbol, today));
        }

        SubscriptionCommands::Remove { id } => {
            let mut state = storage.load();
            let removed = state.remove_subscription(&id)?;
            storage.save(&state)?;
            println!("Removed subscription: {}", removed.name);
        }

        SubscriptionCommands::Presets => {
            print!("{}", format_presets(symbol));
        }
    }

    Ok(())
}

fn add(storage: &Storage, subscription: Subscription, symbol: &str) -> SpendwiseResult<()> {
    let mut state = storage.load();
    let added = state.add_subscription(subscription)?.clone();
    storage.save(&state)?;

    println!(
        "Added subscription: {} ({} / {}, next bill {})",
        added.name,
        added.amount.format_with_symbol(symbol),
        added.billing_cycle.to_string().to_lowercase(),
        added.next_billing_date.format("%Y-%m-%d")
    );
    Ok(())
}
