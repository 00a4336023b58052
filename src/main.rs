use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendwise::cli::{
    handle_budget_command, handle_chart_command, handle_config_command, handle_export_command,
    handle_subscription_command, handle_summary_command, handle_transaction_command,
    BudgetCommands, ConfigCommands, SubscriptionCommands, TransactionCommands,
};
use spendwise::config::{paths::SpendwisePaths, settings::Settings};
use spendwise::logging;
use spendwise::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendwise",
    version,
    about = "Personal finance ledger with category breakdowns and budget goals",
    long_about = "SpendWise records income and expenses, totals them by category, \
                  tracks spending goals and recurring subscriptions, and renders \
                  a radial breakdown chart of where the money went."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show income, expenses, balance and the category breakdown
    Summary {
        /// Month to summarize (YYYY-MM, "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the ring chart layout, optionally writing an SVG
    Chart {
        /// Month to chart (YYYY-MM, "current", "last")
        #[arg(short, long)]
        month: Option<String>,
        /// Write the chart as SVG to this path
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Transaction commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Budget goal commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Subscription commands
    #[command(subcommand, alias = "subscription")]
    Sub(SubscriptionCommands),

    /// Export to CSV
    Export {
        /// Output file
        path: PathBuf,
        /// Limit to one month (YYYY-MM, "current", "last")
        #[arg(short, long)]
        month: Option<String>,
        /// Export goal progress instead of transactions
        #[arg(long)]
        budgets: bool,
    },

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();

    let paths = SpendwisePaths::new()?;
    let settings = Settings::load_or_create(&paths);
    let storage = Storage::new(paths)?;

    match cli.command {
        Some(Commands::Summary { month }) => handle_summary_command(&storage, &settings, month)?,
        Some(Commands::Chart { month, svg }) => {
            handle_chart_command(&storage, &settings, month, svg)?
        }
        Some(Commands::Txn(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Sub(cmd)) => handle_subscription_command(&storage, &settings, cmd)?,
        Some(Commands::Export {
            path,
            month,
            budgets,
        }) => handle_export_command(&storage, path, month, budgets)?,
        Some(Commands::Config(cmd)) => handle_config_command(&storage, settings, cmd)?,
        None => handle_summary_command(&storage, &settings, None)?,
    }

    Ok(())
}
