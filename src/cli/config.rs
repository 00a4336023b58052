//! Settings CLI commands

use clap::Subcommand;

use crate::config::settings::{BudgetScope, Settings};
use crate::engine::Theme;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Currency;
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings and paths
    Show,

    /// Set the display currency (USD, EUR, INR, GBP, CAD, AUD)
    Currency { code: String },

    /// Set the chart theme (light, dark)
    Theme { theme: String },

    /// Set which transactions goals are measured against (lifetime, monthly)
    Scope { scope: String },
}

/// Handle a config command
pub fn handle_config_command(
    storage: &Storage,
    mut settings: Settings,
    cmd: ConfigCommands,
) -> SpendwiseResult<()> {
    let paths = storage.paths();

    match cmd {
        ConfigCommands::Show => {
            println!("SpendWise Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!(
                "  Currency:     {} ({})",
                settings.currency,
                settings.currency_symbol()
            );
            println!("  Theme:        {}", settings.theme);
            println!("  Budget scope: {}", settings.budget_scope);
            return Ok(());
        }

        ConfigCommands::Currency { code } => {
            let currency: Currency = code.parse().map_err(SpendwiseError::Validation)?;
            settings.currency = currency;
            println!("Currency set to {} ({})", currency, currency.symbol());
        }

        ConfigCommands::Theme { theme } => {
            let theme: Theme = theme.parse().map_err(SpendwiseError::Validation)?;
            settings.theme = theme;
            println!("Theme set to {}", theme);
        }

        ConfigCommands::Scope { scope } => {
            let scope: BudgetScope = scope.parse().map_err(SpendwiseError::Validation)?;
            settings.budget_scope = scope;
            println!("Budget scope set to {}", scope);
        }
    }

    settings.save(paths)
}
