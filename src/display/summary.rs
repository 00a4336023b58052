//! Ledger summary formatting

use tabled::{settings::Style, Table, Tabled};

use super::report::{format_bar, format_money_colored, format_percentage, separator};
use crate::engine::LedgerSummary;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format income, expense, balance and the category breakdown
pub fn format_summary(summary: &LedgerSummary, title: &str, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", title));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "Income:   {:>16}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expenses: {:>16}\n",
        summary.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Balance:  {:>16}\n",
        format_money_colored(summary.balance, symbol)
    ));

    if summary.skipped > 0 {
        output.push_str(&format!(
            "({} invalid record(s) ignored)\n",
            summary.skipped
        ));
    }

    output.push('\n');
    output.push_str(&format_breakdown(summary, symbol));
    output
}

/// Format the breakdown as a table with proportional bars
pub fn format_breakdown(summary: &LedgerSummary, symbol: &str) -> String {
    if summary.breakdown.is_empty() {
        return "No spending recorded.\n".to_string();
    }

    let rows: Vec<BreakdownRow> = summary
        .breakdown
        .iter()
        .map(|row| BreakdownRow {
            category: row.category.label().to_string(),
            amount: row.amount.format_with_symbol(symbol),
            share: format_percentage(row.percentage),
            bar: format_bar(row.percentage, 100.0, 20),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output.push_str(&format!(
        "{} categories active\n",
        summary.active_categories()
    ));
    output
}
