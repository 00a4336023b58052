//! Transaction display formatting

use tabled::{settings::Style, Table, Tabled};

use super::report::truncate;
use crate::models::{Category, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Note")]
    note: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Paid via")]
    method: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of transactions as a table, in the order given
pub fn format_transaction_table(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| {
            let sign = if txn.is_expense() { "-" } else { "+" };
            TransactionRow {
                id: txn.id.short().to_string(),
                date: txn.date.format("%Y-%m-%d").to_string(),
                note: truncate(&txn.note, 28),
                category: txn.category.label().to_string(),
                method: txn.payment_method.label().to_string(),
                amount: format!("{}{}", sign, txn.amount.format_with_symbol(symbol)),
            }
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d %H:%M")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category.label()));
    output.push_str(&format!("Note:        {}\n", txn.note));
    output.push_str(&format!("Paid via:    {}\n", txn.payment_method.label()));

    output
}

/// Format the quick-note suggestions for a category
pub fn format_tags(category: Category) -> String {
    let mut output = format!("{} ({})\n", category.label(), category.kind());
    for tag in category.tags() {
        output.push_str(&format!("  - {}\n", tag));
    }
    output
}
