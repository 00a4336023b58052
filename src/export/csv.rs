//! CSV export
//!
//! Writes the transaction history and budget progress in a
//! spreadsheet-compatible format.

use std::io::Write;

use serde::Serialize;

use crate::engine::BudgetReport;
use crate::error::SpendwiseResult;
use crate::models::Transaction;

#[derive(Serialize)]
struct TransactionRecord<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Note")]
    note: &'a str,
    #[serde(rename = "Payment Method")]
    payment_method: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

#[derive(Serialize)]
struct GoalRecord<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Goal")]
    name: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Limit")]
    limit: String,
    #[serde(rename = "Spent")]
    spent: String,
    #[serde(rename = "Percent")]
    percent: i64,
    #[serde(rename = "Over")]
    is_over: bool,
}

/// Plain decimal amount without grouping ("1250.50")
fn decimal(amount: crate::models::Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.units().abs(), amount.cents_part())
}

/// Export transactions to CSV, in the order given
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> SpendwiseResult<usize> {
    let mut csv = ::csv::Writer::from_writer(writer);

    for txn in transactions {
        csv.serialize(TransactionRecord {
            id: txn.id.as_str(),
            date: txn.date.to_rfc3339(),
            kind: txn.kind.to_string(),
            category: txn.category.label(),
            note: &txn.note,
            payment_method: txn.payment_method.label(),
            amount: decimal(txn.amount),
        })?;
    }

    if transactions.is_empty() {
        csv.write_record([
            "ID",
            "Date",
            "Type",
            "Category",
            "Note",
            "Payment Method",
            "Amount",
        ])?;
    }

    csv.flush()?;
    Ok(transactions.len())
}

/// Export budget goal progress to CSV
pub fn export_budget_report_csv<W: Write>(report: &BudgetReport, writer: W) -> SpendwiseResult<usize> {
    let mut csv = ::csv::Writer::from_writer(writer);

    for goal in &report.goals {
        csv.serialize(GoalRecord {
            id: goal.budget_id.as_str(),
            name: &goal.name,
            category: goal.category.label(),
            limit: decimal(goal.limit),
            spent: decimal(goal.spent),
            percent: goal.percent,
            is_over: goal.is_over,
        })?;
    }

    if report.goals.is_empty() {
        csv.write_record(["ID", "Goal", "Category", "Limit", "Spent", "Percent", "Over"])?;
    }

    csv.flush()?;
    Ok(report.goals.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{evaluate, summarize};
    use crate::models::{Budget, Category, Money, PaymentMethod, TransactionId};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_export_transactions() {
        let txns = vec![Transaction::expense(Money::from_cents(125050), Category::Housing)
            .with_id(TransactionId::from_string("1"))
            .with_note("Rent, March")
            .with_payment_method(PaymentMethod::NetBanking)
            .with_date(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())];

        let mut buf = Vec::new();
        let count = export_transactions_csv(&txns, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(count, 1);
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID,Date,Type,Category,Note,Payment Method,Amount"
        );
        assert_eq!(
            lines.next().unwrap(),
            "1,2025-03-01T00:00:00+00:00,Expense,Housing & Utilities,\"Rent, March\",Net Banking,1250.50"
        );
    }

    #[test]
    fn test_export_empty_still_has_header() {
        let mut buf = Vec::new();
        export_transactions_csv(&[], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "ID,Date,Type,Category,Note,Payment Method,Amount\n");
    }

    #[test]
    fn test_export_budget_report() {
        let txns = vec![Transaction::expense(Money::from_cents(10000), Category::Food)];
        let summary = summarize(&txns);
        let budgets = vec![Budget::named("Food", Category::Food, Money::from_cents(5000))];
        let report = evaluate(&summary.category_totals, summary.total_expense, &budgets);

        let mut buf = Vec::new();
        export_budget_report_csv(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let row = text.lines().nth(1).unwrap();
        assert!(row.ends_with(",Food,Food & Groceries,50.00,100.00,200,true"));
    }
}
