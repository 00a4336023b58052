//! Budget goal formatting

use tabled::{settings::Style, Table, Tabled};

use super::report::{format_bar, separator};
use crate::engine::BudgetReport;
use crate::models::Budget;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format goal progress and the overall position
pub fn format_budget_report(report: &BudgetReport, symbol: &str) -> String {
    if !report.has_goals() {
        return "No budget goals set. Add one with 'spendwise budget add'.\n".to_string();
    }

    let rows: Vec<GoalRow> = report
        .goals
        .iter()
        .map(|goal| GoalRow {
            id: goal.budget_id.short().to_string(),
            name: goal.name.clone(),
            spent: goal.spent.format_with_symbol(symbol),
            limit: goal.limit.format_with_symbol(symbol),
            used: if goal.is_over {
                format!("{}% OVER", goal.percent)
            } else {
                format!("{}%", goal.percent)
            },
            bar: format_bar(goal.bar_fill() as f64, 100.0, 20),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "Total limit: {}\n",
        report.global_limit.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Used:        {:.0}%\n",
        report.global_percent * 100.0
    ));
    output.push_str(&format!(
        "Remaining:   {}\n",
        report.remaining.format_with_symbol(symbol)
    ));
    output
}

/// Format configured goals without progress
pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budget goals set.\n".to_string();
    }

    let mut output = String::new();
    for budget in budgets {
        output.push_str(&format!(
            "{}  {:24} {:24} {}\n",
            budget.id.short(),
            budget.display_name(),
            budget.category.label(),
            budget.limit.format_with_symbol(symbol)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{evaluate, summarize};
    use crate::models::{Category, Money, Transaction};

    #[test]
    fn test_report_marks_overspending() {
        let txns = vec![Transaction::expense(Money::from_cents(10000), Category::Food)];
        let summary = summarize(&txns);
        let budgets = vec![Budget::named("Groceries", Category::Food, Money::from_cents(5000))];
        let report = evaluate(&summary.category_totals, summary.total_expense, &budgets);

        let text = format_budget_report(&report, "$");
        assert!(text.contains("Groceries"));
        assert!(text.contains("200% OVER"));
        assert!(text.contains("Remaining:   $0.00"));
    }

    #[test]
    fn test_no_goals() {
        let text = format_budget_report(&BudgetReport::default(), "$");
        assert!(text.starts_with("No budget goals set"));
    }
}
