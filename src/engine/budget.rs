//! Budget evaluation
//!
//! Compares spending goals against the category totals produced by
//! [`super::aggregation::summarize`].

use crate::models::{Budget, BudgetId, Category, Money};

use super::aggregation::CategoryTotals;

/// Progress of a single goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalStatus {
    pub budget_id: BudgetId,
    pub name: String,
    pub category: Category,
    pub limit: Money,
    pub spent: Money,
    /// Rounded percent of the limit used; may exceed 100
    pub percent: i64,
    pub is_over: bool,
}

impl GoalStatus {
    /// Percent for progress bars, capped at 100
    pub fn bar_fill(&self) -> i64 {
        self.percent.clamp(0, 100)
    }

    /// Amount left before the limit is reached (zero once over)
    pub fn remaining(&self) -> Money {
        if self.spent >= self.limit {
            Money::zero()
        } else {
            self.limit - self.spent
        }
    }
}

/// Goal progress plus the overall budget position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetReport {
    pub goals: Vec<GoalStatus>,
    /// Sum of all active limits
    pub global_limit: Money,
    /// Total expense as a fraction of `global_limit` (0 when there is no limit)
    pub global_percent: f64,
    /// Limit left over, never negative
    pub remaining: Money,
}

impl BudgetReport {
    pub fn over_budget(&self) -> impl Iterator<Item = &GoalStatus> {
        self.goals.iter().filter(|g| g.is_over)
    }

    pub fn has_goals(&self) -> bool {
        !self.goals.is_empty()
    }
}

/// Evaluate goals against spending
///
/// Goals with a non-positive limit are ignored. Goals sharing a category each
/// see the category's full spend.
pub fn evaluate(totals: &CategoryTotals, total_expense: Money, budgets: &[Budget]) -> BudgetReport {
    let goals: Vec<GoalStatus> = budgets
        .iter()
        .filter(|b| b.is_active())
        .map(|budget| {
            let spent = totals.get(budget.category);
            GoalStatus {
                budget_id: budget.id.clone(),
                name: budget.display_name().to_string(),
                category: budget.category,
                limit: budget.limit,
                spent,
                percent: percent_of(spent, budget.limit),
                is_over: spent > budget.limit,
            }
        })
        .collect();

    let global_limit: Money = goals.iter().map(|g| g.limit).sum();

    let global_percent = if global_limit.is_positive() {
        total_expense.cents() as f64 / global_limit.cents() as f64
    } else {
        0.0
    };

    let remaining = if total_expense >= global_limit {
        Money::zero()
    } else {
        global_limit - total_expense
    };

    BudgetReport {
        goals,
        global_limit,
        global_percent,
        remaining,
    }
}

fn percent_of(spent: Money, limit: Money) -> i64 {
    (100.0 * spent.cents() as f64 / limit.cents() as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::aggregation::summarize;
    use crate::models::Transaction;

    fn dollars(units: i64) -> Money {
        Money::from_units_cents(units, 0)
    }

    #[test]
    fn test_single_goal_over_limit() {
        let txns = vec![Transaction::expense(dollars(620), Category::Food)];
        let summary = summarize(&txns);
        let budgets = vec![Budget::new(Category::Food, dollars(500))];

        let report = evaluate(&summary.category_totals, summary.total_expense, &budgets);
        let goal = &report.goals[0];

        assert_eq!(goal.spent, dollars(620));
        assert_eq!(goal.percent, 124);
        assert!(goal.is_over);
        assert_eq!(goal.bar_fill(), 100);
        assert_eq!(goal.remaining(), Money::zero());
        assert_eq!(report.remaining, Money::zero());
        assert_eq!(report.over_budget().count(), 1);
    }

    #[test]
    fn test_exactly_at_limit_is_not_over() {
        let txns = vec![Transaction::expense(dollars(200), Category::Health)];
        let summary = summarize(&txns);
        let budgets = vec![Budget::new(Category::Health, dollars(200))];

        let report = evaluate(&summary.category_totals, summary.total_expense, &budgets);
        assert_eq!(report.goals[0].percent, 100);
        assert!(!report.goals[0].is_over);
    }

    #[test]
    fn test_goal_without_spending() {
        let summary = summarize(&[]);
        let budgets = vec![Budget::named("Trips", Category::Travel, dollars(300))];

        let report = evaluate(&summary.category_totals, summary.total_expense, &budgets);
        let goal = &report.goals[0];
        assert_eq!(goal.name, "Trips");
        assert_eq!(goal.spent, Money::zero());
        assert_eq!(goal.percent, 0);
        assert_eq!(report.remaining, dollars(300));
        assert_eq!(report.global_percent, 0.0);
    }

    #[test]
    fn test_inactive_goals_are_ignored() {
        let summary = summarize(&[]);
        let budgets = vec![
            Budget::new(Category::Food, Money::zero()),
            Budget::new(Category::Food, Money::from_cents(-100)),
        ];

        let report = evaluate(&summary.category_totals, summary.total_expense, &budgets);
        assert!(!report.has_goals());
        assert_eq!(report.global_limit, Money::zero());
        assert_eq!(report.global_percent, 0.0);
    }

    #[test]
    fn test_overlapping_goals_share_category_spend() {
        let txns = vec![Transaction::expense(dollars(150), Category::Food)];
        let summary = summarize(&txns);
        let budgets = vec![
            Budget::named("Groceries", Category::Food, dollars(100)),
            Budget::named("Dining", Category::Food, dollars(300)),
        ];

        let report = evaluate(&summary.category_totals, summary.total_expense, &budgets);
        assert_eq!(report.goals[0].spent, dollars(150));
        assert_eq!(report.goals[1].spent, dollars(150));
        assert_eq!(report.goals[0].percent, 150);
        assert_eq!(report.goals[1].percent, 50);
        assert_eq!(report.global_limit, dollars(400));
    }

    #[test]
    fn test_global_position_counts_unbudgeted_spending() {
        let txns = vec![
            Transaction::expense(dollars(100), Category::Food),
            Transaction::expense(dollars(100), Category::Travel),
        ];
        let summary = summarize(&txns);
        let budgets = vec![Budget::new(Category::Food, dollars(400))];

        let report = evaluate(&summary.category_totals, summary.total_expense, &budgets);
        assert!((report.global_percent - 0.5).abs() < f64::EPSILON);
        assert_eq!(report.remaining, dollars(200));
    }

    #[test]
    fn test_percent_is_rounded() {
        let txns = vec![Transaction::expense(Money::from_cents(1005), Category::Food)];
        let summary = summarize(&txns);
        let budgets = vec![Budget::new(Category::Food, dollars(20))];

        let report = evaluate(&summary.category_totals, summary.total_expense, &budgets);
        // 10.05 of 20.00 is 50.25%
        assert_eq!(report.goals[0].percent, 50);
    }
}
