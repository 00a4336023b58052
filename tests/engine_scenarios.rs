//! End-to-end checks of aggregation, budget evaluation and chart geometry

use std::f64::consts::TAU;

use spendwise::engine::{self, ChartStyle, RingChart, RingLayout};
use spendwise::models::{Budget, Category, Money, Transaction};
use spendwise::seed;

fn cents(amount: i64) -> Money {
    Money::from_cents(amount * 100)
}

fn chart_for(ledger: &[Transaction]) -> RingChart {
    let summary = engine::summarize(ledger);
    engine::chart::build(
        &summary.breakdown,
        summary.total_expense,
        &RingLayout::default(),
        &ChartStyle::default(),
    )
    .unwrap()
}

#[test]
fn mixed_ledger_summary() {
    let ledger = vec![
        Transaction::expense(cents(100), Category::Food),
        Transaction::expense(cents(300), Category::Housing),
        Transaction::income(cents(1000), Category::Salary),
    ];
    let summary = engine::summarize(&ledger);

    assert_eq!(summary.total_income, cents(1000));
    assert_eq!(summary.total_expense, cents(400));
    assert_eq!(summary.balance, cents(600));

    assert_eq!(summary.breakdown.len(), 2);
    assert_eq!(summary.breakdown[0].category, Category::Housing);
    assert_eq!(summary.breakdown[0].amount, cents(300));
    assert!((summary.breakdown[0].percentage - 75.0).abs() < 1e-9);
    assert_eq!(summary.breakdown[1].category, Category::Food);
    assert!((summary.breakdown[1].percentage - 25.0).abs() < 1e-9);
}

#[test]
fn empty_ledger_is_all_zero() {
    let summary = engine::summarize(&[]);

    assert!(summary.total_income.is_zero());
    assert!(summary.total_expense.is_zero());
    assert!(summary.balance.is_zero());
    assert!(summary.breakdown.is_empty());
    assert_eq!(summary.active_categories(), 0);

    let chart = chart_for(&[]);
    assert!(chart.is_empty());
    assert!(chart.placeholder.is_some());
    assert_eq!(chart.center.title, "No activity yet");
}

#[test]
fn overspent_goal() {
    let ledger = vec![Transaction::expense(cents(100), Category::Food)];
    let summary = engine::summarize(&ledger);
    let budgets = vec![Budget::new(Category::Food, cents(50))];

    let report = engine::evaluate(&summary.category_totals, summary.total_expense, &budgets);
    let goal = &report.goals[0];

    assert_eq!(goal.percent, 200);
    assert!(goal.is_over);
    assert_eq!(goal.bar_fill(), 100);
    assert!(report.remaining.is_zero());
}

#[test]
fn overlapping_goals_share_category_spend() {
    let ledger = vec![Transaction::expense(cents(100), Category::Food)];
    let summary = engine::summarize(&ledger);
    let budgets = vec![
        Budget::named("Tight", Category::Food, cents(50)),
        Budget::named("Loose", Category::Food, cents(200)),
    ];

    let report = engine::evaluate(&summary.category_totals, summary.total_expense, &budgets);

    assert_eq!(report.goals.len(), 2);
    assert_eq!(report.goals[0].spent, cents(100));
    assert_eq!(report.goals[1].spent, cents(100));
    assert!(report.goals[0].is_over);
    assert!(!report.goals[1].is_over);
    assert_eq!(report.global_limit, cents(250));
    assert!((report.global_percent - 0.4).abs() < 1e-9);
    assert_eq!(report.remaining, cents(150));
}

#[test]
fn single_category_fills_ring() {
    let ledger = vec![Transaction::expense(cents(42), Category::Travel)];
    let chart = chart_for(&ledger);
    let layout = RingLayout::default();

    assert_eq!(chart.segments.len(), 1);
    let seg = &chart.segments[0];
    assert!((seg.sweep() - (TAU - layout.pad_angle)).abs() < 1e-9);
    assert_eq!(seg.label.as_ref().map(|l| l.text.as_str()), Some("100%"));
    assert_eq!(chart.center.caption.as_deref(), Some("1 categories active"));
}

#[test]
fn sample_ledger_properties() {
    let ledger = seed::sample_ledger(chrono::Utc::now());
    let summary = engine::summarize(&ledger);

    assert_eq!(summary.total_income - summary.total_expense, summary.balance);

    let total_pct: f64 = summary.breakdown.iter().map(|b| b.percentage).sum();
    assert!((total_pct - 100.0).abs() < 0.01);
    assert!(summary.breakdown.iter().all(|b| b.amount.is_positive()));
    assert!(summary
        .breakdown
        .windows(2)
        .all(|pair| pair[0].amount >= pair[1].amount));
    assert!(summary.breakdown.iter().all(|b| b.category.is_expense()));
    assert!(summary.category_totals.iter().all(|(c, _)| c.is_expense()));
    assert_eq!(summary.category_totals.get(Category::Salary), Money::zero());
}

#[test]
fn segment_sweeps_match_shares() {
    let ledger = seed::sample_ledger(chrono::Utc::now());
    let summary = engine::summarize(&ledger);
    let chart = chart_for(&ledger);
    let pad = chart.layout.pad_angle;
    let total = summary.total_expense.cents() as f64;

    assert_eq!(chart.segments.len(), summary.breakdown.len());
    for seg in &chart.segments {
        let share = (seg.sweep() + pad) / TAU;
        let expected = seg.amount.cents() as f64 / total;
        assert!((share - expected).abs() < 1e-9, "{:?}", seg.category);
        assert!(seg.start_angle >= 0.0 && seg.end_angle <= TAU);
    }

    // Labels only on slices above the threshold
    for (seg, row) in chart.segments.iter().zip(&summary.breakdown) {
        assert_eq!(seg.label.is_some(), row.percentage > chart.layout.label_threshold);
    }
}

#[test]
fn identical_input_gives_identical_chart() {
    let ledger = seed::sample_ledger(chrono::Utc::now());
    assert_eq!(chart_for(&ledger), chart_for(&ledger));
}

#[test]
fn budget_properties_hold_across_limits() {
    let ledger = seed::sample_ledger(chrono::Utc::now());
    let summary = engine::summarize(&ledger);

    for limit in [1, 150, 620, 621, 10_000] {
        let budgets = vec![Budget::new(Category::Food, cents(limit))];
        let report = engine::evaluate(&summary.category_totals, summary.total_expense, &budgets);
        let goal = &report.goals[0];

        assert_eq!(goal.is_over, goal.spent > goal.limit);
        assert!(!report.remaining.is_negative());
    }
}
