//! Subscription formatting

use chrono::NaiveDate;
use tabled::{settings::Style, Table, Tabled};

use crate::engine::SubscriptionSummary;
use crate::seed::SUBSCRIPTION_PRESETS;

#[derive(Tabled)]
struct SubscriptionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Per month")]
    monthly: String,
    #[tabled(rename = "Next bill")]
    next: String,
    #[tabled(rename = "")]
    alert: String,
}

/// Format subscriptions (most expensive first) with totals and due reminders
pub fn format_subscription_summary(
    summary: &SubscriptionSummary,
    symbol: &str,
    today: NaiveDate,
) -> String {
    if summary.count == 0 {
        return "No subscriptions tracked. Try 'spendwise sub presets'.\n".to_string();
    }

    let rows: Vec<SubscriptionRow> = summary
        .by_cost
        .iter()
        .map(|sub| {
            let days = sub.days_until_billing(today);
            SubscriptionRow {
                id: sub.id.short().to_string(),
                name: sub.name.clone(),
                price: format!(
                    "{} / {}",
                    sub.amount.format_with_symbol(symbol),
                    sub.billing_cycle.to_string().to_lowercase()
                ),
                monthly: sub.monthly_equivalent().format_with_symbol(symbol),
                next: sub.next_billing_date.format("%Y-%m-%d").to_string(),
                alert: if sub.is_alert_due(today) {
                    match days {
                        0 => "due today".to_string(),
                        1 => "due tomorrow".to_string(),
                        n => format!("due in {} days", n),
                    }
                } else if days < 0 {
                    "overdue".to_string()
                } else {
                    String::new()
                },
            }
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output.push_str(&format!(
        "{} subscription(s): {} per month, {} per year\n",
        summary.count,
        summary.monthly_total.format_with_symbol(symbol),
        summary.yearly_total.format_with_symbol(symbol)
    ));
    output
}

/// List the quick-add presets
pub fn format_presets(symbol: &str) -> String {
    let mut output = String::from("Quick-add presets (monthly):\n");
    for preset in &SUBSCRIPTION_PRESETS {
        output.push_str(&format!(
            "  {:18} {:>10}\n",
            preset.name,
            preset.amount.format_with_symbol(symbol)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::summarize_subscriptions;
    use crate::models::{Money, Subscription, SubscriptionInput, SubscriptionOptions};

    #[test]
    fn test_summary_shows_reminders_and_totals() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let sub = Subscription::build(
            SubscriptionInput {
                name: "Spotify".into(),
                amount: Money::from_cents(999),
            },
            SubscriptionOptions::default().next_billing(NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()),
            today,
        );
        let summary = summarize_subscriptions(&[sub]);

        let text = format_subscription_summary(&summary, "$", today);
        assert!(text.contains("Spotify"));
        assert!(text.contains("due tomorrow"));
        assert!(text.contains("$9.99 per month, $119.88 per year"));
    }

    #[test]
    fn test_presets() {
        let text = format_presets("£");
        assert!(text.contains("Netflix"));
        assert!(text.contains("£54.99"));
    }
}
