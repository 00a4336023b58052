//! Display formatting for terminal output
//!
//! Provides utilities for formatting summaries, goals, transactions and the
//! ring chart, plus a standalone SVG renderer for the chart.

pub mod budget;
pub mod chart;
pub mod report;
pub mod subscription;
pub mod summary;
pub mod transaction;

pub use budget::{format_budget_list, format_budget_report};
pub use chart::{format_chart_table, render_svg};
pub use subscription::{format_presets, format_subscription_summary};
pub use summary::{format_breakdown, format_summary};
pub use transaction::{format_tags, format_transaction_details, format_transaction_table};
