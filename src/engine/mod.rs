//! Ledger engine
//!
//! Pure functions that turn ledger snapshots into summaries, budget progress
//! and chart geometry. Nothing in here touches storage or the terminal.

pub mod aggregation;
pub mod budget;
pub mod chart;
pub mod filter;

pub use aggregation::{
    summarize, summarize_subscriptions, CategoryBreakdown, CategoryTotals, LedgerSummary,
    SubscriptionSummary,
};
pub use budget::{evaluate, BudgetReport, GoalStatus};
pub use chart::{
    CenterLabel, ChartStyle, PlaceholderRing, RingChart, RingLayout, RingSegment, SegmentLabel,
    Theme,
};
pub use filter::{in_period, HistoryQuery};
