//! SpendWise - personal finance ledger engine
//!
//! This library turns a flat list of income and expense records into
//! category breakdowns, budget goal progress and the geometry of a radial
//! (donut) spending chart.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Ledger records and value types (money, categories, periods)
//! - `engine`: Pure aggregation, budget evaluation and chart geometry
//! - `state`: The in-memory ledger and its mutations
//! - `storage`: JSON file persistence
//! - `config`: Path resolution and user settings
//! - `display` / `export`: Terminal, SVG and CSV output
//! - `cli`: Command handlers for the `spendwise` binary
//!
//! # Example
//!
//! ```rust
//! use spendwise::engine::{self, RingLayout, ChartStyle};
//! use spendwise::models::{Category, Money, Transaction};
//!
//! let ledger = vec![
//!     Transaction::expense(Money::from_cents(62_000), Category::Food),
//!     Transaction::expense(Money::from_cents(85_000), Category::Housing),
//! ];
//! let summary = engine::summarize(&ledger);
//! let chart = engine::chart::build(
//!     &summary.breakdown,
//!     summary.total_expense,
//!     &RingLayout::default(),
//!     &ChartStyle::default(),
//! )
//! .unwrap();
//! assert_eq!(chart.segments.len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod seed;
pub mod state;
pub mod storage;

pub use error::{SpendwiseError, SpendwiseResult};
