//! Export module for SpendWise
//!
//! CSV export of the transaction history and budget progress.

pub mod csv;

pub use self::csv::{export_budget_report_csv, export_transactions_csv};
