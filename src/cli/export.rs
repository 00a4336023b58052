//! Export CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use tracing::info;

use super::parse_month;
use crate::engine::HistoryQuery;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::export::{export_budget_report_csv, export_transactions_csv};
use crate::storage::Storage;

/// Export transactions (or goal progress with `budgets`) to a CSV file
pub fn handle_export_command(
    storage: &Storage,
    path: PathBuf,
    month: Option<String>,
    budgets: bool,
) -> SpendwiseResult<()> {
    let period = parse_month(month.as_deref())?;
    let state = storage.load();

    let file = File::create(&path).map_err(|e| {
        SpendwiseError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let writer = BufWriter::new(file);

    let count = if budgets {
        export_budget_report_csv(&state.budget_report(period), writer)?
    } else {
        let history = state.history(&HistoryQuery {
            period,
            search: None,
        });
        export_transactions_csv(&history, writer)?
    };

    info!(path = %path.display(), count, "export complete");
    println!("Exported {} row(s) to {}", count, path.display());
    Ok(())
}
