//! Summary and chart commands

use std::path::PathBuf;

use tracing::info;

use super::{parse_month, scope_title};
use crate::config::settings::Settings;
use crate::display::{format_chart_table, format_summary, render_svg};
use crate::engine::{self, ChartStyle, RingLayout};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::storage::Storage;

/// Print income, expense, balance and the breakdown
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> SpendwiseResult<()> {
    let period = parse_month(month.as_deref())?;
    let state = storage.load();
    let summary = state.summary(period);

    print!(
        "{}",
        format_summary(&summary, &scope_title(period), settings.currency_symbol())
    );
    Ok(())
}

/// Print the ring chart layout and optionally write it as SVG
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
    svg: Option<PathBuf>,
) -> SpendwiseResult<()> {
    let period = parse_month(month.as_deref())?;
    let state = storage.load();
    let summary = state.summary(period);

    let style = ChartStyle {
        theme: settings.theme,
        currency_symbol: settings.currency_symbol().to_string(),
    };
    let chart = engine::chart::build(
        &summary.breakdown,
        summary.total_expense,
        &RingLayout::default(),
        &style,
    )?;

    println!("{}", scope_title(period));
    print!("{}", format_chart_table(&chart));

    if let Some(path) = svg {
        std::fs::write(&path, render_svg(&chart)).map_err(|e| {
            SpendwiseError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), "chart written");
        println!("Chart written to {}", path.display());
    }

    Ok(())
}
