use anyhow::{Context, Result};
use chrono::TimeDelta;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::debug;

use crate::{calc_downtime, format_duration, Period};


/// Downtime allowed within one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub period: Period,
    pub downtime: TimeDelta,
}

/// Downtime budgets for every period, in table order.
pub fn budgets(uptime_percent: f64) -> Vec<Budget>
{
    Period::ALL.iter()
        .map(|&period| {
            let downtime = calc_downtime(uptime_percent, period.length());
            debug!(%period, length = %humantime::Duration::from(period.length()), %downtime, "computed budget");
            Budget { period, downtime }
        })
        .collect()
}

/// Build the "Period"/"Downtime" table for the given uptime percentage.
///
/// Fails if any period's budget is too small to format; no partial table is returned.
pub fn render_table(uptime_percent: f64) -> Result<Table>
{
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);

    table.set_header([
        Cell::new("Period").set_alignment(CellAlignment::Right),
        Cell::new("Downtime").set_alignment(CellAlignment::Right),
    ]);

    for budget in budgets(uptime_percent) {
        let downtime_str = format_duration(budget.downtime)
            .with_context(|| format!("formatting {} downtime", budget.period))?;
        table.add_row([
            Cell::new(budget.period).set_alignment(CellAlignment::Right),
            Cell::new(downtime_str).set_alignment(CellAlignment::Right),
        ]);
    }

    Ok(table)
}
