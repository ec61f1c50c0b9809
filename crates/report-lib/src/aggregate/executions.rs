//! Execution cost table built from composite-key allocations
//!
//! The executions view aggregates allocations by a composite key of four
//! labels joined with `/` (workload id, workload type, user, project id).
//! Each key decodes into one row with derived compute/storage costs and a
//! waste percentage.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::warn;

use super::round2;
use crate::error::ReportError;
use crate::models::{billable_entries, AllocationCost, CostRecord, API_TIMESTAMP_FORMAT};
use crate::query::EXECUTION_LABELS;

/// Separator joining the label values of a composite key
const KEY_SEPARATOR: char = '/';

/// Display format for `start`/`end` timestamps
const DISPLAY_TIMESTAMP_FORMAT: &str = "%m/%d %I:%M %p";

/// One decoded execution entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionRow {
    pub workload_id: String,
    pub workload_type: String,
    pub user: String,
    pub project_id: String,
    pub start: String,
    pub end: String,
    pub cpu_cost: f64,
    pub gpu_cost: f64,
    pub compute_cost: f64,
    pub storage_cost: f64,
    /// Share of compute cost not efficiently used, e.g. `"20.0%"`
    pub compute_waste: String,
}

/// Decoded execution rows plus the keys that failed to decode
#[derive(Debug, Default)]
pub struct ExecutionTable {
    pub rows: Vec<ExecutionRow>,
    /// Per-row key failures; the rest of the table is still produced
    pub malformed: Vec<ReportError>,
}

/// Decode an accumulated composite-key allocation record into table rows.
///
/// A key that does not split into exactly one part per requested label is
/// malformed: that row alone fails and is reported in
/// [`ExecutionTable::malformed`]. A timestamp that does not match the API
/// format fails the whole call, since it breaks the response contract.
pub fn execution_table(
    record: &CostRecord<AllocationCost>,
) -> Result<ExecutionTable, ReportError> {
    let mut table = ExecutionTable::default();
    for (key, cost) in billable_entries(record) {
        let parts: Vec<&str> = key.split(KEY_SEPARATOR).collect();
        if parts.len() != EXECUTION_LABELS.len() {
            warn!(key = %key, parts = parts.len(), "skipping malformed execution key");
            table.malformed.push(ReportError::MalformedKey {
                key: key.clone(),
                expected: EXECUTION_LABELS.len(),
                found: parts.len(),
            });
            continue;
        }

        let cpu_cost = round2(cost.cpu_cost + cost.cpu_cost_adjustment);
        let gpu_cost = round2(cost.gpu_cost + cost.gpu_cost_adjustment);
        let storage_cost = round2(
            cost.pv_cost + cost.ram_cost + cost.pv_cost_adjustment + cost.ram_cost_adjustment,
        );
        table.rows.push(ExecutionRow {
            workload_id: parts[0].to_string(),
            workload_type: parts[1].to_string(),
            user: parts[2].to_string(),
            project_id: parts[3].to_string(),
            start: format_timestamp(&cost.start)?,
            end: format_timestamp(&cost.end)?,
            cpu_cost,
            gpu_cost,
            compute_cost: round2(cpu_cost + gpu_cost),
            storage_cost,
            compute_waste: format_waste(cost.total_efficiency),
        });
    }
    Ok(table)
}

/// Reformat an API timestamp into the short display form
fn format_timestamp(timestamp: &str) -> Result<String, ReportError> {
    let parsed = NaiveDateTime::parse_from_str(timestamp, API_TIMESTAMP_FORMAT)?;
    Ok(parsed.format(DISPLAY_TIMESTAMP_FORMAT).to_string())
}

/// Waste percentage from an efficiency ratio in [0, 1]
fn format_waste(total_efficiency: f64) -> String {
    format!("{:.1}%", (1.0 - total_efficiency) * 100.0)
}
