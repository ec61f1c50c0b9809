//! Cost aggregation over decoded API records
//!
//! All functions here are pure: selection state (window, dimension,
//! organization filter) is resolved by the caller before the fetch, and the
//! aggregation is a function of the decoded response alone.

mod daily;
mod executions;

pub use daily::{cumulative_daily_cost, DailyPoint};
pub use executions::{execution_table, ExecutionRow, ExecutionTable};

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{billable_entries, CostEntry, CostRecord};

/// Round to 2 decimal places, the display precision for all costs
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total cost per dimension value, rounded for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BreakdownResult {
    pub costs: BTreeMap<String, f64>,
}

impl BreakdownResult {
    /// Sum of all per-value costs, rounded
    pub fn total(&self) -> f64 {
        round2(self.costs.values().sum())
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

/// Total cost per dimension value from an accumulated record.
///
/// Metadata keys (reserved `__` prefix) are excluded; every value is the
/// entry's `totalCost` rounded to 2 decimals.
pub fn breakdown_by_dimension<T: CostEntry>(record: &CostRecord<T>) -> BreakdownResult {
    let costs = billable_entries(record)
        .map(|(key, entry)| (key.clone(), round2(entry.total_cost())))
        .collect();
    BreakdownResult { costs }
}

/// Total cost per asset category from an accumulated asset record.
///
/// Same shape as [`breakdown_by_dimension`] with the record keyed by
/// category (`Compute`, `Storage`, `Network`, ...) instead of a label.
pub fn overall_cost<T: CostEntry>(record: &CostRecord<T>) -> BreakdownResult {
    breakdown_by_dimension(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetCost;

    fn asset(total_cost: f64) -> AssetCost {
        AssetCost {
            total_cost,
            start: "2024-03-01T00:00:00Z".to_string(),
            end: "2024-03-02T00:00:00Z".to_string(),
        }
    }

    fn record(entries: &[(&str, f64)]) -> CostRecord<AssetCost> {
        entries
            .iter()
            .map(|(key, cost)| (key.to_string(), asset(*cost)))
            .collect()
    }

    #[test]
    fn test_breakdown_rounds_to_two_decimals() {
        let record = record(&[("alice", 1.006), ("bob", 2.3333)]);
        let breakdown = breakdown_by_dimension(&record);
        assert_eq!(breakdown.costs["alice"], 1.01);
        assert_eq!(breakdown.costs["bob"], 2.33);
    }

    #[test]
    fn test_breakdown_excludes_metadata_keys() {
        let record = record(&[("__idle__", 100.0), ("__unallocated__", 5.0), ("p1", 2.5)]);
        let breakdown = breakdown_by_dimension(&record);
        assert_eq!(breakdown.costs.len(), 1);
        assert_eq!(breakdown.costs["p1"], 2.5);
    }

    #[test]
    fn test_overall_cost_total_sums_categories() {
        let record = record(&[("Compute", 12.50), ("Storage", 3.25), ("Network", 0.10)]);
        let overall = overall_cost(&record);
        assert_eq!(overall.total(), 15.85);
    }

    #[test]
    fn test_breakdown_is_pure() {
        let record = record(&[("alice", 1.234), ("bob", 5.678)]);
        let first = breakdown_by_dimension(&record);
        let second = breakdown_by_dimension(&record);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_record_is_empty_breakdown() {
        let record: CostRecord<AssetCost> = CostRecord::new();
        assert!(breakdown_by_dimension(&record).is_empty());
        assert_eq!(breakdown_by_dimension(&record).total(), 0.0);
    }
}
