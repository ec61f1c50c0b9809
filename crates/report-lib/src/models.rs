//! Typed wire model for the Kubecost allocation and asset APIs
//!
//! The upstream API returns JSON objects mapping a dimension key (a label
//! value, an asset category, or a composite `/`-joined key) to a cost field
//! object. Decoding goes through serde into named numeric fields so that a
//! response violating the contract fails at decode time instead of at first
//! field access.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ReportError;

/// Keys starting with this prefix (e.g. `__idle__`, `__unallocated__`)
/// are aggregation metadata and are excluded from every iteration.
pub const METADATA_PREFIX: &str = "__";

/// Timestamp format used by the cost API for `start`/`end` fields
pub const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// One window's data: dimension key to cost fields
pub type CostRecord<T> = BTreeMap<String, T>;

/// Cost fields of one allocation entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationCost {
    #[serde(default)]
    pub cpu_cost: f64,
    #[serde(default)]
    pub cpu_cost_adjustment: f64,
    #[serde(default)]
    pub gpu_cost: f64,
    #[serde(default)]
    pub gpu_cost_adjustment: f64,
    #[serde(default)]
    pub pv_cost: f64,
    #[serde(default)]
    pub pv_cost_adjustment: f64,
    #[serde(default)]
    pub ram_cost: f64,
    #[serde(default)]
    pub ram_cost_adjustment: f64,
    #[serde(default)]
    pub total_cost: f64,
    /// Efficiency ratio in [0, 1]; the unused remainder is reported as waste
    #[serde(default)]
    pub total_efficiency: f64,
    pub start: String,
    pub end: String,
}

/// Cost fields of one asset entry, keyed by asset category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCost {
    #[serde(default)]
    pub total_cost: f64,
    pub start: String,
    pub end: String,
}

/// Access to the fields shared by allocation and asset entries
pub trait CostEntry {
    fn total_cost(&self) -> f64;
    fn start(&self) -> &str;
}

impl CostEntry for AllocationCost {
    fn total_cost(&self) -> f64 {
        self.total_cost
    }

    fn start(&self) -> &str {
        &self.start
    }
}

impl CostEntry for AssetCost {
    fn total_cost(&self) -> f64 {
        self.total_cost
    }

    fn start(&self) -> &str {
        &self.start
    }
}

/// Envelope returned by both the `/allocation` and `/assets` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Vec<CostRecord<T>>,
}

impl<T> ApiResponse<T> {
    /// The single accumulated record of an `accumulate=true` query
    pub fn accumulated(&self) -> Result<&CostRecord<T>, ReportError> {
        self.data.first().ok_or(ReportError::DataUnavailable)
    }
}

/// True for reserved keys carrying aggregation metadata
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_PREFIX)
}

/// Iterate the billable (non-metadata) entries of a record
pub fn billable_entries<T>(record: &CostRecord<T>) -> impl Iterator<Item = (&String, &T)> {
    record.iter().filter(|(key, _)| !is_metadata_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_decode_defaults_missing_fields() {
        let json = r#"{
            "cpuCost": 1.5,
            "totalCost": 2.0,
            "start": "2024-03-01T00:00:00Z",
            "end": "2024-03-02T00:00:00Z"
        }"#;
        let cost: AllocationCost = serde_json::from_str(json).unwrap();
        assert_eq!(cost.cpu_cost, 1.5);
        assert_eq!(cost.gpu_cost, 0.0);
        assert_eq!(cost.pv_cost_adjustment, 0.0);
        assert_eq!(cost.total_efficiency, 0.0);
    }

    #[test]
    fn test_allocation_decode_rejects_missing_timestamps() {
        let json = r#"{"cpuCost": 1.5}"#;
        let result: Result<AllocationCost, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_accumulated_empty_data_is_unavailable() {
        let response: ApiResponse<AssetCost> = ApiResponse { data: vec![] };
        assert!(matches!(
            response.accumulated(),
            Err(ReportError::DataUnavailable)
        ));
    }

    #[test]
    fn test_billable_entries_skips_metadata_keys() {
        let mut record: CostRecord<AssetCost> = CostRecord::new();
        record.insert(
            "__idle__".to_string(),
            AssetCost {
                total_cost: 9.0,
                start: "2024-03-01T00:00:00Z".to_string(),
                end: "2024-03-02T00:00:00Z".to_string(),
            },
        );
        record.insert(
            "Compute".to_string(),
            AssetCost {
                total_cost: 4.0,
                start: "2024-03-01T00:00:00Z".to_string(),
                end: "2024-03-02T00:00:00Z".to_string(),
            },
        );

        let keys: Vec<_> = billable_entries(&record).map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Compute"]);
    }
}
