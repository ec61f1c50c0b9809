//! Cumulative cost series over a sequence of reporting windows
//!
//! The asset route returns per-window costs non-cumulatively. The series is
//! made cumulative here by carrying a running total per category across
//! windows, which is what the overall-cost chart plots.

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::collections::BTreeMap;

use super::round2;
use crate::error::ReportError;
use crate::models::{billable_entries, CostEntry, CostRecord, API_TIMESTAMP_FORMAT};
use crate::query::Window;

/// Cumulative cost per category as of one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub start: NaiveDateTime,
    /// Running total per category across all windows up to `start`
    pub costs: BTreeMap<String, f64>,
}

/// Build the cumulative cost-by-category series for a window sequence.
///
/// Windows are sorted by their earliest `start` timestamp before
/// accumulation (the API is assumed chronological but not trusted to be);
/// ties keep arrival order. Empty windows are skipped. A category absent
/// from a window contributes 0 for that window, so its running total
/// carries forward unchanged.
///
/// For every selection except [`Window::Today`] the per-window snapshots
/// are collapsed to one entry per calendar day, keeping the per-category
/// maximum observed that day. Under a cumulative sum of non-negative costs
/// the maximum is the end-of-day value, and taking it stays correct even
/// when a category is missing from some window within the day.
pub fn cumulative_daily_cost<T: CostEntry>(
    series: &[CostRecord<T>],
    window: Window,
) -> Result<Vec<DailyPoint>, ReportError> {
    let mut windows: Vec<(NaiveDateTime, usize, &CostRecord<T>)> = Vec::new();
    for (position, record) in series.iter().enumerate() {
        let mut earliest: Option<NaiveDateTime> = None;
        for (_, entry) in billable_entries(record) {
            let start = NaiveDateTime::parse_from_str(entry.start(), API_TIMESTAMP_FORMAT)?;
            earliest = Some(earliest.map_or(start, |current| current.min(start)));
        }
        // Empty windows carry no timestamp and nothing to accumulate
        if let Some(start) = earliest {
            windows.push((start, position, record));
        }
    }
    windows.sort_by_key(|(start, position, _)| (*start, *position));

    let mut running: BTreeMap<String, f64> = BTreeMap::new();
    let mut points = Vec::with_capacity(windows.len());
    for (start, _, record) in windows {
        for (key, entry) in billable_entries(record) {
            *running.entry(key.clone()).or_insert(0.0) += round2(entry.total_cost());
        }
        points.push(DailyPoint {
            start,
            costs: running.clone(),
        });
    }

    if window.rolls_up_to_days() {
        points = rollup_per_day(points);
    }
    Ok(points)
}

/// Collapse sub-daily snapshots to one per calendar day (per-category max)
fn rollup_per_day(points: Vec<DailyPoint>) -> Vec<DailyPoint> {
    let mut by_day: BTreeMap<chrono::NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();
    for point in points {
        let day = by_day.entry(point.start.date()).or_default();
        for (key, value) in point.costs {
            let slot = day.entry(key).or_insert(value);
            if value > *slot {
                *slot = value;
            }
        }
    }
    by_day
        .into_iter()
        .map(|(date, costs)| DailyPoint {
            start: date.and_time(NaiveTime::MIN),
            costs,
        })
        .collect()
}
