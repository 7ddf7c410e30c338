//! Per-region charging coverage.

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Station and vehicle totals for one region in the target year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub region: String,
    pub station_count: i64,
    pub vehicle_count: i64,
    /// Stations per hundred registered vehicles.
    pub penetration_pct: f64,
}

impl RegionSummary {
    /// Fails when the region has no registered vehicles; the ratio is
    /// undefined there and the whole load is rejected.
    pub fn from_counts(region: String, station_count: i64, vehicle_count: i64) -> Result<Self> {
        if vehicle_count == 0 {
            return Err(DashboardError::ZeroVehicles { region });
        }
        Ok(Self {
            penetration_pct: penetration_ratio(station_count, vehicle_count),
            region,
            station_count,
            vehicle_count,
        })
    }
}

/// `station_count / vehicle_count * 100`, with the multiplication done first
/// so whole-number ratios come out exact.
pub fn penetration_ratio(station_count: i64, vehicle_count: i64) -> f64 {
    (station_count as f64 * 100.0) / vehicle_count as f64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    Region,
    StationCount,
    VehicleCount,
    Penetration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

pub fn sort_summaries(rows: &mut [RegionSummary], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = compare(a, b, column);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn compare(a: &RegionSummary, b: &RegionSummary, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Region => a.region.cmp(&b.region),
        SortColumn::StationCount => a.station_count.cmp(&b.station_count),
        SortColumn::VehicleCount => a.vehicle_count.cmp(&b.vehicle_count),
        SortColumn::Penetration => a.penetration_pct.total_cmp(&b.penetration_pct),
    }
}

/// The `n` best-covered regions, highest ratio first.
pub fn top_by_penetration(rows: &[RegionSummary], n: usize) -> Vec<RegionSummary> {
    ranked(rows, n, SortDirection::Descending)
}

/// The `n` least-covered regions, lowest ratio first.
pub fn bottom_by_penetration(rows: &[RegionSummary], n: usize) -> Vec<RegionSummary> {
    ranked(rows, n, SortDirection::Ascending)
}

fn ranked(rows: &[RegionSummary], n: usize, direction: SortDirection) -> Vec<RegionSummary> {
    let mut sorted = rows.to_vec();
    sort_summaries(&mut sorted, SortColumn::Penetration, direction);
    sorted.truncate(n);
    sorted
}
