//! Data types produced by the aggregation pipeline.

use indexmap::IndexMap;
use serde::Serialize;

use crate::analyzers::regions::RegionCaseIndex;
use crate::analyzers::series::{cumulative_series, formatted_labels, last_period_count};
use crate::analyzers::severity::LegendEntry;
use crate::boundaries::RegionStyle;
use crate::records::{DateKey, RegionId};

pub type DateCounts = IndexMap<DateKey, usize>;
pub type RegionCounts = IndexMap<RegionId, usize>;

/// Records that were left out of a date mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecords {
    pub undated_confirmed: usize,
    pub undated_deaths: usize,
    /// Deaths dated on a day with no confirmed case.
    pub unmatched_deaths: usize,
}

/// The four count tables every chart reads from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    pub confirmed_by_date: DateCounts,
    pub deaths_by_date: DateCounts,
    pub confirmed_by_region: RegionCounts,
    pub deaths_by_region: RegionCounts,
    pub skipped: SkippedRecords,
}

/// Everything the chart collaborator draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub aggregation: AggregationResult,
    pub labels: Vec<String>,
    pub cumulative_confirmed: Vec<usize>,
    pub cumulative_deaths: Vec<usize>,
    pub latest_confirmed: usize,
    pub latest_deaths: usize,
}

impl ChartData {
    pub fn from_aggregation(aggregation: AggregationResult) -> Self {
        Self {
            labels: formatted_labels(&aggregation.confirmed_by_date),
            cumulative_confirmed: cumulative_series(&aggregation.confirmed_by_date),
            cumulative_deaths: cumulative_series(&aggregation.deaths_by_date),
            latest_confirmed: last_period_count(&aggregation.confirmed_by_date),
            latest_deaths: last_period_count(&aggregation.deaths_by_date),
            aggregation,
        }
    }
}

/// Headline figures shown next to the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_confirmed: usize,
    pub total_deaths: usize,
    pub total_recovered: usize,
    pub last_period_confirmed: usize,
    pub as_of: Option<DateKey>,
}

/// Everything the map collaborator draws.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub summary: DashboardSummary,
    pub regions: RegionCaseIndex,
    pub features: Vec<RegionStyle>,
    pub legend: Vec<LegendEntry>,
}
