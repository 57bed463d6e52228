//! Region lookup used to color the map.

use serde::Serialize;

use crate::analyzers::severity::Severity;
use crate::analyzers::types::{DashboardSummary, RegionCounts};
use crate::analyzers::utility::{increment, seed_zeroed, total};
use crate::records::{CasePayload, CaseRecord, RegionId};

/// Confirmed cases per region, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegionCaseIndex(RegionCounts);

impl RegionCaseIndex {
    pub fn get(&self, region: &RegionId) -> Option<usize> {
        self.0.get(region).copied()
    }

    pub fn severity(&self, region: &RegionId) -> Severity {
        Severity::for_count(self.get(region).unwrap_or(0))
    }

    pub fn total(&self) -> usize {
        total(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RegionId, usize)> {
        self.0.iter().map(|(region, &count)| (region, count))
    }
}

/// Counts confirmed records per region. Dates are ignored.
pub fn resolve_region_counts(confirmed: &[CaseRecord]) -> RegionCaseIndex {
    let mut counts = seed_zeroed(confirmed.iter().map(|r| r.region.clone()));
    for record in confirmed {
        increment(&mut counts, &record.region);
    }
    RegionCaseIndex(counts)
}

/// Number of records reported on the latest day present in the input.
///
/// Matches are counted across the whole slice, not just a trailing run.
pub fn last_period_confirmed_count(confirmed: &[CaseRecord]) -> usize {
    let Some(as_of) = confirmed.iter().filter_map(|r| r.date).max() else {
        return 0;
    };
    confirmed.iter().filter(|r| r.date == Some(as_of)).count()
}

/// Headline figures for the map's info panel.
pub fn summarize(payload: &CasePayload, confirmed: &[CaseRecord]) -> DashboardSummary {
    DashboardSummary {
        total_confirmed: payload.confirmed.len(),
        total_deaths: payload.deaths.len(),
        total_recovered: payload.recovered.len(),
        last_period_confirmed: last_period_confirmed_count(confirmed),
        as_of: confirmed.iter().filter_map(|r| r.date).max(),
    }
}
