use tracing::debug;

use crate::analyzers::types::{AggregationResult, SkippedRecords};
use crate::analyzers::utility::{increment, seed_zeroed};
use crate::records::{CasePayload, CaseRecord};

/// Aggregates confirmed and death records into date- and region-keyed counts.
///
/// Inputs are expected newest-first, as the case API returns them. Both are
/// walked in reverse so the date tables come out oldest-first. Every key is
/// seeded with zero before counting starts; the death date table reuses the
/// confirmed date keys, so a death on a day without confirmed cases is only
/// counted regionally.
pub fn aggregate(confirmed: &[CaseRecord], deaths: &[CaseRecord]) -> AggregationResult {
    let mut confirmed_by_date = seed_zeroed(confirmed.iter().rev().filter_map(|r| r.date));
    let mut deaths_by_date = confirmed_by_date.clone();

    let mut confirmed_by_region = seed_zeroed(confirmed.iter().map(|r| r.region.clone()));
    let mut deaths_by_region = seed_zeroed(deaths.iter().map(|r| r.region.clone()));

    let mut skipped = SkippedRecords::default();

    for record in confirmed.iter().rev() {
        match &record.date {
            Some(date) => {
                increment(&mut confirmed_by_date, date);
            }
            None => skipped.undated_confirmed += 1,
        }
        increment(&mut confirmed_by_region, &record.region);
    }

    for record in deaths.iter().rev() {
        match &record.date {
            Some(date) => {
                if !increment(&mut deaths_by_date, date) {
                    debug!(date = %date, region = %record.region, "Death dated outside confirmed range");
                    skipped.unmatched_deaths += 1;
                }
            }
            None => skipped.undated_deaths += 1,
        }
        increment(&mut deaths_by_region, &record.region);
    }

    debug!(
        confirmed = confirmed.len(),
        deaths = deaths.len(),
        days = confirmed_by_date.len(),
        regions = confirmed_by_region.len(),
        ?skipped,
        "Aggregated case records"
    );

    AggregationResult {
        confirmed_by_date,
        deaths_by_date,
        confirmed_by_region,
        deaths_by_region,
        skipped,
    }
}

/// Normalizes a decoded API document and aggregates it.
pub fn aggregate_payload(payload: &CasePayload) -> AggregationResult {
    aggregate(&payload.confirmed_records(), &payload.death_records())
}
