//! Series derived from a date-keyed count table.

use crate::analyzers::types::DateCounts;
use crate::records::DateKey;

/// Table entries sorted by day, oldest first, whatever order they were
/// inserted in.
pub fn chronological(counts: &DateCounts) -> Vec<(DateKey, usize)> {
    let mut entries: Vec<_> = counts.iter().map(|(&date, &count)| (date, count)).collect();
    entries.sort_by_key(|(date, _)| *date);
    entries
}

/// Running total over the table, oldest day first.
pub fn cumulative_series(counts: &DateCounts) -> Vec<usize> {
    chronological(counts)
        .into_iter()
        .scan(0usize, |sum, (_, count)| {
            *sum += count;
            Some(*sum)
        })
        .collect()
}

/// Count recorded on the most recent day, or 0 for an empty table.
pub fn last_period_count(counts: &DateCounts) -> usize {
    counts
        .iter()
        .max_by_key(|(date, _)| **date)
        .map(|(_, &count)| count)
        .unwrap_or(0)
}

/// `D.M.` labels for each day, oldest first.
pub fn formatted_labels(counts: &DateCounts) -> Vec<String> {
    chronological(counts)
        .iter()
        .map(|(date, _)| date.label())
        .collect()
}
