//! Output formatting for chart and map data.
//!
//! Supports pretty-printing to the log, JSON, and CSV tables.

use std::fmt::Debug;
use std::io::Write;

use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use tracing::info;

use crate::analyzers::series::chronological;
use crate::analyzers::severity::Severity;
use crate::analyzers::types::{ChartData, MapData};

/// Logs any output structure using Rust's debug pretty-print format.
pub fn print_pretty<T: Debug>(value: &T) {
    info!("{:#?}", value);
}

/// Writes a value as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[derive(Serialize)]
struct DateRow<'a> {
    date: String,
    label: &'a str,
    confirmed: usize,
    deaths: usize,
    cumulative_confirmed: usize,
    cumulative_deaths: usize,
}

#[derive(Serialize)]
struct RegionRow<'a> {
    region: &'a str,
    cases: usize,
    severity: Severity,
    color: &'static str,
}

/// Writes one CSV row per reporting day, oldest first.
pub fn write_date_csv<W: Write>(writer: W, chart: &ChartData) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    let days = chronological(&chart.aggregation.confirmed_by_date);
    let rows = days
        .iter()
        .zip(chart.labels.iter())
        .zip(chart.cumulative_confirmed.iter().zip(chart.cumulative_deaths.iter()));

    for (((date, confirmed), label), (cumulative_confirmed, cumulative_deaths)) in rows {
        writer.serialize(DateRow {
            date: date.to_string(),
            label,
            confirmed: *confirmed,
            deaths: chart
                .aggregation
                .deaths_by_date
                .get(date)
                .copied()
                .unwrap_or(0),
            cumulative_confirmed: *cumulative_confirmed,
            cumulative_deaths: *cumulative_deaths,
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes one CSV row per region with its map tier.
pub fn write_region_csv<W: Write>(writer: W, map: &MapData) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    for (region, cases) in map.regions.iter() {
        let severity = Severity::for_count(cases);
        writer.serialize(RegionRow {
            region: region.as_str(),
            cases,
            severity,
            color: severity.color(),
        })?;
    }

    writer.flush()?;
    Ok(())
}
