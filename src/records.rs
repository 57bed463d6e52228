//! Case records as delivered by the case API and their normalized form.
//!
//! Confirmed cases name their region in `healthCareDistrict`, deaths in
//! `area`. Both implement [`RegionalRecord`], which resolves the raw fields
//! into a [`CaseRecord`] once, so aggregation never looks at field names.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a health-care district or hospital catchment area.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Sentinel used for records that carry no usable region.
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    /// Blank or missing identifiers collapse to [`RegionId::unknown`].
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(id) if !id.is_empty() => Self::new(id),
            _ => Self::unknown(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reporting day, derived by truncating a timestamp to its date portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Takes the calendar date written before the `T` separator. A bare
    /// `YYYY-MM-DD` is accepted; anything with a time portion must be a
    /// complete RFC 3339 or naive ISO-8601 timestamp.
    pub fn parse(timestamp: &str) -> Option<Self> {
        let timestamp = timestamp.trim();
        let date_part = match timestamp.split_once('T') {
            None => timestamp,
            Some((date_part, _)) => {
                let valid = DateTime::parse_from_rfc3339(timestamp).is_ok()
                    || NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok();
                if !valid {
                    return None;
                }
                date_part
            }
        };
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok().map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Chart label: day and month without leading zeros, e.g. `26.4.`
    pub fn label(&self) -> String {
        self.0.format("%-d.%-m.").to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Shorthand for [`DateKey::parse`].
pub fn date_key(timestamp: &str) -> Option<DateKey> {
    DateKey::parse(timestamp)
}

/// One confirmed or death event after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub date: Option<DateKey>,
    pub region: RegionId,
}

impl CaseRecord {
    pub fn new(date: Option<DateKey>, region: RegionId) -> Self {
        Self { date, region }
    }
}

/// Anything that carries a timestamp and a region identifier.
pub trait RegionalRecord {
    fn raw_date(&self) -> Option<&str>;
    fn raw_region(&self) -> Option<&str>;

    fn region(&self) -> RegionId {
        RegionId::from_raw(self.raw_region())
    }

    fn date_key(&self) -> Option<DateKey> {
        self.raw_date().and_then(DateKey::parse)
    }

    fn normalize(&self) -> CaseRecord {
        CaseRecord::new(self.date_key(), self.region())
    }
}

/// Normalizes a slice of raw records, preserving order.
pub fn normalize_all<R: RegionalRecord>(records: &[R]) -> Vec<CaseRecord> {
    records.iter().map(RegionalRecord::normalize).collect()
}

/// A confirmed case as returned by the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedCase {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub health_care_district: Option<String>,
}

impl RegionalRecord for ConfirmedCase {
    fn raw_date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn raw_region(&self) -> Option<&str> {
        self.health_care_district.as_deref()
    }
}

/// A death as returned by the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeathCase {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub area: Option<String>,
}

impl RegionalRecord for DeathCase {
    fn raw_date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn raw_region(&self) -> Option<&str> {
        self.area.as_deref()
    }
}

/// Top-level case API document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CasePayload {
    pub confirmed: Vec<ConfirmedCase>,
    pub deaths: Vec<DeathCase>,
    #[serde(default)]
    pub recovered: Vec<serde_json::Value>,
}

impl CasePayload {
    pub fn confirmed_records(&self) -> Vec<CaseRecord> {
        normalize_all(&self.confirmed)
    }

    pub fn death_records(&self) -> Vec<CaseRecord> {
        normalize_all(&self.deaths)
    }
}

// Non-string values (numbers, objects) are treated like a missing field.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}
