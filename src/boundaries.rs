//! Health-care district boundaries and their join with case counts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::analyzers::regions::RegionCaseIndex;
use crate::analyzers::severity::Severity;
use crate::records::RegionId;

/// Feature property holding the district name.
pub const REGION_PROPERTY: &str = "healthCareDistrict";

/// A GeoJSON `FeatureCollection`. Geometry is carried through untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Value,
}

impl Feature {
    pub fn region(&self) -> RegionId {
        let raw = self
            .properties
            .as_ref()
            .and_then(|p| p.get(REGION_PROPERTY))
            .and_then(Value::as_str);
        RegionId::from_raw(raw)
    }
}

/// How one boundary polygon should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionStyle {
    pub region: RegionId,
    pub cases: Option<usize>,
    pub severity: Severity,
    pub color: &'static str,
}

/// Styles every feature in collection order. Regions without a count get
/// the lightest tier.
pub fn style_features(collection: &FeatureCollection, index: &RegionCaseIndex) -> Vec<RegionStyle> {
    collection
        .features
        .iter()
        .map(|feature| {
            let region = feature.region();
            let cases = index.get(&region);
            let severity = Severity::for_count(cases.unwrap_or(0));
            RegionStyle {
                region,
                cases,
                severity,
                color: severity.color(),
            }
        })
        .collect()
}
