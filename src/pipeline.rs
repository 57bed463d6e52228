//! The chart and map pipelines.
//!
//! Each pipeline fetches its own data and catches its own failures. A failed
//! fetch or decode is logged and the pipeline yields `None`, so one broken
//! visual never takes the other down.

use tracing::{error, info, warn};

use crate::analyzers::aggregate::aggregate_payload;
use crate::analyzers::regions::{resolve_region_counts, summarize};
use crate::analyzers::severity::legend;
use crate::analyzers::types::{ChartData, MapData};
use crate::boundaries::style_features;
use crate::services::data_source::DataSource;

/// Fetches cases and builds everything the charts draw.
#[tracing::instrument(skip(source))]
pub async fn chart_pipeline<S: DataSource + ?Sized>(source: &S) -> Option<ChartData> {
    let payload = match source.fetch_cases().await {
        Ok(payload) => payload,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Chart data unavailable");
            return None;
        }
    };

    let chart = ChartData::from_aggregation(aggregate_payload(&payload));
    info!(
        days = chart.labels.len(),
        latest_confirmed = chart.latest_confirmed,
        latest_deaths = chart.latest_deaths,
        "Chart data ready"
    );
    Some(chart)
}

/// Fetches cases and boundaries and builds the map overlay.
///
/// A boundary failure still yields the summary and region counts, with an
/// empty overlay.
#[tracing::instrument(skip(source))]
pub async fn map_pipeline<S: DataSource + ?Sized>(source: &S) -> Option<MapData> {
    let payload = match source.fetch_cases().await {
        Ok(payload) => payload,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Map case data unavailable");
            return None;
        }
    };

    let confirmed = payload.confirmed_records();
    let regions = resolve_region_counts(&confirmed);
    let summary = summarize(&payload, &confirmed);

    let features = match source.fetch_boundaries().await {
        Ok(collection) => style_features(&collection, &regions),
        Err(e) => {
            warn!(error = %format!("{e:#}"), "Boundary data unavailable, overlay skipped");
            Vec::new()
        }
    };

    info!(
        regions = regions.len(),
        features = features.len(),
        total_confirmed = summary.total_confirmed,
        "Map data ready"
    );

    Some(MapData {
        summary,
        regions,
        features,
        legend: legend(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundaries::FeatureCollection;
    use crate::records::CasePayload;
    use anyhow::{Result, anyhow};

    struct FixedSource {
        cases: Option<&'static str>,
        boundaries: Option<&'static str>,
    }

    #[async_trait::async_trait]
    impl DataSource for FixedSource {
        async fn fetch_cases(&self) -> Result<CasePayload> {
            let body = self.cases.ok_or_else(|| anyhow!("connection refused"))?;
            Ok(serde_json::from_str(body)?)
        }

        async fn fetch_boundaries(&self) -> Result<FeatureCollection> {
            let body = self.boundaries.ok_or_else(|| anyhow!("connection refused"))?;
            Ok(serde_json::from_str(body)?)
        }
    }

    const CASES: &str = r#"{
        "confirmed": [
            {"date": "2020-04-26T10:00:00Z", "healthCareDistrict": "HUS"},
            {"date": "2020-04-25T10:00:00Z", "healthCareDistrict": "HUS"}
        ],
        "deaths": [{"date": "2020-04-26T10:00:00Z", "area": "HUS"}],
        "recovered": []
    }"#;

    const BOUNDARIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [{"type": "Feature", "properties": {"healthCareDistrict": "HUS"}, "geometry": null}]
    }"#;

    #[tokio::test]
    async fn test_chart_pipeline_builds_series() {
        let source = FixedSource {
            cases: Some(CASES),
            boundaries: None,
        };

        let chart = chart_pipeline(&source).await.unwrap();

        assert_eq!(chart.labels, vec!["25.4.", "26.4."]);
        assert_eq!(chart.cumulative_confirmed, vec![1, 2]);
        assert_eq!(chart.cumulative_deaths, vec![0, 1]);
        assert_eq!(chart.latest_deaths, 1);
    }

    #[tokio::test]
    async fn test_chart_pipeline_swallows_fetch_failure() {
        let source = FixedSource {
            cases: None,
            boundaries: None,
        };
        assert!(chart_pipeline(&source).await.is_none());
    }

    #[tokio::test]
    async fn test_chart_pipeline_swallows_parse_failure() {
        let source = FixedSource {
            cases: Some("{\"confirmed\": 3}"),
            boundaries: None,
        };
        assert!(chart_pipeline(&source).await.is_none());
    }

    #[tokio::test]
    async fn test_map_pipeline_without_boundaries_keeps_counts() {
        let source = FixedSource {
            cases: Some(CASES),
            boundaries: None,
        };

        let map = map_pipeline(&source).await.unwrap();

        assert!(map.features.is_empty());
        assert_eq!(map.regions.total(), 2);
        assert_eq!(map.summary.last_period_confirmed, 1);
        assert_eq!(map.legend.len(), 8);
    }

    #[tokio::test]
    async fn test_map_pipeline_styles_features() {
        let source = FixedSource {
            cases: Some(CASES),
            boundaries: Some(BOUNDARIES),
        };

        let map = map_pipeline(&source).await.unwrap();

        assert_eq!(map.features.len(), 1);
        assert_eq!(map.features[0].cases, Some(2));
    }
}
