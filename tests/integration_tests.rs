use case_dashboard::analyzers::aggregate::aggregate_payload;
use case_dashboard::analyzers::severity::Severity;
use case_dashboard::config::Config;
use case_dashboard::infra::case_api::client::CaseApiClient;
use case_dashboard::parser::parse_cases;
use case_dashboard::pipeline::{chart_pipeline, map_pipeline};
use case_dashboard::records::RegionId;
use pretty_assertions::assert_eq;

const CASES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/cases.json");
const DISTRICTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/districts.geojson");

fn fixture_source() -> CaseApiClient {
    CaseApiClient::new(Config {
        cases_url: CASES.to_string(),
        boundaries_url: DISTRICTS.to_string(),
    })
}

#[test]
fn test_full_aggregation() {
    let bytes = include_bytes!("fixtures/cases.json");
    let payload = parse_cases(bytes).expect("Failed to parse cases");
    let result = aggregate_payload(&payload);

    let days: Vec<_> = result
        .confirmed_by_date
        .iter()
        .map(|(date, count)| (date.to_string(), *count))
        .collect();
    assert_eq!(
        days,
        vec![
            ("2020-04-24".to_string(), 2),
            ("2020-04-25".to_string(), 1),
            ("2020-04-26".to_string(), 3),
            ("2020-04-27".to_string(), 2),
        ]
    );
    assert_eq!(
        result.deaths_by_date.values().copied().collect::<Vec<_>>(),
        vec![0, 1, 0, 1]
    );

    let regions: Vec<_> = result
        .confirmed_by_region
        .iter()
        .map(|(region, count)| (region.as_str(), *count))
        .collect();
    assert_eq!(
        regions,
        vec![
            ("HUS", 5),
            ("Pirkanmaa", 2),
            ("Varsinais-Suomi", 1),
            (RegionId::UNKNOWN, 1),
        ]
    );
    assert_eq!(result.deaths_by_region[&RegionId::new("HYKS")], 2);

    assert_eq!(result.skipped.undated_confirmed, 1);
    assert_eq!(result.skipped.unmatched_deaths, 1);
}

#[tokio::test]
async fn test_chart_pipeline_from_files() {
    let chart = chart_pipeline(&fixture_source())
        .await
        .expect("chart pipeline failed");

    assert_eq!(chart.labels, vec!["24.4.", "25.4.", "26.4.", "27.4."]);
    assert_eq!(chart.cumulative_confirmed, vec![2, 3, 6, 8]);
    assert_eq!(chart.cumulative_deaths, vec![0, 1, 1, 2]);
    assert_eq!(chart.latest_confirmed, 2);
    assert_eq!(chart.latest_deaths, 1);
}

#[tokio::test]
async fn test_map_pipeline_from_files() {
    let map = map_pipeline(&fixture_source())
        .await
        .expect("map pipeline failed");

    assert_eq!(map.summary.total_confirmed, 9);
    assert_eq!(map.summary.total_deaths, 3);
    assert_eq!(map.summary.total_recovered, 2);
    assert_eq!(map.summary.last_period_confirmed, 2);
    assert_eq!(map.summary.as_of.map(|d| d.to_string()), Some("2020-04-27".to_string()));
    assert_eq!(map.regions.total(), 9);

    let styled: Vec<_> = map
        .features
        .iter()
        .map(|f| (f.region.as_str(), f.cases, f.severity))
        .collect();
    assert_eq!(
        styled,
        vec![
            ("HUS", Some(5), Severity::Minimal),
            ("Pirkanmaa", Some(2), Severity::Minimal),
            ("Lappi", None, Severity::Minimal),
        ]
    );
}

#[tokio::test]
async fn test_missing_source_yields_nothing() {
    let source = CaseApiClient::new(Config {
        cases_url: concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/missing.json").to_string(),
        boundaries_url: DISTRICTS.to_string(),
    });

    assert!(chart_pipeline(&source).await.is_none());
    assert!(map_pipeline(&source).await.is_none());
}
