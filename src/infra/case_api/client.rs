use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::boundaries::FeatureCollection;
use crate::config::Config;
use crate::fetch::{BasicClient, HttpClient, load_source};
use crate::parser::{parse_boundaries, parse_cases};
use crate::records::CasePayload;
use crate::services::data_source::DataSource;

/// [`DataSource`] backed by the public case API and boundary file.
pub struct CaseApiClient<C = BasicClient> {
    http: C,
    config: Config,
}

impl CaseApiClient<BasicClient> {
    pub fn new(config: Config) -> Self {
        Self::with_client(BasicClient::new(), config)
    }
}

impl<C: HttpClient> CaseApiClient<C> {
    pub fn with_client(http: C, config: Config) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<C: HttpClient> DataSource for CaseApiClient<C> {
    async fn fetch_cases(&self) -> Result<CasePayload> {
        let url = &self.config.cases_url;
        let bytes = load_source(&self.http, url)
            .await
            .with_context(|| format!("Failed to load cases from {url}"))?;
        let payload =
            parse_cases(&bytes).with_context(|| format!("Failed to parse cases from {url}"))?;

        debug!(
            confirmed = payload.confirmed.len(),
            deaths = payload.deaths.len(),
            recovered = payload.recovered.len(),
            "Case payload decoded"
        );
        Ok(payload)
    }

    async fn fetch_boundaries(&self) -> Result<FeatureCollection> {
        let url = &self.config.boundaries_url;
        let bytes = load_source(&self.http, url)
            .await
            .with_context(|| format!("Failed to load boundaries from {url}"))?;
        let collection = parse_boundaries(&bytes)
            .with_context(|| format!("Failed to parse boundaries from {url}"))?;

        debug!(features = collection.features.len(), "Boundary collection decoded");
        Ok(collection)
    }
}
