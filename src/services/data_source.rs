//! Trait for the two upstream documents the dashboard is drawn from.

use anyhow::Result;

use crate::boundaries::FeatureCollection;
use crate::records::CasePayload;

/// Abstraction over where case and boundary data come from.
///
/// Each call performs its own fetch; nothing is cached between calls.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the confirmed, death and recovered case lists.
    async fn fetch_cases(&self) -> Result<CasePayload>;

    /// Returns the district boundary polygons.
    async fn fetch_boundaries(&self) -> Result<FeatureCollection>;
}
