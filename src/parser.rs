//! JSON decoders for the case API and boundary documents.

use crate::boundaries::FeatureCollection;
use crate::error::DashboardError;
use crate::records::CasePayload;

/// Decodes a case API response.
///
/// # Errors
///
/// Returns an error if the bytes are not JSON or lack the `confirmed` and
/// `deaths` arrays.
pub fn parse_cases(bytes: &[u8]) -> Result<CasePayload, DashboardError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decodes a GeoJSON boundary document.
///
/// # Errors
///
/// Returns an error if the bytes are not JSON or the document is not a
/// `FeatureCollection`.
pub fn parse_boundaries(bytes: &[u8]) -> Result<FeatureCollection, DashboardError> {
    let collection: FeatureCollection = serde_json::from_slice(bytes)?;
    if collection.kind != "FeatureCollection" {
        return Err(DashboardError::Malformed {
            message: format!("expected FeatureCollection, found {}", collection.kind),
        });
    }
    Ok(collection)
}
