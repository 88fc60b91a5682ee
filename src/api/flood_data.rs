/// Flood data operations: `/data` (single lookup) and `/databatch`.
///
/// `/data` bodies go through the sanitizer before typed decoding; the
/// decoded envelope must carry a status, match type or request id.

use tracing::warn;

use super::client::FloodApiClient;
use super::sanitize::sanitize_body;
use crate::model::{BatchDataRequest, FloodApiError, FloodDataBatch, FloodDataOptions, FloodDataResponse};

impl FloodApiClient {
    /// `GET /data`: FEMA flood data for one location.
    ///
    /// # Errors
    /// Any gateway error, plus `Sanitize` (body is not JSON), `Decode` (JSON
    /// does not fit the envelope) and `InvalidResponse` (no status, match
    /// type or request id).
    pub fn fetch_flood_data(&self, opts: &FloodDataOptions) -> Result<FloodDataResponse, FloodApiError> {
        let raw = self.do_request("GET", "/data", Some(&opts.to_query()), None)?;
        decode_flood_data(&raw.body)
    }

    /// `POST /databatch`: submits a batch and returns its id and the URL to
    /// poll for results. Polling is left to the caller.
    pub fn submit_flood_data_batch(
        &self,
        mut batch: BatchDataRequest,
    ) -> Result<FloodDataBatch, FloodApiError> {
        if batch.api_key.is_empty() {
            batch.api_key = self.api_key().to_string();
        }
        let body = serde_json::to_vec(&batch).map_err(FloodApiError::Encode)?;

        let raw = self.do_request("POST", "/databatch", None, Some(body))?;
        serde_json::from_slice(&raw.body).map_err(|source| FloodApiError::Decode {
            target: "FloodDataBatch",
            source,
        })
    }
}

/// Sanitizes and decodes a `/data` body.
///
/// Paths the API answered with "Access Denied" end up in
/// `result.denied_access`.
pub fn decode_flood_data(raw: &[u8]) -> Result<FloodDataResponse, FloodApiError> {
    let (sanitized, denied) = sanitize_body(raw)?;
    for path in &denied {
        warn!(%path, "API key has no access to field; value cleared");
    }

    let mut response: FloodDataResponse =
        serde_json::from_value(sanitized).map_err(|source| FloodApiError::Decode {
            target: "FloodDataResponse",
            source,
        })?;

    if !response.is_recognizable() {
        return Err(FloodApiError::InvalidResponse {
            raw: String::from_utf8_lossy(raw).into_owned(),
        });
    }

    response.result.denied_access = denied;
    Ok(response)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
