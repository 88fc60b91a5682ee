/// Records returned by the `/data` and `/databatch` endpoints.
///
/// Field names mirror the upstream JSON. Scalars are optional because any
/// leaf may be absent, `null`, or nulled by the sanitizer.

use serde::{Deserialize, Serialize};

use super::de::{lenient_f64, null_as_default, vec_skip_nulls};
use super::elevation::{Elevation, Property};
use super::hazard::{CensusBureau, Community, FloodFieldHazard, FloodFirmPan, FloodPolAr, Loma};

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Top-level response of a flood data query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloodDataResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request: Option<RequestEcho>,
    #[serde(default)]
    pub parceladdress: Option<ParcelAddress>,
    #[serde(default)]
    pub coords: Option<Coords>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: FloodResult,
    #[serde(default)]
    pub geocode: Option<Geocode>,
    #[serde(default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

impl FloodDataResponse {
    /// A payload is recognizable when status or request id is non-empty, or
    /// when a match type is present at all (an explicit `""` counts).
    pub fn is_recognizable(&self) -> bool {
        let non_empty = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        non_empty(&self.status) || self.match_type.is_some() || non_empty(&self.request_id)
    }
}

/// The query parameters as the API understood them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestEcho {
    #[serde(default)]
    pub searchtype: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
    /// Assessor's Parcel Number. Shape varies by county.
    #[serde(default)]
    pub apn: serde_json::Value,
    #[serde(default)]
    pub county: serde_json::Value,
    #[serde(default)]
    pub state: serde_json::Value,
    #[serde(default)]
    pub match_type: Option<String>,
}

/// Flood data for one location. Sections appear only when requested and
/// permitted for the API key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloodResult {
    #[serde(rename = "flood.s_firm_pan", default, deserialize_with = "vec_skip_nulls")]
    pub flood_firm_pan: Vec<FloodFirmPan>,
    #[serde(rename = "flood.s_fld_haz_ar", default, deserialize_with = "vec_skip_nulls")]
    pub flood_fld_haz_ar: Vec<FloodFieldHazard>,
    #[serde(rename = "flood.s_pol_ar", default, deserialize_with = "vec_skip_nulls")]
    pub flood_pol_ar: Vec<FloodPolAr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub census_bureau: Option<CensusBureau>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<Community>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<Elevation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<Property>,
    /// Letters of Map Amendment near the location.
    #[serde(default, deserialize_with = "vec_skip_nulls", skip_serializing_if = "Vec::is_empty")]
    pub loma: Vec<Loma>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocode: Option<Geocode>,
    /// JSON paths the API answered with "Access Denied" for this key.
    /// Filled in by the client, never read from the payload.
    #[serde(skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub denied_access: Vec<String>,
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geocode {
    /// Ranking score of the geocode match.
    #[serde(default)]
    pub relevance: Option<i64>,
    /// Precision of the match, e.g. "street" or "city".
    #[serde(rename = "matchLevel", default)]
    pub match_level: Option<String>,
    /// Formatted address.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lng: Option<f64>,
}

/// Parcel address as recorded by the county.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParcelAddress {
    #[serde(default)]
    pub addr_number: Option<String>,
    #[serde(default)]
    pub addr_street_name: Option<String>,
    /// Directional prefix such as "N".
    #[serde(default)]
    pub addr_street_prefix: Option<String>,
    /// Directional suffix such as "NW".
    #[serde(default)]
    pub addr_street_suffix: Option<String>,
    /// Street type such as "Ave" or "St".
    #[serde(default)]
    pub addr_street_type: Option<String>,
    #[serde(default)]
    pub county_id: Option<String>,
    #[serde(default)]
    pub county_name: Option<String>,
    #[serde(default)]
    pub muni_name: Option<String>,
    #[serde(default)]
    pub parcel_id: Option<String>,
    #[serde(default)]
    pub physcity: Option<String>,
    #[serde(default)]
    pub physzip: Option<String>,
    #[serde(default)]
    pub state_abbr: Option<String>,
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

/// Acknowledgement of a submitted batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloodDataBatch {
    #[serde(default)]
    pub batch_id: String,
    /// Presigned URL to poll for the batch results.
    #[serde(default)]
    pub result: String,
}
