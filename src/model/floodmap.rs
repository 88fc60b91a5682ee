/// Records returned by `/floodmapraw`.

use serde::{Deserialize, Serialize};

use super::de::{lenient_f64, null_as_default, vec_skip_nulls};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloodMapContent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: FloodMapContentResult,
}

/// Flood map polygons and base flood elevation lines around a point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloodMapContentResult {
    #[serde(default, deserialize_with = "vec_skip_nulls")]
    pub bfelist: Vec<BfeListItem>,
    #[serde(default, deserialize_with = "vec_skip_nulls")]
    pub floodregions: Vec<FloodRegion>,
}

/// Base flood elevation line with its geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BfeListItem {
    #[serde(default)]
    pub bfe_ln_id: Option<String>,
    #[serde(default)]
    pub v_datum: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distkm: Option<f64>,
    #[serde(default)]
    pub version_id: Option<String>,
    #[serde(default)]
    pub source_cit: Option<String>,
    /// GeoJSON geometry, as a string.
    #[serde(default)]
    pub geojson: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub elev: Option<f64>,
    #[serde(default)]
    pub dfirm_id: Option<String>,
    #[serde(default)]
    pub len_unit: Option<String>,
    #[serde(default)]
    pub ogc_fid: Option<i64>,
}

/// Flood zone polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloodRegion {
    #[serde(default)]
    pub fld_ar_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distkm: Option<f64>,
    #[serde(default)]
    pub geojson: Option<String>,
    #[serde(default)]
    pub zone_subty: Option<String>,
    #[serde(default)]
    pub fld_zone: Option<String>,
    #[serde(default)]
    pub dfirm_id: Option<String>,
    #[serde(default)]
    pub ogc_fid: Option<i64>,
}
