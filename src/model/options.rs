/// Request options for each API operation and their query-string encoding.
///
/// Query parameters are collected into a `QueryParams` map; keys are unique
/// and sorted, so the encoded query string is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Query parameters of one request, encoded in key order.
pub type QueryParams = BTreeMap<String, String>;

/// How the API should locate the property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Geocode the address, look up by coordinates.
    #[default]
    AddressCoord,
    /// Geocode the address, look up by parcel boundary.
    AddressParcel,
    /// Look up by the given coordinates.
    Coord,
    /// Find the parcel at the given coordinates.
    CoordParcel,
    /// Look up by a polygon.
    Polygon,
}

impl SearchType {
    pub const ALL: [SearchType; 5] = [
        SearchType::AddressCoord,
        SearchType::AddressParcel,
        SearchType::Coord,
        SearchType::CoordParcel,
        SearchType::Polygon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::AddressCoord => "addresscoord",
            SearchType::AddressParcel => "addressparcel",
            SearchType::Coord => "coord",
            SearchType::CoordParcel => "coordparcel",
            SearchType::Polygon => "polygon",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown search type '{}', expected one of: addresscoord, addressparcel, coord, coordparcel, polygon",
                    s
                )
            })
    }
}

fn set_flag(q: &mut QueryParams, key: &str, value: bool) {
    q.insert(key.to_string(), value.to_string());
}

// ---------------------------------------------------------------------------
// /data
// ---------------------------------------------------------------------------

/// Options for a single flood data query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloodDataOptions {
    pub search_type: SearchType,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Polygon for `SearchType::Polygon` searches.
    pub polygon: Option<String>,
    /// Include Letters of Map Amendment.
    pub loma: bool,
    pub elevation: bool,
    pub property: bool,
    pub parcel: bool,
}

impl FloodDataOptions {
    /// Query for a street address.
    pub fn for_address(search_type: SearchType, address: impl Into<String>) -> Self {
        Self {
            search_type,
            address: Some(address.into()),
            ..Default::default()
        }
    }

    /// Query for a coordinate pair.
    pub fn for_coords(search_type: SearchType, lat: f64, lng: f64) -> Self {
        Self {
            search_type,
            lat: Some(lat),
            lng: Some(lng),
            ..Default::default()
        }
    }

    /// Encodes the options. `searchtype` is always sent, optional values only
    /// when present, flags only when set.
    pub fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert("searchtype".to_string(), self.search_type.to_string());

        if let Some(address) = self.address.as_deref().filter(|a| !a.is_empty()) {
            q.insert("address".to_string(), address.to_string());
        }
        if let Some(lat) = self.lat {
            q.insert("lat".to_string(), lat.to_string());
        }
        if let Some(lng) = self.lng {
            q.insert("lng".to_string(), lng.to_string());
        }
        if let Some(polygon) = self.polygon.as_deref().filter(|p| !p.is_empty()) {
            q.insert("polygon".to_string(), polygon.to_string());
        }

        for (key, enabled) in [
            ("loma", self.loma),
            ("elevation", self.elevation),
            ("property", self.property),
            ("parcel", self.parcel),
        ] {
            if enabled {
                set_flag(&mut q, key, true);
            }
        }
        q
    }
}

// ---------------------------------------------------------------------------
// /floodmapraw
// ---------------------------------------------------------------------------

/// Options for the raw flood map polygons around a point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloodMapRawOptions {
    pub lat: f64,
    pub lng: f64,
    /// Extent in degrees: 0.04, 0.06 or 0.08. The API defaults to 0.08.
    pub size: Option<f64>,
    pub geojson: bool,
    /// Exclude X zones.
    pub exclude_x: bool,
    pub elevation: bool,
}

impl FloodMapRawOptions {
    pub fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert("lat".to_string(), self.lat.to_string());
        q.insert("lng".to_string(), self.lng.to_string());
        if let Some(size) = self.size.filter(|s| *s != 0.0) {
            q.insert("size".to_string(), format!("{:.2}", size));
        }
        set_flag(&mut q, "geojson", self.geojson);
        set_flag(&mut q, "excludex", self.exclude_x);
        set_flag(&mut q, "elevation", self.elevation);
        q
    }
}

// ---------------------------------------------------------------------------
// /dynamic.html and /staticmap
// ---------------------------------------------------------------------------

/// Options for the embeddable interactive map page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicMapOptions {
    /// Map key passed through to the page.
    pub key: String,
    pub lat: f64,
    pub lng: f64,
    pub zoom: u32,
    pub show_legend: bool,
}

impl DynamicMapOptions {
    pub fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert("key".to_string(), self.key.clone());
        q.insert("lat".to_string(), self.lat.to_string());
        q.insert("lng".to_string(), self.lng.to_string());
        q.insert("zoom".to_string(), self.zoom.to_string());
        set_flag(&mut q, "showLegend", self.show_legend);
        q
    }
}

/// Options for a rendered flood map image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticMapOptions {
    pub lat: f64,
    pub lng: f64,
    /// Image height in pixels.
    pub height: u32,
    /// Image width in pixels.
    pub width: u32,
    pub show_marker: bool,
    pub show_legend: bool,
    pub zoom: u32,
}

impl StaticMapOptions {
    pub fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert("lat".to_string(), self.lat.to_string());
        q.insert("lng".to_string(), self.lng.to_string());
        q.insert("height".to_string(), self.height.to_string());
        q.insert("width".to_string(), self.width.to_string());
        set_flag(&mut q, "showMarker", self.show_marker);
        set_flag(&mut q, "showLegend", self.show_legend);
        q.insert("zoom".to_string(), self.zoom.to_string());
        q
    }
}

// ---------------------------------------------------------------------------
// /databatch
// ---------------------------------------------------------------------------

fn is_false(b: &bool) -> bool {
    !*b
}

/// One lookup inside a batch. Coordinates are sent as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Caller-chosen id used to match results.
    pub id: String,
    #[serde(rename = "searchtype")]
    pub search_type: SearchType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lat: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lng: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub polygon: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub loma: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub elevation: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub property: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub parcel: bool,
}

/// Body of a batch submission. An empty `api_key` is filled in from the
/// client's credential before sending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchDataRequest {
    #[serde(rename = "apiKey", default)]
    pub api_key: String,
    pub requests: Vec<BatchRequest>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
