/// Elevation and property sections of a flood data result.

use serde::{Deserialize, Serialize};

use super::de::{lenient_f64, vec_skip_nulls};

/// Elevation data for a property: ground elevation, nearby base flood
/// elevations, coastline and waterbodies, storm surge estimates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Elevation {
    /// Ground elevation of the property in meters.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub propertyelevation: Option<f64>,
    #[serde(rename = "flood.basefloodelevation", default, deserialize_with = "vec_skip_nulls")]
    pub flood_base_flood_elevation: Vec<BaseFloodElevation>,
    #[serde(default, deserialize_with = "vec_skip_nulls")]
    pub coastline: Vec<Coastline>,
    #[serde(default, deserialize_with = "vec_skip_nulls")]
    pub waterbody: Vec<Waterbody>,
    #[serde(default)]
    pub stormsurge: Option<StormSurge>,
}

/// Base Flood Elevation (BFE) line near the property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseFloodElevation {
    #[serde(default)]
    pub bfe_ln_id: Option<String>,
    #[serde(default)]
    pub bfe_type: Option<String>,
    #[serde(default)]
    pub dfirm_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distkm: Option<f64>,
    /// Sent as text by the API.
    #[serde(default)]
    pub elevation: Option<String>,
    #[serde(default)]
    pub fld_ar_id: Option<String>,
    #[serde(default)]
    pub fld_zone: Option<String>,
    /// e.g. "Feet".
    #[serde(default)]
    pub len_unit: Option<String>,
    /// Vertical datum of the elevation, e.g. "NAVD88".
    #[serde(default)]
    pub v_datum: Option<String>,
    #[serde(default)]
    pub zone_subty: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coastline {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distkm: Option<f64>,
    #[serde(default)]
    pub ogc_fid: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Waterbody {
    #[serde(default)]
    pub areasqkm: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distkm: Option<f64>,
    /// Geographic Names Information System id.
    #[serde(default)]
    pub gnis_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub objectid: Option<String>,
    #[serde(default)]
    pub ogc_fid: Option<i64>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Estimated flood water level per hurricane category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StormSurge {
    #[serde(rename = "1", default, deserialize_with = "lenient_f64")]
    pub category1: Option<f64>,
    #[serde(rename = "2", default, deserialize_with = "lenient_f64")]
    pub category2: Option<f64>,
    #[serde(rename = "3", default, deserialize_with = "lenient_f64")]
    pub category3: Option<f64>,
    #[serde(rename = "4", default, deserialize_with = "lenient_f64")]
    pub category4: Option<f64>,
    #[serde(rename = "5", default, deserialize_with = "lenient_f64")]
    pub category5: Option<f64>,
}

impl StormSurge {
    /// Surge level for hurricane category 1-5.
    pub fn category(&self, category: u8) -> Option<f64> {
        match category {
            1 => self.category1,
            2 => self.category2,
            3 => self.category3,
            4 => self.category4,
            5 => self.category5,
            _ => None,
        }
    }
}

/// Structure attributes of the property. The API sends every value as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub sqft: Option<String>,
    #[serde(default)]
    pub yearbuilt: Option<String>,
    #[serde(default)]
    pub propertyusedescription: Option<String>,
    #[serde(default)]
    pub constructiondesc: Option<String>,
    #[serde(default)]
    pub storiescount: Option<String>,
    #[serde(default)]
    pub fireresistance: Option<String>,
    #[serde(default)]
    pub parkinggaragetype: Option<String>,
    #[serde(default)]
    pub parkinggaragearea: Option<String>,
}
