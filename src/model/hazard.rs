/// FEMA hazard, community and census records nested under `result`.

use serde::{Deserialize, Serialize};

use super::de::lenient_f64;

/// Flood Insurance Rate Map (FIRM) panel covering the location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloodFirmPan {
    #[serde(default)]
    pub suffix: Option<String>,
    /// Reason the panel is not printed; `None` for printed panels.
    #[serde(default)]
    pub pnp_reason: Option<String>,
    #[serde(default)]
    pub firm_pan: Option<String>,
    /// Date the panel became effective for flood insurance.
    #[serde(default)]
    pub eff_date: Option<String>,
    #[serde(default)]
    pub firm_id: Option<String>,
    /// DFIRM identifier of the digital version of the panel.
    #[serde(default)]
    pub dfirm_id: Option<String>,
    /// State FIPS code.
    #[serde(default)]
    pub st_fips: Option<String>,
    /// e.g. "Countywide, Panel Printed".
    #[serde(default)]
    pub panel_typ: Option<String>,
    #[serde(default)]
    pub panel: Option<String>,
}

/// Flood hazard area the location falls in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloodFieldHazard {
    #[serde(default)]
    pub fld_ar_id: Option<String>,
    #[serde(default)]
    pub version_id: Option<String>,
    /// Special Flood Hazard Area flag, "T" or "F".
    #[serde(default)]
    pub sfha_tf: Option<String>,
    #[serde(default)]
    pub zone_subty: Option<String>,
    #[serde(default)]
    pub source_cit: Option<String>,
    /// Zone designation such as "AE" or "VE". See `flood_zone_explanation`.
    #[serde(default)]
    pub fld_zone: Option<String>,
    #[serde(default)]
    pub dfirm_id: Option<String>,
}

impl FloodFieldHazard {
    /// True when the area is flagged as a Special Flood Hazard Area.
    pub fn is_sfha(&self) -> bool {
        self.sfha_tf.as_deref() == Some("T")
    }
}

/// Political area (community) record from the flood map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloodPolAr {
    #[serde(default)]
    pub comm_no: Option<String>,
    #[serde(default)]
    pub pol_name1: Option<String>,
    /// County FIPS code.
    #[serde(default)]
    pub co_fips: Option<String>,
    #[serde(default)]
    pub cid: Option<String>,
    #[serde(default)]
    pub com_nfo_id: Option<String>,
    #[serde(default)]
    pub pol_ar_id: Option<String>,
}

/// Letter of Map Amendment record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loma {
    #[serde(default)]
    pub casenumber: Option<String>,
    #[serde(default)]
    pub cid: Option<String>,
    #[serde(default)]
    pub communityn: Option<String>,
    #[serde(default)]
    pub dateended: Option<String>,
    /// Determination letter type.
    #[serde(default)]
    pub determinat: Option<String>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
    /// Distance from the queried location.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub miles: Option<f64>,
    #[serde(default)]
    pub pdfhyperli: Option<String>,
    #[serde(default)]
    pub pdflink: Option<String>,
    #[serde(default)]
    pub projectcat: Option<String>,
    #[serde(rename = "projectnam", default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Community participation in the National Flood Insurance Program.
///
/// Dates are returned as unformatted text. `curreff` may carry markers such
/// as `(>)` for future dates, `(M)` no elevation determined, `(S)` suspended,
/// `(E)` emergency program entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Community {
    #[serde(default)]
    pub firm: Option<String>,
    #[serde(default)]
    pub regemer_sanction: Option<String>,
    #[serde(default)]
    pub tribal: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub comm_name: Option<String>,
    #[serde(default)]
    pub comm_part: Option<bool>,
    #[serde(default)]
    pub fhbm: Option<String>,
    #[serde(default)]
    pub curreff: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CensusBureau {
    #[serde(default)]
    pub census_block: Option<String>,
    #[serde(default)]
    pub cbsa: Option<Cbsa>,
    #[serde(default)]
    pub metdiv: Option<MetDiv>,
}

/// Core-Based Statistical Area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cbsa {
    #[serde(default)]
    pub cbsafp: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Metropolitan division.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetDiv {
    #[serde(default)]
    pub metdivfp: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sfha_flag() {
        let hazard = FloodFieldHazard {
            sfha_tf: Some("T".to_string()),
            ..Default::default()
        };
        assert!(hazard.is_sfha());
        assert!(!FloodFieldHazard::default().is_sfha(), "missing flag is not SFHA");
    }

    #[test]
    fn test_census_bureau_with_nulled_cbsa() {
        let census: CensusBureau =
            serde_json::from_str(r#"{"census_block":"120990032001","cbsa":null}"#).unwrap();
        assert_eq!(census.census_block.as_deref(), Some("120990032001"));
        assert!(census.cbsa.is_none());
    }
}
