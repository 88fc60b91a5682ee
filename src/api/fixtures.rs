/// Test fixtures: representative payloads from the National Flood Data API v3.
///
/// Structurally complete but trimmed to what the decoder and sanitizer need.
/// `/data` response shape:
///   status, request_id, match_type
///   request            - echo of the query parameters
///   geocode, coords    - resolved location
///   parceladdress      - county parcel record (parcel searches only)
///   result
///     ."flood.s_fld_haz_ar"[] - hazard areas with fld_zone / sfha_tf
///     ."flood.s_firm_pan"[]   - FIRM panels
///     ."flood.s_pol_ar"[]     - communities
///     .census_bureau, .community, .elevation, .property, .loma[]
///
/// Two upstream quirks are reproduced on purpose: string values padded with
/// whitespace, and "Access Denied" strings in place of sections the key may
/// not read.

/// Palm Beach address lookup with elevation, LOMA and property data.
/// Zone AE with a CBSA hidden behind "Access Denied".
#[cfg(test)]
pub(crate) fn fixture_flood_data_json() -> &'static str {
    r#"{
      "status": "OK",
      "request_id": "b6a1f7d2-3c1e-4c55-9a11-0d7f4b2f6e10",
      "match_type": "address",
      "request": {
        "searchtype": "addressparcel",
        "address": "430 Australian Ave Palm Beach, FL 33480",
        "lat": null,
        "lng": null,
        "apn": null,
        "county": null,
        "state": null,
        "match_type": "address"
      },
      "geocode": {
        "relevance": 1,
        "matchLevel": "houseNumber",
        "label": "430 Australian Ave, Palm Beach, FL 33480, United States   ",
        "latitude": 26.70563,
        "longitude": -80.03641
      },
      "coords": { "lat": "26.70563", "lng": "-80.03641" },
      "parceladdress": {
        "addr_number": "430",
        "addr_street_name": "AUSTRALIAN",
        "addr_street_prefix": null,
        "addr_street_suffix": null,
        "addr_street_type": "AVE",
        "county_id": "12099",
        "county_name": "Palm Beach",
        "muni_name": "PALM BEACH",
        "parcel_id": "50434322010040140",
        "physcity": "PALM BEACH",
        "physzip": "33480",
        "state_abbr": "FL"
      },
      "result": {
        "flood.s_fld_haz_ar": [
          {
            "fld_ar_id": "12099C_1932",
            "version_id": "1.1.1.0",
            "sfha_tf": "T",
            "zone_subty": null,
            "source_cit": "12099C_STUDY1",
            "fld_zone": "AE   ",
            "dfirm_id": "12099C"
          }
        ],
        "flood.s_firm_pan": [
          {
            "suffix": "F",
            "pnp_reason": null,
            "firm_pan": "12099C0593F",
            "eff_date": "2017-10-05",
            "firm_id": "12099C",
            "dfirm_id": "12099C",
            "st_fips": "12",
            "panel_typ": "Countywide, Panel Printed",
            "panel": "0593"
          }
        ],
        "flood.s_pol_ar": [
          {
            "comm_no": "0211",
            "pol_name1": "Town of Palm Beach",
            "co_fips": "099",
            "cid": "120220",
            "com_nfo_id": "12099C_19",
            "pol_ar_id": "12099C_51"
          }
        ],
        "census_bureau": {
          "census_block": "120990032001",
          "cbsa": "Access Denied",
          "metdiv": { "metdivfp": "48424", "name": "West Palm Beach-Boca Raton-Boynton Beach, FL" }
        },
        "community": {
          "firm": "01/05/73",
          "regemer_sanction": "05/04/73",
          "tribal": "No",
          "notes": null,
          "comm_name": "PALM BEACH, TOWN OF",
          "comm_part": true,
          "fhbm": "01/05/73",
          "curreff": "10/05/17"
        },
        "elevation": {
          "propertyelevation": 2.1,
          "flood.basefloodelevation": [
            {
              "bfe_ln_id": null,
              "bfe_type": "Static",
              "dfirm_id": "12099C",
              "distkm": 0,
              "elevation": "6",
              "fld_ar_id": "12099C_1932",
              "fld_zone": "AE",
              "len_unit": "Feet",
              "v_datum": "NAVD88",
              "zone_subty": null
            }
          ],
          "coastline": [ { "distkm": 0.41, "ogc_fid": 5512 } ],
          "waterbody": [
            {
              "areasqkm": "12.03",
              "distkm": 0.12,
              "gnis_id": "294062",
              "name": "Lake Worth",
              "objectid": "88231",
              "ogc_fid": 40110,
              "state": "FL"
            }
          ],
          "stormsurge": { "1": 1.2, "2": 2.4, "3": 3.9, "4": 5.1, "5": 6.6 }
        },
        "property": {
          "sqft": "3120",
          "yearbuilt": "1951  ",
          "propertyusedescription": "Single Family Residence",
          "constructiondesc": "Masonry",
          "storiescount": "2",
          "fireresistance": null,
          "parkinggaragetype": "Attached",
          "parkinggaragearea": "420"
        },
        "loma": [
          {
            "casenumber": "19-04-1234A",
            "cid": "120220",
            "communityn": "PALM BEACH, TOWN OF",
            "dateended": "2019-04-17",
            "determinat": "LOMA",
            "lat": "26.7049",
            "lon": "-80.0371",
            "miles": 0.08,
            "pdfhyperli": "https://msc.fema.gov/portal/downloadProduct?productID=19-04-1234A",
            "pdflink": "19-04-1234A.pdf",
            "projectcat": "Structure",
            "projectnam": "Lot 14 Block 1",
            "status": "Effective"
          }
        ]
      }
    }"#
}

/// Coordinate lookup by a key without census, property or LOMA access.
/// Whole sections and a list element are "Access Denied".
#[cfg(test)]
pub(crate) fn fixture_access_denied_sections_json() -> &'static str {
    r#"{
      "status": "OK",
      "request_id": "7f0e7b3e-0000-4d0a-8d7a-1c2b3a4d5e6f",
      "match_type": null,
      "coords": { "lat": 34.071783, "lng": -118.2596 },
      "result": {
        "flood.s_fld_haz_ar": [
          {
            "fld_ar_id": "06037C_4410",
            "sfha_tf": "F",
            "fld_zone": "X",
            "zone_subty": "AREA OF MINIMAL FLOOD HAZARD",
            "dfirm_id": "06037C"
          }
        ],
        "flood.s_firm_pan": [],
        "flood.s_pol_ar": [],
        "census_bureau": { "census_block": "060372074001", "cbsa": "  Access Denied", "metdiv": "Access Denied" },
        "property": "Access Denied",
        "loma": ["Access Denied"]
      }
    }"#
}

/// Minimal recognizable response.
#[cfg(test)]
pub(crate) fn fixture_minimal_match_json() -> &'static str {
    r#"{"status":"match","match_type":"exact","request_id":"abc"}"#
}

/// Valid JSON that is not an API response.
#[cfg(test)]
pub(crate) fn fixture_unrecognized_json() -> &'static str {
    r#"{"foo":"bar"}"#
}

/// `/floodmapraw` around a Los Angeles coordinate, geometry abbreviated.
#[cfg(test)]
pub(crate) fn fixture_flood_map_raw_json() -> &'static str {
    r#"{
      "result": {
        "bfelist": [
          {
            "bfe_ln_id": "06037C_702",
            "v_datum": "NAVD88",
            "distkm": 0.35,
            "version_id": "1.1.1.0",
            "source_cit": "06037C_STUDY2",
            "geojson": "{\"type\":\"LineString\",\"coordinates\":[[-118.26,34.07],[-118.25,34.07]]}",
            "elev": 312,
            "dfirm_id": "06037C",
            "len_unit": "Feet",
            "ogc_fid": 99120
          }
        ],
        "floodregions": [
          {
            "fld_ar_id": "06037C_4410",
            "distkm": 0,
            "geojson": "{\"type\":\"Polygon\",\"coordinates\":[]}",
            "zone_subty": "AREA OF MINIMAL FLOOD HAZARD",
            "fld_zone": "X",
            "dfirm_id": "06037C",
            "ogc_fid": 77001
          },
          null
        ]
      }
    }"#
}

/// Batch acknowledgement.
#[cfg(test)]
pub(crate) fn fixture_batch_ack_json() -> &'static str {
    r#"{
      "batch_id": "batch-5d1c",
      "result": "https://nfd-batch-results.s3.amazonaws.com/batch-5d1c.json?X-Amz-Signature=abc"
    }"#
}
