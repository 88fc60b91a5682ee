/// Map operations: raw flood map polygons, vector and storm surge tiles,
/// the dynamic map page and static map images.
///
/// Tiles and images are returned as fully buffered bytes.

use super::client::FloodApiClient;
use crate::model::{DynamicMapOptions, FloodApiError, FloodMapContent, FloodMapRawOptions, StaticMapOptions};

impl FloodApiClient {
    /// `GET /floodmapraw`: flood zone polygons and BFE lines around a point.
    /// Responses are often large GeoJSON payloads.
    pub fn fetch_flood_map_raw(&self, opts: &FloodMapRawOptions) -> Result<FloodMapContent, FloodApiError> {
        let raw = self.do_request("GET", "/floodmapraw", Some(&opts.to_query()), None)?;
        serde_json::from_slice(&raw.body).map_err(|source| FloodApiError::Decode {
            target: "FloodMapContent",
            source,
        })
    }

    /// `GET /tiles/flood-vector/{z}/{x}/{y}.mvt`: Mapbox vector tile bytes.
    pub fn fetch_flood_vector_tile(&self, z: u32, x: u32, y: u32) -> Result<Vec<u8>, FloodApiError> {
        let path = flood_vector_tile_path(z, x, y);
        Ok(self.do_request("GET", &path, None, None)?.body)
    }

    /// `GET /tiles/stormsurge/{category}/{z}/{x}/{y}.png`: PNG tile bytes.
    pub fn fetch_storm_surge_tile(
        &self,
        category: &str,
        z: u32,
        x: u32,
        y: u32,
    ) -> Result<Vec<u8>, FloodApiError> {
        let path = storm_surge_tile_path(category, z, x, y);
        Ok(self.do_request("GET", &path, None, None)?.body)
    }

    /// `GET /dynamic.html`: embeddable interactive map page.
    pub fn fetch_dynamic_map_html(&self, opts: &DynamicMapOptions) -> Result<String, FloodApiError> {
        let raw = self.do_request("GET", "/dynamic.html", Some(&opts.to_query()), None)?;
        Ok(raw.text())
    }

    /// `GET /staticmap`: rendered map image bytes.
    pub fn fetch_static_map_image(&self, opts: &StaticMapOptions) -> Result<Vec<u8>, FloodApiError> {
        Ok(self.do_request("GET", "/staticmap", Some(&opts.to_query()), None)?.body)
    }
}

fn flood_vector_tile_path(z: u32, x: u32, y: u32) -> String {
    format!("/tiles/flood-vector/{}/{}/{}.mvt", z, x, y)
}

fn storm_surge_tile_path(category: &str, z: u32, x: u32, y: u32) -> String {
    format!(
        "/tiles/stormsurge/{}/{}/{}/{}.png",
        urlencoding::encode(category),
        z,
        x,
        y
    )
}
