/// National Flood Data API client.
///
/// - `client`     - request/response gateway and error classification
/// - `sanitize`   - repairs whitespace and "Access Denied" markers in payloads
/// - `flood_data` - `/data` and `/databatch`
/// - `maps`       - `/floodmapraw`, tiles, dynamic and static maps

pub mod client;
pub mod flood_data;
pub mod maps;
pub mod sanitize;

#[cfg(test)]
pub(crate) mod fixtures;

pub use client::{API_KEY_HEADER, DEFAULT_BASE_URL, FloodApiClient, RawResponse};
pub use flood_data::decode_flood_data;
pub use sanitize::{ACCESS_DENIED, sanitize, sanitize_body, sanitize_with_report};
