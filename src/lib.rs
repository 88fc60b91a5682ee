/// nfd_client: typed client for the National Flood Data API (v3).
///
/// # Module structure
///
/// ```text
/// nfd_client
/// ├── model       - shared data types (FloodDataResponse, options, FloodApiError, …)
/// │   ├── options - query options and batch request bodies
/// │   ├── error   - error enum and HTTP status classification
/// │   └── zones   - FEMA flood zone explanations
/// ├── config      - client configuration (nfd.toml, NFD_* environment)
/// └── api
///     ├── client     - request/response gateway
///     ├── sanitize   - trims strings and clears "Access Denied" markers
///     ├── flood_data - /data and /databatch
///     ├── maps       - /floodmapraw, tiles, dynamic and static maps
///     └── fixtures (test only) - representative API response payloads
/// ```
///
/// ```no_run
/// use nfd_client::{FloodApiClient, FloodDataOptions, SearchType};
///
/// let client = FloodApiClient::new("my-api-key")?;
/// let opts = FloodDataOptions::for_address(SearchType::AddressCoord, "430 Australian Ave, Palm Beach, FL");
/// let data = client.fetch_flood_data(&opts)?;
/// println!("{:?}", data.result.flood_fld_haz_ar);
/// # Ok::<(), nfd_client::FloodApiError>(())
/// ```

pub mod api;
pub mod config;
pub mod model;

pub use api::{FloodApiClient, RawResponse};
pub use config::{ClientConfig, ConfigError, load_config};
pub use model::{
    ApiError, ApiErrorKind, BatchDataRequest, BatchRequest, DynamicMapOptions, FloodApiError,
    FloodDataBatch, FloodDataOptions, FloodDataResponse, FloodMapContent, FloodMapRawOptions,
    SearchType, StaticMapOptions,
};
