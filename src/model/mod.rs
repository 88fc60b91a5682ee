/// Shared data types: request options, response records and errors.

pub mod de;
pub mod elevation;
pub mod error;
pub mod flood;
pub mod floodmap;
pub mod hazard;
pub mod options;
pub mod zones;

pub use elevation::{BaseFloodElevation, Coastline, Elevation, Property, StormSurge, Waterbody};
pub use error::{ApiError, ApiErrorKind, FloodApiError, ResponseMeta};
pub use flood::{Coords, FloodDataBatch, FloodDataResponse, FloodResult, Geocode, ParcelAddress, RequestEcho};
pub use floodmap::{BfeListItem, FloodMapContent, FloodMapContentResult, FloodRegion};
pub use hazard::{Cbsa, CensusBureau, Community, FloodFieldHazard, FloodFirmPan, FloodPolAr, Loma, MetDiv};
pub use options::{
    BatchDataRequest, BatchRequest, DynamicMapOptions, FloodDataOptions, FloodMapRawOptions,
    QueryParams, SearchType, StaticMapOptions,
};
pub use zones::{flood_zone_explanation, flood_zone_explanations};
