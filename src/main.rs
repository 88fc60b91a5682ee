//! nfd - National Flood Data API command line client
//!
//! Usage:
//!   nfd data --address "430 Australian Ave, Palm Beach, FL" --elevation
//!   nfd data --search-type coord --lat 26.7056 --lng -80.0364
//!   nfd flood-map --lat 26.7056 --lng -80.0364 --size 0.04 --geojson
//!   nfd batch requests.json
//!   nfd vector-tile 14 4823 6160 --output tile.mvt
//!   nfd storm-surge-tile 3 10 283 428 --output surge.png
//!   nfd dynamic-map --key KEY --lat 26.7056 --lng -80.0364 --zoom 15
//!   nfd static-map --lat 26.7056 --lng -80.0364 --height 400 --width 600 --output map.png
//!
//! Environment:
//!   NFD_API_KEY       - API key (required unless set in --config)
//!   NFD_BASE_URL      - override the API base URL
//!   NFD_TIMEOUT_SECS  - whole-request timeout
//!   RUST_LOG          - log filter, default "info"

use clap::{Args, Parser, Subcommand};
use nfd_client::{
    BatchDataRequest, BatchRequest, DynamicMapOptions, FloodApiClient, FloodDataOptions,
    FloodMapRawOptions, SearchType, StaticMapOptions, load_config,
};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nfd", version, about = "National Flood Data API client")]
struct Cli {
    /// TOML configuration file (api_key, base_url, timeout_secs).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write the response here instead of stdout.
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Flood data for an address, coordinate or polygon (GET /data).
    Data(DataArgs),
    /// Raw flood zone polygons around a point (GET /floodmapraw).
    FloodMap(FloodMapArgs),
    /// Submit a batch of lookups from a JSON file (POST /databatch).
    Batch {
        /// JSON array of batch requests.
        file: PathBuf,
    },
    /// Flood vector tile (GET /tiles/flood-vector/{z}/{x}/{y}.mvt).
    VectorTile { z: u32, x: u32, y: u32 },
    /// Storm surge raster tile (GET /tiles/stormsurge/{category}/{z}/{x}/{y}.png).
    StormSurgeTile {
        category: String,
        z: u32,
        x: u32,
        y: u32,
    },
    /// Embeddable interactive map page (GET /dynamic.html).
    DynamicMap(DynamicMapArgs),
    /// Rendered map image (GET /staticmap).
    StaticMap(StaticMapArgs),
}

#[derive(Args)]
struct DataArgs {
    #[arg(long, default_value = "addresscoord")]
    search_type: SearchType,
    #[arg(long)]
    address: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    lng: Option<f64>,
    #[arg(long)]
    polygon: Option<String>,
    #[arg(long)]
    loma: bool,
    #[arg(long)]
    elevation: bool,
    #[arg(long)]
    property: bool,
    #[arg(long)]
    parcel: bool,
}

#[derive(Args)]
struct FloodMapArgs {
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,
    /// Extent in degrees (0.04, 0.06 or 0.08).
    #[arg(long)]
    size: Option<f64>,
    #[arg(long)]
    geojson: bool,
    #[arg(long)]
    exclude_x: bool,
    #[arg(long)]
    elevation: bool,
}

#[derive(Args)]
struct DynamicMapArgs {
    #[arg(long)]
    key: String,
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,
    #[arg(long, default_value_t = 15)]
    zoom: u32,
    #[arg(long)]
    show_legend: bool,
}

#[derive(Args)]
struct StaticMapArgs {
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,
    #[arg(long, default_value_t = 400)]
    height: u32,
    #[arg(long, default_value_t = 600)]
    width: u32,
    #[arg(long)]
    show_marker: bool,
    #[arg(long)]
    show_legend: bool,
    #[arg(long, default_value_t = 15)]
    zoom: u32,
}

impl From<DataArgs> for FloodDataOptions {
    fn from(args: DataArgs) -> Self {
        FloodDataOptions {
            search_type: args.search_type,
            address: args.address,
            lat: args.lat,
            lng: args.lng,
            polygon: args.polygon,
            loma: args.loma,
            elevation: args.elevation,
            property: args.property,
            parcel: args.parcel,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(cli.config.as_deref())?;
    let client = FloodApiClient::from_config(&config)?;
    info!(base_url = client.base_url(), "using National Flood Data API");

    let output = cli.output.as_deref();
    match cli.command {
        Command::Data(args) => {
            let data = client.fetch_flood_data(&args.into())?;
            if !data.result.denied_access.is_empty() {
                info!(count = data.result.denied_access.len(), "some fields were not available to this API key");
            }
            write_json(output, &data)
        }
        Command::FloodMap(args) => {
            let opts = FloodMapRawOptions {
                lat: args.lat,
                lng: args.lng,
                size: args.size,
                geojson: args.geojson,
                exclude_x: args.exclude_x,
                elevation: args.elevation,
            };
            write_json(output, &client.fetch_flood_map_raw(&opts)?)
        }
        Command::Batch { file } => {
            let contents = fs::read_to_string(&file)?;
            let requests: Vec<BatchRequest> = serde_json::from_str(&contents)?;
            info!(count = requests.len(), "submitting batch");
            let batch = client.submit_flood_data_batch(BatchDataRequest {
                api_key: String::new(),
                requests,
            })?;
            info!(batch_id = %batch.batch_id, "batch accepted");
            write_json(output, &batch)
        }
        Command::VectorTile { z, x, y } => write_bytes(output, &client.fetch_flood_vector_tile(z, x, y)?),
        Command::StormSurgeTile { category, z, x, y } => {
            write_bytes(output, &client.fetch_storm_surge_tile(&category, z, x, y)?)
        }
        Command::DynamicMap(args) => {
            let opts = DynamicMapOptions {
                key: args.key,
                lat: args.lat,
                lng: args.lng,
                zoom: args.zoom,
                show_legend: args.show_legend,
            };
            write_bytes(output, client.fetch_dynamic_map_html(&opts)?.as_bytes())
        }
        Command::StaticMap(args) => {
            let opts = StaticMapOptions {
                lat: args.lat,
                lng: args.lng,
                height: args.height,
                width: args.width,
                show_marker: args.show_marker,
                show_legend: args.show_legend,
                zoom: args.zoom,
            };
            write_bytes(output, &client.fetch_static_map_image(&opts)?)
        }
    }
}

fn write_json<T: Serialize>(output: Option<&Path>, value: &T) -> Result<(), Box<dyn Error>> {
    let mut rendered = serde_json::to_vec_pretty(value)?;
    rendered.push(b'\n');
    write_bytes(output, &rendered)
}

fn write_bytes(output: Option<&Path>, bytes: &[u8]) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            fs::write(path, bytes)?;
            info!(path = %path.display(), bytes = bytes.len(), "response written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
