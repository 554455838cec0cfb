use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// VolunteerHub - Find volunteer events on the map and near you
#[derive(Parser, Debug)]
#[command(name = "volunteerhub")]
#[command(about = "Find volunteer events on the map and near you", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Event catalog file (JSON array or GeoJSON FeatureCollection).
    /// Uses the built-in sample events when omitted
    #[arg(long, global = true, value_name = "FILE")]
    pub events: Option<PathBuf>,

    /// Config file (defaults to ./volunteerhub.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long, global = true, conflicts_with = "geojson")]
    pub json: bool,

    /// Output event lists as a GeoJSON FeatureCollection
    #[arg(long, global = true)]
    pub geojson: bool,

    /// Validation mode for the catalog and query parameters
    #[arg(long, global = true, value_enum)]
    pub validity: Option<ValidityArg>,

    /// Comma-separated ids of events the user has joined
    #[arg(long, global = true, value_delimiter = ',', value_name = "IDS")]
    pub joined: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Validation mode selection
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ValidityArg {
    /// Reject invalid coordinates, duplicate ids, negative spans and radii
    Strict,
    /// Accept input as-is and log anomalies
    Lenient,
}

/// Map platform selection
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PlatformArg {
    Ios,
    Android,
    Web,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every event in the catalog
    Events,

    /// Search events by name
    Search(SearchArgs),

    /// Show the events inside a map viewport
    Visible(VisibleArgs),

    /// Find events near the device or the first event
    Nearby(NearbyArgs),

    /// List the joined events
    Joined,

    /// Print map links for an event
    Links(LinksArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for in event names (case-insensitive)
    pub query: String,
}

#[derive(Parser, Debug)]
pub struct VisibleArgs {
    /// Viewport center latitude (defaults to the first event)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Viewport center longitude (defaults to the first event)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Span in degrees for both axes (overrides the configured initial span)
    #[arg(long)]
    pub span: Option<f64>,

    /// Latitude span in degrees (defaults to --span)
    #[arg(long, allow_hyphen_values = true)]
    pub lat_span: Option<f64>,

    /// Longitude span in degrees (defaults to --span)
    #[arg(long, allow_hyphen_values = true)]
    pub lon_span: Option<f64>,

    /// Narrow the events by name before applying the viewport
    #[arg(long, short = 'q')]
    pub query: Option<String>,
}

#[derive(Parser, Debug)]
pub struct NearbyArgs {
    /// Device latitude (falls back to the first event when omitted)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Device longitude (falls back to the first event when omitted)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Search radius in kilometers
    #[arg(long, allow_hyphen_values = true)]
    pub radius_km: Option<f64>,

    /// Location lookup timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Sort results nearest-first instead of catalog order
    #[arg(long)]
    pub ranked: bool,
}

#[derive(Parser, Debug)]
pub struct LinksArgs {
    /// Event id
    pub id: String,

    /// Platform to build links for
    #[arg(long, value_enum, default_value = "web")]
    pub platform: PlatformArg,
}
