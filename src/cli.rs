//! Command-line interface definitions using clap

use clap::Parser;

/// geoip-server - IP geolocation over HTTP with hot database reload
#[derive(Parser, Debug)]
#[command(name = "geoip-server")]
#[command(version)]
#[command(about = "IP geolocation HTTP service backed by a local MaxMind database", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, short = 'c', default_value = "config.toml")]
    pub config: String,

    /// Override the GeoIP database path from the configuration
    #[arg(long = "db-path", value_name = "PATH")]
    pub db_path: Option<String>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub generate_config: bool,
}
