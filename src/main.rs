use anyhow::Result;
use clap::Parser;

use geoip_server::cli::Cli;
use geoip_server::config::{StaticConfig, get_config, init_config};
use geoip_server::runtime::modes::run_server;
use geoip_server::system::init_logging;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.generate_config {
        println!("{}", StaticConfig::generate_sample_config());
        return Ok(());
    }

    let mut config = StaticConfig::load(&cli.config).inspect_err(|e| {
        eprintln!("{}", e.format_colored());
    })?;
    if let Some(db_path) = cli.db_path {
        config.geoip.database_path = db_path;
    }
    init_config(config);

    let config = get_config();
    let _log_guard = init_logging(&config.logging);

    run_server(&config).await
}
