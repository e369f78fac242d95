//! Blood donation service — CLI server
//!
//! ```sh
//! # Run with default config (~/.config/blood-donation/config.toml)
//! bds-service
//!
//! # Custom config path
//! bds-service --config /etc/blood-donation/config.toml
//!
//! # Override the API port
//! bds-service --api-port 8081
//!
//! # Validate config without starting
//! bds-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use blood_donation::config::{default_config_path, AppConfig};
use blood_donation::server::{init_tracing, ServerHandle, ServerOptions};

/// Blood donation admin service: donors, donations and donation drives.
#[derive(Parser, Debug)]
#[command(
    name = "bds-service",
    version,
    about = "REST service for blood donation administration",
    long_about = "Registers donors and admins, records and confirms blood donations, \
                  reports available units per blood type and schedules donation drives.\n\n\
                  Default config: ~/.config/blood-donation/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "BDS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);

    let loaded = AppConfig::load(&config_path);
    if cli.check {
        // Validation mode reports parse errors instead of falling back.
        let mut config = loaded?;
        apply_overrides(&mut config, cli.api_port, cli.log_level.as_deref());
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.api_address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return Ok(());
    }

    let config = match loaded {
        Ok(mut cfg) => {
            apply_overrides(&mut cfg, cli.api_port, cli.log_level.as_deref());
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let mut cfg = AppConfig::default();
            apply_overrides(&mut cfg, cli.api_port, cli.log_level.as_deref());
            init_tracing(&cfg);
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
            cfg
        }
    };
    if let Some(port) = cli.api_port {
        info!("CLI override: api_port = {}", port);
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}

fn apply_overrides(config: &mut AppConfig, api_port: Option<u16>, log_level: Option<&str>) {
    if let Some(port) = api_port {
        config.server.api_port = port;
    }
    if let Some(level) = log_level {
        config.logging.level = level.to_string();
    }
}
