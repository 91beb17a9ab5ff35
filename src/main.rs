use std::process::ExitCode;

use tracing::{error, info, warn};

use bucketsort::{Config, WebServer};

/// Config file used when `BUCKETSORT_CONFIG` is not set.
const DEFAULT_CONFIG: &str = "config.toml";

#[tokio::main]
async fn main() -> ExitCode {
    let config_path =
        std::env::var("BUCKETSORT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());

    let config = match Config::load_with_env(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = bucketsort::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        bucketsort::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    info!("bucketsort {}", env!("CARGO_PKG_VERSION"));
    match &config.library.root {
        Some(root) => info!(
            root = %root.display(),
            max_bucket_photos = config.library.max_bucket_photos,
            max_bucket_bytes = config.library.max_bucket_bytes,
            "Library configured"
        ),
        None => warn!("No root folder configured; set BUCKETSORT_ROOT or [library] root"),
    }

    let server = match WebServer::new(&config) {
        Ok(server) => server,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server.run().await {
        error!("Web server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
