use std::sync::Arc;

use tracing::{error, info};

use hobbyhub::web::handlers::AppState;
use hobbyhub::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = hobbyhub::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        hobbyhub::logging::init_console_only(&config.logging.level);
    }

    info!("HobbyHub starting");

    // A missing database is fatal; log the detail, show only an apology.
    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "failed to open database");
            eprintln!(
                "Sorry, there was a problem connecting to the database. Please try again later."
            );
            std::process::exit(1);
        }
    };

    let state = AppState::new(Arc::new(db), config.site.clone());

    let server = match WebServer::new(&config.server, state) {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            eprintln!("Sorry, the server could not be started.");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        error!(error = %e, "web server exited with error");
        std::process::exit(1);
    }
}
