use anyhow::{Context, anyhow};
use diwan_api::{config::ApiConfig, startup::Application};
use diwan_config::{load_config, shared::DatabaseConfig};
use diwan_telemetry::tracing::init_tracing;
use std::env;
use tracing::{error, info};

mod sentry;

/// Entry point for the diwan API service.
///
/// Initializes tracing and Sentry, then starts the Actix web server with
/// command-line argument handling for both server mode and database
/// migration.
fn main() -> anyhow::Result<()> {
    let _log_flusher = init_tracing(env!("CARGO_BIN_NAME"))?;

    // Initialize Sentry before the async runtime starts.
    let _sentry_guard = sentry::init()?;

    actix_web::rt::System::new().block_on(async_main())?;

    Ok(())
}

/// Main async function that handles command-line arguments and starts the
/// service.
///
/// Supports two modes: server mode (no arguments) and migration mode
/// ("migrate" argument).
async fn async_main() -> anyhow::Result<()> {
    let mut args = env::args();
    match args.len() {
        // Run the application server
        1 => {
            let config = load_config::<ApiConfig>()
                .context("loading API configuration for server startup")?;
            log_database_config(&config.database);
            let application = Application::build(config).await?;
            application.run_until_stopped().await?;
        }
        // Handle single word commands
        2 => {
            let command = args.nth(1).unwrap();
            match command.as_str() {
                "migrate" => {
                    let config = load_config::<ApiConfig>()
                        .context("loading configuration for migrations")?;
                    log_database_config(&config.database);
                    Application::migrate_database(&config.database).await?;
                    info!("database migrated successfully");
                }
                _ => {
                    error!(%command, "invalid command");
                    return Err(anyhow!("invalid command: {command}"));
                }
            }
        }
        _ => {
            error!("invalid number of command line arguments");
            return Err(anyhow!("invalid number of command line arguments"));
        }
    }

    Ok(())
}

fn log_database_config(config: &DatabaseConfig) {
    info!(
        url_configured = config.url.is_some(),
        tls_enabled = config.tls_enabled,
        "content database options",
    );
}
