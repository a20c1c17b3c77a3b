use std::net::TcpListener;

use actix_web::{App, HttpServer, dev::Server, web};
use anyhow::Context;
use diwan_config::shared::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use tracing_actix_web::TracingLogger;

use crate::{
    config::ApiConfig,
    db_guard::DatabaseGuard,
    routes::{
        categories::read_all_categories,
        health_check::health_check,
        poems::{read_all_poems, read_poem},
    },
};

/// Diwan API application server wrapper.
///
/// Manages the HTTP server lifecycle including startup, migration, and
/// shutdown.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Builds and configures the API application server.
    pub async fn build(config: ApiConfig) -> anyhow::Result<Self> {
        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(config, listener).await?;

        Ok(Self { port, server })
    }

    /// Runs database migrations using the provided configuration.
    ///
    /// Applies all pending SQLx migrations from the migrations directory.
    pub async fn migrate_database(database: &DatabaseConfig) -> anyhow::Result<()> {
        let connect_options = database
            .connect_options()
            .context("building connect options for migrations")?;
        let connection_pool = PgPoolOptions::new().connect_lazy_with(connect_options);

        sqlx::migrate!("./migrations").run(&connection_pool).await?;

        Ok(())
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Runs the server until it receives a shutdown signal.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Creates and configures the HTTP server with all routes and middleware.
///
/// The health check lives outside the `v1` scope so orchestration probes
/// never touch the database guard. Every `v1` route runs with a
/// request-scoped database lease provided by [`DatabaseGuard`].
pub async fn run(config: ApiConfig, listener: TcpListener) -> anyhow::Result<Server> {
    let database = config.database.clone();
    let config = web::Data::new(config);

    let server = HttpServer::new(move || {
        let tracing_logger = TracingLogger::default();
        let database_guard = DatabaseGuard::new(database.clone());

        App::new()
            .wrap(tracing_logger)
            .wrap(
                sentry::integrations::actix::Sentry::builder()
                    .capture_server_errors(true)
                    .start_transaction(true)
                    .finish(),
            )
            .service(health_check)
            .service(
                web::scope("v1")
                    .wrap(database_guard)
                    .service(read_all_poems)
                    .service(read_poem)
                    .service(read_all_categories),
            )
            .app_data(config.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
