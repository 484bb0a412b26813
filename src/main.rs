use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use loan_ledger::config::{AppConfig, Config, LogFormat};
use loan_ledger::core::UuidGenerator;
use loan_ledger::middleware::RequestId;
use loan_ledger::{modules, AppState};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config.app);

    tracing::info!("Starting Loan Ledger service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let state = AppState::open(&config.database, Arc::new(UuidGenerator))
        .await
        .context("Failed to open loan database")?;

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(server_state.pool.clone()))
            .app_data(web::Data::new(server_state.loans.clone()))
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    let result = server.await;
    state.close().await;

    result.context("HTTP server terminated with an error")
}

fn init_tracing(app: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("loan_ledger={},actix_web=info", app.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);

    match app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
