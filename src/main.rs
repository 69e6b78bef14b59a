//! docdb-example entry point.
//!
//! Parses Go-style flags, handles `-version`, loads the optional configuration
//! file, initializes tracing, and serves the hit counter until shutdown.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docdb_example::cli::Args;
use docdb_example::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use docdb_example::http::start_server;
use docdb_example::secrets::AwsSecretsManager;
use docdb_example::settings::SettingsSource;
use docdb_example::store::{CounterNamespace, MongoBackend};
use docdb_example::version::{APP_VERSION, DISPLAY_VERSION};
use docdb_example::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse_go_style();

    if args.version {
        println!("{}", DISPLAY_VERSION);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(listen) = args.listen {
        config.http.listen = listen;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    let addr = config.http.socket_addr()?;

    tracing::info!(
        version = APP_VERSION,
        database = %config.database.name,
        collection = %config.database.collection,
        timeout_seconds = config.database.timeout_seconds,
        "Loaded configuration"
    );

    let backend = MongoBackend::new(CounterNamespace::from(&config.database));
    let listen = config.http.listen.clone();
    let state = AppState::new(
        config,
        SettingsSource::Environment,
        Arc::new(AwsSecretsManager),
        Arc::new(backend),
    );

    let app = create_router(state);
    start_server(app, addr, &listen).await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init(),
    }
}
