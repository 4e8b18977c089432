use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gadkot_core::{
    load_config, validate_config, EmbeddedSource, FortCatalog, FortDataSource, GeminiClient,
    JsonFileSource, LlmRanker, MemoryCatalog, RelevanceProvider, RelevanceService,
};

use gadkot_server::api::create_router;
use gadkot_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("GADKOT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;
    info!("Configuration loaded successfully");

    // Load the fort catalog. The data source is read exactly once; the
    // catalog owns the records for the rest of the process lifetime.
    let forts = match &config.catalog.data_path {
        Some(path) => {
            info!("Loading fort dataset from {:?}", path);
            JsonFileSource::new(path)
                .load_all()
                .context("Failed to load fort dataset")?
        }
        None => {
            info!("Using embedded fort dataset");
            EmbeddedSource::new()
                .load_all()
                .context("Failed to load embedded fort dataset")?
        }
    };
    let catalog: Arc<dyn FortCatalog> = Arc::new(MemoryCatalog::new(forts));
    info!("Fort catalog initialized with {} forts", catalog.len());

    // Create relevance service if configured
    let relevance: Option<Arc<dyn RelevanceService>> = match &config.relevance {
        Some(relevance_config) => match relevance_config.provider {
            RelevanceProvider::Gemini => {
                info!(
                    "Initializing Gemini relevance service (model: {})",
                    relevance_config.model
                );
                let mut client =
                    GeminiClient::new(&relevance_config.api_key, &relevance_config.model)
                        .with_timeout(Duration::from_secs(relevance_config.timeout_secs.into()));
                if let Some(api_base) = &relevance_config.api_base {
                    client = client.with_api_base(api_base);
                }
                Some(Arc::new(LlmRanker::new(Arc::new(client))))
            }
        },
        None => {
            info!("No relevance service configured, search uses local filtering only");
            None
        }
    };

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), catalog, relevance));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
