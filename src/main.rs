use std::sync::Arc;

use config::AppConfig;
use eyre::Context as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod routes;
mod views;

#[derive(Clone, Debug)]
struct AppState {
    copyrights: Option<Arc<str>>,
}

impl From<&AppConfig> for AppState {
    fn from(config: &AppConfig) -> Self {
        Self {
            copyrights: config.copyrights.as_deref().map(Arc::from),
        }
    }
}

fn setup_tracing() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to setup tracing: {e}"))
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()?
        .block_on(_main())
}

async fn _main() -> eyre::Result<()> {
    setup_tracing()?;

    let config = AppConfig::from_env().context("Failed to load config")?;
    let app_state = AppState::from(&config);

    if app_state.copyrights.is_some() {
        info!("Using custom copyrights");
    } else {
        info!("Using default copyrights");
    }

    let app = routes::routes(app_state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    info!(port = config.port, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
