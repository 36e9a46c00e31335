use stop_finder::config::{AppConfig, ConfigError};
use stop_finder::geocoder::{GeocodeError, MapboxGeocoder};
use stop_finder::stops::{MbtaStopLocator, StopError};
use stop_finder::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "stop_finder=info,tower_http=info";

/// Errors that prevent the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geocoder(#[from] GeocodeError),

    #[error(transparent)]
    Stops(#[from] StopError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; variables may come from the environment.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Ok(path) = dotenv {
        info!(path = %path.display(), "loaded environment file");
    }

    if let Err(e) = run().await {
        error!(error = %e, "stop finder failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    let geocoder = MapboxGeocoder::new(config.geocoder)?;
    let locator = MbtaStopLocator::new(config.stops)?;
    let app = create_router(AppState::new(geocoder, locator));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Stop finder listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
