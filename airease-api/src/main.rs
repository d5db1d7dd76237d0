use std::net::SocketAddr;
use std::sync::Arc;

use airease_api::{
    app,
    app_config::{Config, ProviderKind},
    state::{AppState, AuthConfig},
};
use airease_core::{AccessTierGate, FlightProvider, FlightService, MockProvider};
use airease_supplier::AmadeusProvider;
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airease_api=debug,airease_core=info,airease_supplier=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting AirEase API on port {}", config.server.port);

    let provider: Arc<dyn FlightProvider> = match config.provider.kind {
        ProviderKind::Mock => Arc::new(MockProvider::generate(config.provider.seed)),
        ProviderKind::Amadeus => Arc::new(
            AmadeusProvider::new(config.amadeus.clone()).context("Failed to build supplier client")?,
        ),
    };
    tracing::info!("Using {} flight provider", provider.name());

    let app_state = AppState {
        flights: FlightService::new(provider, AccessTierGate::new(config.search.visibility_limit)),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
