use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use show_category::{
    api::{create_router, AppState},
    config::Config,
    services::RemotePredictor,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let predictor = RemotePredictor::new(
        config.prediction_api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;

    tracing::info!(
        api_url = %predictor.api_url(),
        timeout_secs = config.request_timeout_secs,
        "Prediction client configured"
    );

    let state = AppState::new(Arc::new(predictor));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
