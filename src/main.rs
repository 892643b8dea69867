use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use voxguard::application::services::VerificationService;
use voxguard::infrastructure::audio::Base64AudioEncoder;
use voxguard::infrastructure::detection::DetectionClientFactory;
use voxguard::infrastructure::observability::{TracingConfig, init_tracing};
use voxguard::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let tracing_config = TracingConfig {
        environment: environment.to_string(),
        json_format: settings.logging.enable_json || TracingConfig::default().json_format,
    };
    init_tracing(&tracing_config, Some(&settings.logging.level));

    let detection_client = DetectionClientFactory::create(&settings.detection)
        .context("Failed to configure detection provider")?;

    let verification_service = Arc::new(VerificationService::new(
        Arc::new(Base64AudioEncoder),
        detection_client,
    ));

    let state = AppState::new(verification_service, settings.detection.provider);
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(
        %addr,
        provider = settings.detection.provider.as_str(),
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
