use color_eyre::eyre::Result;
use sso_adapters::config::Settings;
use sso_service::SsoService;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;
    tracing::info!(env = %settings.env, "starting SSO service");

    // Build stores, hasher and routes
    let service = SsoService::from_settings(&settings).await?;

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.http.address).await?;
    service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
