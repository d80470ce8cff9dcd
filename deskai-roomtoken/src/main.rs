use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use deskai_roomtoken::config::ServiceConfig;
use deskai_roomtoken::web;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("info")))
        .init();

    let config = ServiceConfig::from_env();

    info!(
        "starting video token service (room: {}, origin: {})",
        config.room_name, config.allowed_origin
    );
    if let Err(e) = config.secrets() {
        // The service still serves /health; token requests will fail with
        // a 500 until the environment is fixed.
        warn!("{e}");
    }

    let _rocket = web::rocket(config).launch().await?;

    Ok(())
}
