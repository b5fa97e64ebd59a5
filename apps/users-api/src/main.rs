use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before anything fallible, so startup errors get colored reports
    install_color_eyre();

    let config = Config::from_env();

    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        "Starting users API"
    );

    let router = create_router::<openapi::ApiDoc>(api::routes());

    create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    Ok(())
}
