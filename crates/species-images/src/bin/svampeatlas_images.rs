//! Download Svampeatlas checklist images for the configured mushroom species

use species_images::{app, logging, HarvestConfig, Result, SvampeatlasBackend};
use std::process::ExitCode;
use svampeatlas_api::SvampeatlasClient;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    logging::init()?;

    info!("Starting Svampeatlas image harvester...");

    let config = HarvestConfig::svampeatlas();
    let backend = SvampeatlasBackend::new(SvampeatlasClient::with_timeout(config.request_timeout));

    app::run(config, &backend).await
}
