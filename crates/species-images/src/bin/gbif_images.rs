//! Download GBIF occurrence images for the configured mushroom species

use gbif_api::GbifClient;
use species_images::{app, logging, GbifBackend, HarvestConfig, Result};
use std::process::ExitCode;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    logging::init()?;

    info!("Starting GBIF image harvester...");

    let config = HarvestConfig::gbif();
    let backend = GbifBackend::new(GbifClient::with_timeout(config.request_timeout));

    app::run(config, &backend).await
}
