//! Entry point shared by the `gbif-images` and `svampeatlas-images` binaries

use crate::backend::TaxonBackend;
use crate::config::HarvestConfig;
use crate::error::Result;
use crate::fetch::HttpImageFetcher;
use crate::harvest::Harvester;
use std::process::ExitCode;
use tracing::info;

/// Harvest every configured species from `backend`.
///
/// Exits with status 1 when any species could not be resolved.
pub async fn run(config: HarvestConfig, backend: &dyn TaxonBackend) -> Result<ExitCode> {
    info!("Backend: {}", backend.name());
    info!("Output root: {:?}", config.output_root);
    match config.max_images {
        Some(n) => info!("Images per species: {}", n),
        None => info!("Images per species: all available"),
    }

    let fetcher = HttpImageFetcher::new(config.request_timeout)?;
    let report = Harvester::new(&config, backend, &fetcher).run().await?;
    report.log_summary();

    Ok(if report.all_resolved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
