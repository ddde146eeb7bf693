//! Tracing subscriber setup shared by the harvester binaries

use crate::error::Result;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` adds filter directives on top of info-level logging for the
/// library and both binaries.
/// `LOG_FORMAT=json` emits Stackdriver-style JSON instead of plain text.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("species_images=info".parse()?)
        .add_directive("gbif_images=info".parse()?)
        .add_directive("svampeatlas_images=info".parse()?);

    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    Ok(())
}
