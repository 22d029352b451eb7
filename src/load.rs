use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use tracing::info;

use crate::{client::MappingsClient, config::Config, output};

#[derive(Debug)]
pub struct LoadSummary {
    /// Server reported computation time in milliseconds
    pub response_time: u64,
    pub written: Vec<PathBuf>,
}

#[tokio::main]
pub async fn run(config: &Config) -> Result<LoadSummary> {
    load(config).await
}

/// One request, one response, one file per returned target.
pub async fn load(config: &Config) -> Result<LoadSummary> {
    config.validate().context("invalid configuration")?;

    let timeout = config.timeout_secs.map(Duration::from_secs);
    let client = MappingsClient::new(&config.base_url, timeout)?;
    let loaded = client
        .load_mappings(&config.request())
        .await
        .with_context(|| format!("could not load mappings from {}", client.endpoint()))?;

    let response = loaded.response;
    info!(
        "Received {} mappings in {}ms",
        response.serialized_mappings.len(),
        response.response_time
    );

    output::ensure_dir(&config.out_dir)?;
    let written = output::write_mappings(
        &config.out_dir,
        &config.minecraft_version,
        &response.serialized_mappings,
    )
    .with_context(|| format!("could not write mappings to {:?}", config.out_dir))?;

    info!("Wrote {} files to {}", written.len(), config.out_dir.display());

    Ok(LoadSummary {
        response_time: response.response_time,
        written,
    })
}
