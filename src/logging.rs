use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Structured logging to stderr. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("could not initialize logging: {}", e))?;

    Ok(())
}
