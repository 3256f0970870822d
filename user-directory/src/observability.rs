//! Tracing initialization

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Install the global fmt subscriber filtered by `service.log_level`
///
/// `RUST_LOG` takes precedence when set.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.service.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Internal(format!("Failed to initialize tracing: {}", e)))?;

    tracing::info!("Tracing initialized for service: {}", config.service.name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_is_an_error() {
        let config = Config::default();
        // Another test may already own the global subscriber
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
