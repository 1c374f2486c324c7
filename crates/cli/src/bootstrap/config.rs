use cname_sync_domain::{CliOverrides, Config};
use tracing::error;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Ok(Config::load(path, overrides)?)
}

/// Logged as well as returned so the reason lands in the service log.
pub fn validate_config(config: &Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }
    Ok(())
}
