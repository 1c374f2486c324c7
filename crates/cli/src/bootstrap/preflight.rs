use cname_sync_domain::Config;
use cname_sync_infrastructure::system::{ensure_key_pair, require_tool, trust_host, KeyStatus};
use tracing::{error, info};

/// One-shot startup checks. Any error here is fatal for the process.
pub async fn run_preflight(config: &Config) -> anyhow::Result<()> {
    let pihole = &config.pihole;

    if let Err(e) = require_tool(&pihole.json_tool).await {
        error!(tool = %pihole.json_tool, error = %e, "Required tool missing");
        return Err(e.into());
    }

    match ensure_key_pair(&pihole.ssh_key_path).await? {
        KeyStatus::Present => {}
        KeyStatus::Generated => {
            info!("SSH key generated. Please copy it to your Pi-hole host:");
            info!("ssh-copy-id -i {} {}", pihole.ssh_key_path, pihole.destination());
            info!("Then restart this service.");
            anyhow::bail!("SSH key was just generated and is not yet authorized on {}", pihole.host);
        }
    }

    trust_host(&pihole.host, &pihole.known_hosts_path).await;
    Ok(())
}
