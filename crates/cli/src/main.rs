use clap::Parser;
use cname_sync_application::use_cases::SyncState;
use cname_sync_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "cname-sync")]
#[command(version)]
#[command(about = "Keeps Pi-hole CNAME records in sync with Nginx Proxy Manager hosts")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Polling interval in seconds
    #[arg(short = 'i', long)]
    interval: Option<u64>,

    /// Log intended changes without touching the Pi-hole
    #[arg(long)]
    testing: bool,

    /// Run a single check and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        interval_secs: cli.interval,
        testing_mode: cli.testing,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting CNAME Sync v{}", env!("CARGO_PKG_VERSION"));

    bootstrap::validate_config(&config)?;

    if config.sync.testing_mode {
        warn!("*** TESTING MODE ENABLED - No changes will be applied ***");
    }
    info!(
        pihole = %config.pihole.destination(),
        target = %config.sync.target_host,
        proxy_config_dir = %config.sync.proxy_config_dir,
        "Configuration loaded"
    );

    bootstrap::run_preflight(&config).await?;

    let shutdown = CancellationToken::new();
    let services = di::Services::new(&config)?;
    let job = services.sync_job(&config, shutdown.clone());

    if cli.once {
        let mut state = SyncState::new();
        if job.run_cycle(&mut state).await.is_none() {
            anyhow::bail!("CNAME sync cycle failed");
        }
        return Ok(());
    }

    info!(interval_secs = config.sync.interval_secs, "Check interval configured");

    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutting down...");
        shutdown.cancel();
    });

    job.run().await;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
