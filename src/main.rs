use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use firstrun::cli::Cli;
use firstrun::host::{SettingsStore, SystemBrowser};
use firstrun::ipc::{HostServices, IpcLayer};
use firstrun::logging::init_tracing;
use firstrun::ui::runtime;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("loading configuration")?;

    let log_path = config.log_path();
    init_tracing(config.logging.filter.as_deref(), &log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let store_path = config.store_path();
    let store = SettingsStore::open(store_path.clone())
        .with_context(|| format!("opening settings store {}", store_path.display()))?;
    tracing::info!(store = %store_path.display(), "starting welcome screen");

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let (client, server) = IpcLayer::new();
    tokio_runtime.spawn(server.run(store, Arc::new(SystemBrowser)));
    let host: Arc<dyn HostServices> = Arc::new(client.with_timeout(config.ipc_timeout()));

    runtime::run(&config.welcome.signup_url, host, tokio_runtime.handle())
        .context("running terminal UI")?;

    tracing::info!("welcome screen closed");
    Ok(())
}
