//! Serve command implementation.
//!
//! Opens the component store and runs the HTTP API on a tokio runtime until
//! Ctrl-C is received.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use anyhow::Context;
use clap::Args;
use inventory::config::ServerConfig;
use inventory::{api, ComponentStore, Config};
use tokio::net::TcpListener;

/// Serve the component inventory over HTTP.
#[derive(Args)]
pub struct ServeCommand {
    /// Address to bind (overrides config and INVENTORY_HOST)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind (overrides config and INVENTORY_PORT)
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,
}

impl ServeCommand {
    /// Execute the serve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let overrides = Config {
            server: Some(ServerConfig {
                host: self.host,
                port: self.port,
            }),
            ..Default::default()
        };
        let config = load_configuration(global, Some(overrides))?;
        let store = open_store(global, &config)?;
        let addr = format!("{}:{}", config.host(), config.port());

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(run(&addr, store))?;
        Ok(())
    }
}

async fn run(addr: &str, store: ComponentStore) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    api::serve(listener, store, shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}
