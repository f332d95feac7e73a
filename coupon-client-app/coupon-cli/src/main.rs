mod cli;
mod commands;
mod output;

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, error};

use coupon_client::{ApiClient, LoginRedirect, SessionManager};
use coupon_core::SessionStore;
use coupon_infrastructure::FileStore;
use coupon_shared::config::AppConfig;
use coupon_shared::constants::LOGIN_PATH;

use cli::Cli;
use output::Output;

/// Tells the user to sign in again; the session file is already cleared.
struct CliRedirect;

impl LoginRedirect for CliRedirect {
    fn redirect_to_login(&self) {
        eprintln!("Session expired ({}). Run `coupon login` to sign in again.", LOGIN_PATH);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(path) = &cli.session_file {
        config.storage.path = path.display().to_string();
    }

    coupon_shared::telemetry::init_telemetry(&config.log)?;
    debug!("Using API at {} and session file {}", config.api.base_url, config.storage.path);

    let file_store = FileStore::open(&config.storage.path)
        .with_context(|| format!("failed to open session file {}", config.storage.path))?;
    let store = SessionStore::new(Arc::new(file_store));

    let base = ApiClient::new(&config.api, store.clone())?;
    let manager = SessionManager::new(base.clone(), store);
    let client = base.with_redirect(manager.expiry_hook(Arc::new(CliRedirect)));

    let result = commands::run(cli.command, &manager, &client, Output::new(cli.json)).await;
    if let Err(e) = &result {
        error!("Command failed: {:#}", e);
    }
    result
}
