//! XLM wallet
//!
//! Connects a Stellar account by its public address, then shows the address
//! and the account's native (XLM) balance as reported by Horizon.
//!
//! ## Modes
//! - single lookup (default)
//! - `--watch <SECS>`: refresh periodically until Ctrl-C
//! - `--silent`: failed lookups show a zero balance instead of an error

use anyhow::Result;
use clap::Parser;
use horizon_balance::{BalanceFetcher, HorizonClient, WalletSession};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod view;

use config::{Args, WalletConfig};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,horizon_balance=info,xlm_wallet=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = WalletConfig::from(Args::parse());
    tracing::debug!(?config, "Starting wallet");

    let fetcher = BalanceFetcher::new(HorizonClient::new(config.horizon_url.clone()));
    let mut session = WalletSession::new();

    if let Some(address) = &config.address {
        session.connect(address.as_str());
    }
    if !session.is_connected() {
        println!("{}", view::render(&session));
        return Ok(ExitCode::SUCCESS);
    }

    tracing::info!("Querying {}", fetcher.client().base_url());

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    if app::run(&mut session, &fetcher, &config, shutdown).await == app::Exit::Interrupted {
        tracing::info!("Interrupted");
    }

    if app::failed(&session) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
