//! Command-line and environment configuration

use clap::Parser;
use horizon_balance::Network;
use std::time::Duration;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "xlm-wallet", version)]
#[command(about = "Connect a Stellar account and show its XLM balance")]
pub struct Args {
    /// Public address (G...) of the account to connect
    #[arg(env = "STELLAR_ADDRESS")]
    pub address: Option<String>,

    /// Network whose public Horizon instance is queried
    #[arg(short, long, default_value = "testnet", env = "STELLAR_NETWORK")]
    pub network: Network,

    /// Horizon base URL, overrides --network
    #[arg(long, env = "HORIZON_URL")]
    pub horizon_url: Option<String>,

    /// Report lookup failures as a zero balance
    #[arg(long)]
    pub silent: bool,

    /// Re-query every SECS seconds until interrupted
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub watch: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    /// Account to connect on startup
    pub address: Option<String>,

    /// Horizon endpoint
    pub horizon_url: String,

    /// Collapse failures into zero instead of showing an error
    pub silent: bool,

    /// Refresh interval, `None` for a single lookup
    pub watch: Option<Duration>,
}

impl From<Args> for WalletConfig {
    fn from(args: Args) -> Self {
        Self {
            address: args.address.filter(|a| !a.trim().is_empty()),
            horizon_url: args
                .horizon_url
                .unwrap_or_else(|| args.network.horizon_url().to_string()),
            silent: args.silent,
            watch: args.watch.map(Duration::from_secs),
        }
    }
}
