//! HTTP client for a Horizon-compatible account endpoint

use crate::error::{Error, Result};
use crate::types::AccountRecord;
use reqwest::Url;
use std::fmt;
use std::str::FromStr;

/// Public Horizon deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    /// SDF testnet (friendbot-funded accounts)
    #[default]
    Testnet,
    /// Stellar public network
    Public,
}

impl Network {
    pub fn horizon_url(&self) -> &'static str {
        match self {
            Network::Testnet => "https://horizon-testnet.stellar.org",
            Network::Public => "https://horizon.stellar.org",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Testnet => f.write_str("testnet"),
            Network::Public => f.write_str("public"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" | "test" => Ok(Network::Testnet),
            "public" | "mainnet" | "pubnet" => Ok(Network::Public),
            other => Err(format!("unknown network: {other} (expected testnet or public)")),
        }
    }
}

/// Client for `{base_url}/accounts/{address}`
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HorizonClient {
    base_url: String,
    client: reqwest::Client,
}

impl HorizonClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    pub fn for_network(network: Network) -> Self {
        Self::new(network.horizon_url())
    }

    /// Use a preconfigured `reqwest::Client` (proxies, timeouts, headers).
    pub fn with_http_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the account URL. The address is pushed as a single path
    /// segment, so it is percent-encoded rather than interpreted.
    pub fn account_url(&self, address: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push("accounts")
            .push(address);

        Ok(url)
    }

    /// Fetch and decode the account record. Single attempt, no retries.
    pub async fn account(&self, address: &str) -> Result<AccountRecord> {
        let url = self.account_url(address)?;
        tracing::debug!(%url, "Fetching account record");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }

        let body = response.bytes().await?;

        let record: AccountRecord = serde_json::from_slice(&body)?;
        tracing::debug!(balances = record.balances.len(), "Decoded account record");
        Ok(record)
    }
}

impl Default for HorizonClient {
    fn default() -> Self {
        Self::for_network(Network::default())
    }
}
