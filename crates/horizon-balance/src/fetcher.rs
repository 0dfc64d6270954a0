//! Native balance resolution
//!
//! Every path ends in a renderable [`BalanceResult`]: absent input and
//! accounts without a native holding resolve to zero, remote failures to
//! [`BalanceResult::Failed`] with a human-readable message.

use crate::amount::Amount;
use crate::client::{HorizonClient, Network};
use crate::types::AccountRecord;
use serde::Serialize;
use std::fmt;

/// Outcome of a balance lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BalanceResult {
    /// Resolved native balance, never negative
    Amount { balance: Amount },
    /// The lookup could not be completed
    Failed { message: String },
}

impl BalanceResult {
    pub const ZERO: BalanceResult = BalanceResult::Amount {
        balance: Amount::ZERO,
    };

    pub fn amount(balance: Amount) -> Self {
        BalanceResult::Amount { balance }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        BalanceResult::Failed {
            message: message.into(),
        }
    }

    /// Collapse failures into zero.
    pub fn amount_or_zero(&self) -> Amount {
        match self {
            BalanceResult::Amount { balance } => *balance,
            BalanceResult::Failed { .. } => Amount::ZERO,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BalanceResult::Failed { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            BalanceResult::Failed { message } => Some(message),
            BalanceResult::Amount { .. } => None,
        }
    }
}

impl fmt::Display for BalanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceResult::Amount { balance } => write!(f, "{balance}"),
            BalanceResult::Failed { message } => f.write_str(message),
        }
    }
}

/// Native balance held in `record`, clamped at zero.
///
/// A missing native entry, a non-positive balance and an unparsable balance
/// string all resolve to zero.
pub fn native_balance(record: &AccountRecord) -> Amount {
    let Some(entry) = record.native_entry() else {
        tracing::debug!("Account holds no native balance entry");
        return Amount::ZERO;
    };

    match entry.balance.parse::<Amount>() {
        Ok(balance) if balance.is_positive() => balance,
        Ok(_) => Amount::ZERO,
        Err(e) => {
            tracing::warn!(balance = %entry.balance, error = %e, "Unparsable native balance");
            Amount::ZERO
        }
    }
}

/// Resolves native balances through a [`HorizonClient`].
#[derive(Debug, Clone, Default)]
pub struct BalanceFetcher {
    client: HorizonClient,
}

impl BalanceFetcher {
    pub fn new(client: HorizonClient) -> Self {
        Self { client }
    }

    pub fn for_network(network: Network) -> Self {
        Self::new(HorizonClient::for_network(network))
    }

    pub fn client(&self) -> &HorizonClient {
        &self.client
    }

    /// Look up the native balance of `address`.
    ///
    /// An absent or blank address resolves to zero without touching the
    /// network. Otherwise a single GET is issued; transport, status and
    /// decode failures resolve to [`BalanceResult::Failed`].
    pub async fn fetch_native_balance(&self, address: Option<&str>) -> BalanceResult {
        let Some(address) = address.map(str::trim).filter(|a| !a.is_empty()) else {
            return BalanceResult::ZERO;
        };

        match self.client.account(address).await {
            Ok(record) => {
                let balance = native_balance(&record);
                tracing::info!(%address, %balance, "Resolved native balance");
                BalanceResult::amount(balance)
            }
            Err(e) => {
                tracing::warn!(%address, status = ?e.status(), error = %e, "Error fetching balance");
                BalanceResult::failed(format!("Could not fetch the account balance ({e})"))
            }
        }
    }

    /// Like [`fetch_native_balance`](Self::fetch_native_balance), but any
    /// failure is reported as a zero balance.
    pub async fn fetch_native_balance_or_zero(&self, address: Option<&str>) -> Amount {
        self.fetch_native_balance(address).await.amount_or_zero()
    }
}
