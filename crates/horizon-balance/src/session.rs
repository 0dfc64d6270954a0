//! Wallet session state
//!
//! Holds the connected address and the last balance outcome. Refreshes are
//! split into [`WalletSession::begin_refresh`] and
//! [`WalletSession::complete_refresh`] so the fetch can run anywhere; a
//! generation counter drops results that were overtaken by a newer refresh,
//! a reconnect or a disconnect.

use crate::amount::Amount;
use crate::fetcher::{BalanceFetcher, BalanceResult};

/// What the balance panel should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BalanceState {
    /// Connected, nothing requested yet
    #[default]
    Idle,
    Loading,
    Failed(String),
    Loaded(Amount),
}

impl From<BalanceResult> for BalanceState {
    fn from(result: BalanceResult) -> Self {
        match result {
            BalanceResult::Amount { balance } => BalanceState::Loaded(balance),
            BalanceResult::Failed { message } => BalanceState::Failed(message),
        }
    }
}

/// Proof that a refresh was started; hand it back with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    address: String,
    generation: u64,
}

impl RefreshTicket {
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct WalletSession {
    address: Option<String>,
    balance: BalanceState,
    generation: u64,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `address`. Blank addresses are refused and leave the session
    /// untouched.
    pub fn connect(&mut self, address: impl Into<String>) -> bool {
        let address = address.into();
        let address = address.trim();
        if address.is_empty() {
            tracing::debug!("Refusing to connect an empty address");
            return false;
        }

        tracing::info!(%address, "Wallet connected");
        self.address = Some(address.to_string());
        self.balance = BalanceState::Idle;
        self.generation += 1;
        true
    }

    pub fn disconnect(&mut self) {
        if let Some(address) = self.address.take() {
            tracing::info!(%address, "Wallet disconnected");
        }
        self.balance = BalanceState::Idle;
        self.generation += 1;
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn balance(&self) -> &BalanceState {
        &self.balance
    }

    /// Mark the balance as loading. `None` when disconnected.
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        let address = self.address.clone()?;
        self.generation += 1;
        self.balance = BalanceState::Loading;
        Some(RefreshTicket {
            address,
            generation: self.generation,
        })
    }

    /// Apply `result` if `ticket` is still the latest refresh for the
    /// connected address. Returns whether it was applied.
    pub fn complete_refresh(&mut self, ticket: RefreshTicket, result: BalanceResult) -> bool {
        let current = ticket.generation == self.generation
            && self.address.as_deref() == Some(ticket.address.as_str());
        if !current {
            tracing::debug!(
                address = %ticket.address,
                generation = ticket.generation,
                "Dropping stale balance result"
            );
            return false;
        }

        self.balance = result.into();
        true
    }

    /// Fetch and apply the balance of the connected address.
    pub async fn refresh(&mut self, fetcher: &BalanceFetcher) -> &BalanceState {
        if let Some(ticket) = self.begin_refresh() {
            let result = fetcher.fetch_native_balance(Some(ticket.address())).await;
            self.complete_refresh(ticket, result);
        }
        &self.balance
    }
}
