//! # horizon-balance
//!
//! Native-asset (XLM) balance lookups against a Stellar Horizon endpoint.
//!
//! ```text
//! address ──► BalanceFetcher ──► HorizonClient ── GET /accounts/{address} ──► Horizon
//!                  │                                                        │
//!                  ◄──────────── AccountRecord { balances: [...] } ◄────────┘
//!                  │
//!                  └──► BalanceResult::{Amount, Failed}  ──► WalletSession ──► renderer
//! ```
//!
//! Lookups are read-only, uncached and independent of each other.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod amount;
pub mod client;
pub mod error;
pub mod fetcher;
pub mod session;
pub mod types;

pub use amount::{Amount, ParseAmountError};
pub use client::{HorizonClient, Network};
pub use error::{Error, Result};
pub use fetcher::{native_balance, BalanceFetcher, BalanceResult};
pub use session::{BalanceState, RefreshTicket, WalletSession};
pub use types::{AccountRecord, BalanceEntry, NATIVE_ASSET_TYPE};

/// Ticker of the native asset.
pub const NATIVE_SYMBOL: &str = "XLM";
