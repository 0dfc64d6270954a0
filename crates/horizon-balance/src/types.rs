//! Horizon account record, as returned by `GET /accounts/{address}`

use serde::{Deserialize, Serialize};

/// `asset_type` of the ledger's base currency.
pub const NATIVE_ASSET_TYPE: &str = "native";

/// The slice of an account record this crate cares about.
///
/// Horizon returns many more fields (sequence, thresholds, signers, ...);
/// they are ignored by the decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(default)]
    pub account_id: Option<String>,

    /// Missing `balances` decodes as an account with no holdings
    #[serde(default)]
    pub balances: Vec<BalanceEntry>,
}

/// One holding of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub asset_type: String,

    /// Decimal string with seven fractional digits
    pub balance: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
}

impl BalanceEntry {
    pub fn native(balance: impl Into<String>) -> Self {
        Self {
            asset_type: NATIVE_ASSET_TYPE.to_string(),
            balance: balance.into(),
            asset_code: None,
            asset_issuer: None,
        }
    }

    pub fn is_native(&self) -> bool {
        self.asset_type == NATIVE_ASSET_TYPE
    }
}

impl AccountRecord {
    /// First native entry, if the account holds one.
    pub fn native_entry(&self) -> Option<&BalanceEntry> {
        self.balances.iter().find(|b| b.is_native())
    }
}
