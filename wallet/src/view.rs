//! Text rendering of the wallet session

use horizon_balance::{BalanceState, WalletSession, NATIVE_SYMBOL};

/// Hint shown while no account is connected
pub const CONNECT_HINT: &str = "No wallet connected. Pass an account address (G...) to connect.";

/// Shown under a zero balance: unfunded, emptied, or no native entry
pub const EMPTY_HINT: &str = "This account holds no XLM.";

pub fn render(session: &WalletSession) -> String {
    let Some(address) = session.address() else {
        return CONNECT_HINT.to_string();
    };

    format!(
        "Connected as:\n  {address}\n\n{}",
        render_balance(session.balance())
    )
}

pub fn render_balance(state: &BalanceState) -> String {
    match state {
        BalanceState::Idle => "Balance not requested yet".to_string(),
        BalanceState::Loading => "Loading balance...".to_string(),
        BalanceState::Failed(message) => format!("Balance unavailable: {message}"),
        BalanceState::Loaded(amount) => {
            let mut out = format!(
                "Your Stellar balance\n  {} {NATIVE_SYMBOL}\n  Available balance: {amount} {NATIVE_SYMBOL}",
                amount.to_fixed(2),
            );
            if amount.is_zero() {
                out.push_str("\n  ");
                out.push_str(EMPTY_HINT);
            }
            out
        }
    }
}
