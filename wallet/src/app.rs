//! Refresh loop driving the session

use crate::config::WalletConfig;
use crate::view;
use horizon_balance::{BalanceFetcher, BalanceResult, BalanceState, WalletSession};
use std::future::Future;

/// How [`run`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Single lookup done
    Completed,
    /// `shutdown` resolved, possibly mid-request
    Interrupted,
}

/// Refresh and render until done or until `shutdown` resolves.
///
/// `shutdown` is polled for the whole run, including while a request is in
/// flight, so a stalled Horizon cannot make the loop unresponsive.
pub async fn run<S>(
    session: &mut WalletSession,
    fetcher: &BalanceFetcher,
    config: &WalletConfig,
    shutdown: S,
) -> Exit
where
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = refresh(session, fetcher, config.silent) => {}
            _ = &mut shutdown => return Exit::Interrupted,
        }
        println!("{}", view::render(session));

        let Some(interval) = config.watch else {
            return Exit::Completed;
        };
        tokio::select! {
            _ = tokio::time::sleep(interval) => println!(),
            _ = &mut shutdown => return Exit::Interrupted,
        }
    }
}

/// One refresh; with `silent` any failure is recorded as a zero balance.
pub async fn refresh(session: &mut WalletSession, fetcher: &BalanceFetcher, silent: bool) {
    if !silent {
        session.refresh(fetcher).await;
        return;
    }

    if let Some(ticket) = session.begin_refresh() {
        let balance = fetcher.fetch_native_balance_or_zero(Some(ticket.address())).await;
        session.complete_refresh(ticket, BalanceResult::amount(balance));
    }
}

/// Whether the last lookup left the session in an error state.
pub fn failed(session: &WalletSession) -> bool {
    matches!(session.balance(), BalanceState::Failed(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_balance::{Amount, HorizonClient};
    use std::time::Duration;
    use tokio::net::TcpListener;

    /// Nothing listens on the discard port, so every lookup fails fast.
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    fn config(horizon_url: &str, silent: bool, watch: Option<Duration>) -> WalletConfig {
        WalletConfig {
            address: Some("GABC".into()),
            horizon_url: horizon_url.into(),
            silent,
            watch,
        }
    }

    fn connected() -> WalletSession {
        let mut session = WalletSession::new();
        session.connect("GABC");
        session
    }

    /// Accepts connections and never answers.
    async fn stalled_horizon() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn silent_refresh_records_zero() {
        let fetcher = BalanceFetcher::new(HorizonClient::new(UNREACHABLE));
        let mut session = connected();

        refresh(&mut session, &fetcher, true).await;
        assert_eq!(session.balance(), &BalanceState::Loaded(Amount::ZERO));
        assert!(!failed(&session));
    }

    #[tokio::test]
    async fn explicit_refresh_records_failure() {
        let fetcher = BalanceFetcher::new(HorizonClient::new(UNREACHABLE));
        let mut session = connected();

        refresh(&mut session, &fetcher, false).await;
        assert!(matches!(session.balance(), BalanceState::Failed(_)));
        assert!(failed(&session));
    }

    #[tokio::test]
    async fn single_lookup_completes() {
        let config = config(UNREACHABLE, false, None);
        let fetcher = BalanceFetcher::new(HorizonClient::new(config.horizon_url.clone()));
        let mut session = connected();

        let exit = run(&mut session, &fetcher, &config, std::future::pending()).await;
        assert_eq!(exit, Exit::Completed);
        assert!(matches!(session.balance(), BalanceState::Failed(_)));
    }

    #[tokio::test]
    async fn shutdown_interrupts_stalled_request() {
        let config = config(&stalled_horizon().await, false, Some(Duration::from_secs(60)));
        let fetcher = BalanceFetcher::new(HorizonClient::new(config.horizon_url.clone()));
        let mut session = connected();

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let _ = tx.send(());
        });
        let shutdown = async {
            let _ = rx.await;
        };

        let exit = tokio::time::timeout(
            Duration::from_secs(5),
            run(&mut session, &fetcher, &config, shutdown),
        )
        .await
        .expect("loop ignored shutdown while a request was in flight");

        assert_eq!(exit, Exit::Interrupted);
        assert_eq!(session.balance(), &BalanceState::Loading);
    }

    #[tokio::test]
    async fn shutdown_ends_watch_between_refreshes() {
        let config = config(UNREACHABLE, true, Some(Duration::from_secs(60)));
        let fetcher = BalanceFetcher::new(HorizonClient::new(config.horizon_url.clone()));
        let mut session = connected();

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            let _ = tx.send(());
        });
        let shutdown = async {
            let _ = rx.await;
        };

        let exit = tokio::time::timeout(
            Duration::from_secs(5),
            run(&mut session, &fetcher, &config, shutdown),
        )
        .await
        .expect("watch loop ignored shutdown");

        assert_eq!(exit, Exit::Interrupted);
        assert_eq!(session.balance(), &BalanceState::Loaded(Amount::ZERO));
    }
}
