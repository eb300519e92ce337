//! Client synchronization loop.
//!
//! The [`SyncEngine`] runs every refresh and mutation as its own task and
//! reports results to the store as [`Action`]s:
//!
//! - **Refreshers** fetch one view each; a failure is reported for that view
//!   only and never reaches another refresher.
//! - The **Scheduler** fans out the polled views on a fixed interval without
//!   waiting for earlier requests, so refreshes of one view may overlap.
//! - **Mutations** (trades and top-ups) validate locally, send exactly one
//!   request and, on success, trigger one balance refresh.

mod refresher;
mod scheduler;
mod sequence;
mod trade;

pub use refresher::fetch;
pub use scheduler::Scheduler;
pub use sequence::Sequencer;

use crate::api::Backend;
use crate::error::{Error, Result};
use crate::state::{Action, ViewKind};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Drives refreshes and mutations against a [`Backend`].
///
/// Cheap to clone; clones share the backend, the action channel and the
/// sequence counters.
#[derive(Clone)]
pub struct SyncEngine {
    backend: Arc<dyn Backend>,
    action_tx: mpsc::UnboundedSender<Action>,
    sequencer: Arc<Sequencer>,
}

impl SyncEngine {
    /// Create a new engine reporting to `action_tx`.
    pub fn new(backend: Arc<dyn Backend>, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            backend,
            action_tx,
            sequencer: Arc::new(Sequencer::new()),
        }
    }

    /// Whether the store side of the channel is gone.
    pub fn is_closed(&self) -> bool {
        self.action_tx.is_closed()
    }

    /// Refresh one view and report the result.
    ///
    /// Never fails: errors are logged and reported as [`Action::ViewFailed`].
    pub async fn refresh(&self, view: ViewKind) {
        let seq = self.sequencer.next(view);
        debug!(%view, seq, "refreshing");

        let action = match fetch(self.backend.as_ref(), view).await {
            Ok(payload) => Action::ViewLoaded { seq, payload },
            Err(e) => {
                if e.is_recoverable() {
                    warn!(%view, seq, error = %e, "refresh failed");
                } else {
                    error!(%view, seq, error = %e, "refresh failed, retrying will not help");
                }
                Action::ViewFailed {
                    view,
                    seq,
                    error: e.to_string(),
                }
            }
        };

        if let Err(e) = self.dispatch(action) {
            debug!(%view, seq, error = %e, "dropping refresh result");
        }
    }

    /// Refresh one view on its own task.
    pub fn spawn_refresh(&self, view: ViewKind) -> JoinHandle<()> {
        let engine = self.clone();
        tokio::spawn(async move { engine.refresh(view).await })
    }

    /// Refresh every view concurrently and wait until all have reported.
    pub async fn refresh_all(&self) {
        join_all(ViewKind::ALL.iter().map(|view| self.refresh(*view))).await;
    }

    /// Start the initial load of every view in the background.
    ///
    /// Returns immediately; the scheduler does not wait for it.
    pub fn spawn_initial_load(&self) -> JoinHandle<()> {
        let engine = self.clone();
        tokio::spawn(async move {
            engine.refresh_all().await;
            info!("initial load finished");
        })
    }

    fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| Error::channel(e.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BalanceResponse, MockBackend, PriceResponse};
    use crate::state::{Store, ViewPayload, ViewStatus};
    use pretty_assertions::assert_eq;

    fn engine(backend: MockBackend) -> (SyncEngine, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (SyncEngine::new(Arc::new(backend), tx), rx)
    }

    #[tokio::test]
    async fn test_balance_refresh_renders_amount() {
        let mut backend = MockBackend::new();
        backend
            .expect_fetch_balance()
            .times(1)
            .returning(|| Ok(BalanceResponse { balance: 850.0 }));
        let (engine, mut rx) = engine(backend);

        engine.refresh(ViewKind::Balance).await;

        let mut store = Store::new(true);
        store.reduce(rx.recv().await.unwrap());
        assert_eq!(store.balance.display_text(), "Balance: $850");
    }

    #[tokio::test]
    async fn test_price_refresh_feeds_chart() {
        let mut backend = MockBackend::new();
        backend.expect_fetch_price().returning(|| {
            Ok(PriceResponse {
                price: None,
                history: vec![1.0, 2.0, 3.0],
            })
        });
        let (engine, mut rx) = engine(backend);

        engine.refresh(ViewKind::Price).await;

        let mut store = Store::new(true);
        store.reduce(rx.recv().await.unwrap());
        assert_eq!(store.price.series.labels(), &[0, 1, 2]);
        assert_eq!(store.price.series.values(), &[1.0, 2.0, 3.0]);
    }

    #[tokio::test]
    async fn test_failed_refresh_reports_only_its_view() {
        let mut backend = MockBackend::new();
        backend
            .expect_fetch_open_trades()
            .returning(|| Err(Error::endpoint("/api/open-trades", 500)));
        let (engine, mut rx) = engine(backend);

        engine.refresh(ViewKind::OpenTrades).await;

        match rx.recv().await.unwrap() {
            Action::ViewFailed { view, seq, error } => {
                assert_eq!(view, ViewKind::OpenTrades);
                assert_eq!(seq, 1);
                assert_eq!(error, "/api/open-trades API failed: 500");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_initial_load_fetches_every_view_once() {
        let mut backend = MockBackend::new();
        backend
            .expect_fetch_balance()
            .times(1)
            .returning(|| Err(Error::network("connection refused")));
        backend.expect_fetch_price().times(1).returning(|| {
            Ok(PriceResponse {
                price: Some(100.0),
                history: vec![100.0],
            })
        });
        backend
            .expect_fetch_open_trades()
            .times(1)
            .returning(|| Ok(crate::api::OpenTradesResponse { up: vec![], down: vec![] }));
        backend
            .expect_fetch_history()
            .times(1)
            .returning(|| Ok(Vec::new()));
        let (engine, mut rx) = engine(backend);

        engine.spawn_initial_load().await.unwrap();

        let mut store = Store::new(true);
        for action in test_support::drain(&mut rx) {
            store.reduce(action);
        }
        assert_eq!(store.balance.display_text(), "Balance: Error loading");
        assert_eq!(store.meta(ViewKind::Price).status, ViewStatus::Ready);
        assert_eq!(store.meta(ViewKind::OpenTrades).status, ViewStatus::Ready);
        assert_eq!(store.meta(ViewKind::History).status, ViewStatus::Ready);
    }

    #[tokio::test]
    async fn test_hanging_view_does_not_block_initial_load() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let engine = SyncEngine::new(Arc::new(test_support::HangingOpenTrades), tx);

        let _load = engine.spawn_initial_load();

        let mut views = Vec::new();
        for _ in 0..3 {
            match rx.recv().await.unwrap() {
                Action::ViewLoaded { payload, .. } => views.push(payload.view()),
                other => panic!("unexpected action: {other:?}"),
            }
        }
        views.sort_by_key(|v| v.index());
        assert_eq!(
            views,
            vec![ViewKind::Balance, ViewKind::Price, ViewKind::History]
        );
    }

    #[tokio::test]
    async fn test_sequence_numbers_increase_per_view() {
        let mut backend = MockBackend::new();
        backend.expect_fetch_history().times(2).returning(|| Ok(Vec::new()));
        let (engine, mut rx) = engine(backend);

        engine.refresh(ViewKind::History).await;
        engine.refresh(ViewKind::History).await;

        let seqs: Vec<u64> = test_support::drain(&mut rx)
            .into_iter()
            .map(|action| match action {
                Action::ViewLoaded {
                    seq,
                    payload: ViewPayload::History(_),
                } => seq,
                other => panic!("unexpected action: {other:?}"),
            })
            .collect();
        assert_eq!(seqs, vec![1, 2]);
    }
}
