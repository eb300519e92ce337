//! Fixed-interval polling of the live views.

use super::SyncEngine;
use crate::state::ViewKind;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::IntervalStream;
use tracing::{debug, info, trace};

/// Refreshes [`ViewKind::POLLED`] every `period`.
///
/// Each tick spawns one task per view and moves on; it never waits for the
/// previous tick's requests, so a slow view cannot hold back the others or
/// the next tick.
pub struct Scheduler {
    engine: SyncEngine,
    period: Duration,
}

impl Scheduler {
    /// Create a scheduler ticking every `period`.
    pub fn new(engine: SyncEngine, period: Duration) -> Self {
        Self { engine, period }
    }

    /// Run on a background task until the store goes away.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Tick forever. The first tick fires one period after the call.
    pub async fn run(self) {
        let mut interval = tokio::time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = IntervalStream::new(interval);

        info!(period_ms = self.period.as_millis() as u64, "polling started");
        let mut tick: u64 = 0;
        while ticks.next().await.is_some() {
            if self.engine.is_closed() {
                debug!("action channel closed, polling stopped");
                break;
            }
            tick += 1;
            trace!(tick, "poll tick");
            for view in ViewKind::POLLED {
                self.engine.spawn_refresh(view);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockBackend, OpenTradesResponse, PriceResponse};
    use crate::error::Error;
    use crate::state::{Action, Store, ViewPayload};
    use crate::sync::test_support::{HangingOpenTrades, drain};
    use std::collections::HashSet;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    const PERIOD: Duration = Duration::from_millis(2000);

    fn loaded_view(action: &Action) -> Option<ViewKind> {
        match action {
            Action::ViewLoaded { payload, .. } => Some(payload.view()),
            _ => None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_before_first_period() {
        let mut backend = MockBackend::new();
        backend.expect_fetch_price().never();
        backend.expect_fetch_open_trades().never();
        backend.expect_fetch_history().never();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let engine = SyncEngine::new(Arc::new(backend), tx);

        let handle = Scheduler::new(engine, PERIOD).spawn();
        tokio::time::sleep(PERIOD - Duration::from_millis(1)).await;

        assert!(drain(&mut rx).is_empty());
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_polls_everything_but_balance() {
        let mut backend = MockBackend::new();
        backend.expect_fetch_balance().never();
        backend.expect_fetch_price().returning(|| {
            Ok(PriceResponse {
                price: None,
                history: vec![1.0],
            })
        });
        backend.expect_fetch_open_trades().returning(|| {
            Ok(OpenTradesResponse {
                up: vec![],
                down: vec![],
            })
        });
        backend.expect_fetch_history().returning(|| Ok(Vec::new()));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let engine = SyncEngine::new(Arc::new(backend), tx);

        let handle = Scheduler::new(engine, PERIOD).spawn();

        let mut seen = HashSet::new();
        while seen.len() < 3 {
            let action = rx.recv().await.unwrap();
            seen.insert(loaded_view(&action).expect("only loads expected"));
        }
        assert!(!seen.contains(&ViewKind::Balance));
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_open_trades_does_not_affect_other_views() {
        let mut backend = MockBackend::new();
        backend.expect_fetch_price().returning(|| {
            Ok(PriceResponse {
                price: None,
                history: vec![1.0, 2.0],
            })
        });
        backend
            .expect_fetch_open_trades()
            .returning(|| Err(Error::endpoint("/api/open-trades", 500)));
        backend.expect_fetch_history().returning(|| Ok(Vec::new()));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let engine = SyncEngine::new(Arc::new(backend), tx);
        let handle = Scheduler::new(engine, PERIOD).spawn();

        let mut store = Store::new(true);
        // Two full ticks: three results each.
        for _ in 0..6 {
            store.reduce(rx.recv().await.unwrap());
        }

        assert_eq!(store.meta(ViewKind::Price).applied_seq, 2);
        assert_eq!(store.meta(ViewKind::History).applied_seq, 2);
        assert!(!store.meta(ViewKind::OpenTrades).has_data());
        assert!(store.meta(ViewKind::OpenTrades).error().is_some());
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_open_trades_does_not_delay_next_tick() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let engine = SyncEngine::new(Arc::new(HangingOpenTrades), tx);
        let handle = Scheduler::new(engine, PERIOD).spawn();

        let start = Instant::now();
        let mut price_seqs = Vec::new();
        while price_seqs.len() < 3 {
            match rx.recv().await.unwrap() {
                Action::ViewLoaded {
                    seq,
                    payload: ViewPayload::Price(_),
                } => price_seqs.push(seq),
                Action::ViewLoaded {
                    payload: ViewPayload::History(_),
                    ..
                } => {}
                other => panic!("unexpected action: {other:?}"),
            }
        }

        assert_eq!(price_seqs, vec![1, 2, 3]);
        let elapsed = start.elapsed();
        assert!(elapsed >= PERIOD * 3 && elapsed < PERIOD * 4, "{elapsed:?}");
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_store_is_gone() {
        let mut backend = MockBackend::new();
        backend.expect_fetch_price().never();
        backend.expect_fetch_open_trades().never();
        backend.expect_fetch_history().never();
        let (tx, rx) = mpsc::unbounded_channel();
        let engine = SyncEngine::new(Arc::new(backend), tx);
        drop(rx);

        Scheduler::new(engine, PERIOD).run().await;
    }
}
