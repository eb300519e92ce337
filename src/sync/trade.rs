//! User-initiated mutations: placing a bet and topping up the balance.

use super::SyncEngine;
use crate::api::{TopUpRequest, TradeRequest};
use crate::error::Result;
use crate::state::{Action, Direction, ViewKind};
use tokio::task::JoinHandle;
use tracing::{info, warn};

impl SyncEngine {
    /// Validate `input` and, if it is a positive amount, place a bet on its
    /// own task.
    ///
    /// A rejected amount returns [`Error::Validation`](crate::Error::Validation)
    /// and sends nothing. Otherwise exactly one request is sent; its outcome
    /// arrives as [`Action::TradePlaced`] or [`Action::TradeFailed`].
    pub fn place_trade(&self, input: &str, direction: Direction) -> Result<JoinHandle<()>> {
        let request = TradeRequest::parse(input, direction)?;
        let engine = self.clone();
        Ok(tokio::spawn(async move {
            let _ = engine.submit_trade(&request).await;
        }))
    }

    /// Send a validated bet and report the outcome.
    ///
    /// On success the confirmation is dispatched first, then one balance
    /// refresh is started and left to finish on its own; its outcome does not
    /// affect this result.
    pub async fn submit_trade(&self, request: &TradeRequest) -> Result<()> {
        info!(amount = request.amount, direction = %request.direction, "placing trade");
        if let Err(e) = self.backend.place_trade(request).await {
            warn!(error = %e, "trade rejected");
            self.report(Action::TradeFailed(e.to_string()));
            return Err(e);
        }
        info!(amount = request.amount, direction = %request.direction, "trade placed");
        self.report(Action::TradePlaced(request.clone()));
        self.spawn_refresh(ViewKind::Balance);
        Ok(())
    }

    /// Validate `input` and add it to the balance on its own task.
    ///
    /// Same contract as [`place_trade`](Self::place_trade); the outcome arrives
    /// as [`Action::TopUpCompleted`] or [`Action::TopUpFailed`].
    pub fn top_up(&self, input: &str) -> Result<JoinHandle<()>> {
        let request = TopUpRequest::parse(input)?;
        let engine = self.clone();
        Ok(tokio::spawn(async move {
            let _ = engine.submit_top_up(&request).await;
        }))
    }

    /// Send a validated top-up and report the outcome, then refresh the
    /// balance once on success.
    pub async fn submit_top_up(&self, request: &TopUpRequest) -> Result<()> {
        info!(amount = request.amount, "topping up balance");
        if let Err(e) = self.backend.add_balance(request).await {
            warn!(error = %e, "top up rejected");
            self.report(Action::TopUpFailed(e.to_string()));
            return Err(e);
        }
        self.report(Action::TopUpCompleted(request.amount));
        self.spawn_refresh(ViewKind::Balance);
        Ok(())
    }

    fn report(&self, action: Action) {
        if let Err(e) = self.dispatch(action) {
            warn!(error = %e, "dropping mutation result");
        }
    }
}
