//! The backend contract consumed by the sync layer.

use super::{BalanceResponse, OpenTradesResponse, PriceResponse, TopUpRequest, TradeRequest};
use crate::error::Result;
use crate::state::HistoryEntry;
use async_trait::async_trait;

/// Authenticated access to the trading backend.
///
/// Read methods fail with [`Error::Endpoint`](crate::Error::Endpoint) on a
/// non-success status; mutations fail with [`Error::Trade`](crate::Error::Trade).
/// Transport and decode failures are [`Error::Network`](crate::Error::Network).
/// Implementations never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/balance`.
    async fn fetch_balance(&self) -> Result<BalanceResponse>;

    /// `GET /api/price`.
    async fn fetch_price(&self) -> Result<PriceResponse>;

    /// `GET /api/open-trades`.
    async fn fetch_open_trades(&self) -> Result<OpenTradesResponse>;

    /// `GET /api/history`.
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>>;

    /// `POST /api/trade`. Every call places a new bet.
    async fn place_trade(&self, request: &TradeRequest) -> Result<()>;

    /// `POST /api/add-balance`.
    async fn add_balance(&self, request: &TopUpRequest) -> Result<()>;
}
