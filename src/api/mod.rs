//! Trading backend integration.
//!
//! This module provides the request/response contract of the backend's
//! `/api/*` surface, the [`Backend`] trait the sync layer consumes, and the
//! HTTP implementation of it.

mod backend;
mod client;
mod types;

#[cfg(test)]
pub use backend::MockBackend;
pub use backend::Backend;
pub use client::{ApiClient, ApiClientBuilder};
pub use types::{
    BalanceResponse, OpenTradesResponse, PriceResponse, TopUpRequest, TradeRequest, parse_amount,
};

use std::fmt;

/// Backend endpoints consumed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Balance,
    Price,
    OpenTrades,
    History,
    Trade,
    AddBalance,
}

impl Endpoint {
    /// Path relative to the configured base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Balance => "/api/balance",
            Self::Price => "/api/price",
            Self::OpenTrades => "/api/open-trades",
            Self::History => "/api/history",
            Self::Trade => "/api/trade",
            Self::AddBalance => "/api/add-balance",
        }
    }

    /// Whether requests to this endpoint change server state.
    pub fn is_mutation(self) -> bool {
        matches!(self, Self::Trade | Self::AddBalance)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = if self.is_mutation() { "POST" } else { "GET" };
        write!(f, "{method} {}", self.path())
    }
}
