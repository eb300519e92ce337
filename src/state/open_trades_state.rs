//! Open (unsettled) bets.

use super::ViewMeta;
use crate::api::OpenTradesResponse;
use serde::{Deserialize, Serialize};

/// Name shown when the backend reports no username.
pub(crate) const UNKNOWN_USER: &str = "Unknown";

/// A bet that has not settled yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenTrade {
    /// Who placed the bet.
    #[serde(default)]
    pub username: Option<String>,
    /// Stake.
    pub amount: f64,
}

impl OpenTrade {
    /// Display name, falling back to `Unknown`.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(UNKNOWN_USER)
    }

    /// One list row, e.g. `alice: $25`.
    pub fn display_line(&self) -> String {
        format!("{}: ${}", self.username(), self.amount)
    }
}

/// Open bets grouped by direction. Both lists are replaced on every refresh.
#[derive(Debug, Default, Clone)]
pub struct OpenTradesState {
    /// Bets on the price going up.
    pub up: Vec<OpenTrade>,
    /// Bets on the price going down.
    pub down: Vec<OpenTrade>,
    /// Refresh bookkeeping.
    pub meta: ViewMeta,
}

impl OpenTradesState {
    pub(crate) fn replace(&mut self, response: OpenTradesResponse) {
        self.up = response.up;
        self.down = response.down;
    }

    /// Total stake on each side as `(up, down)`.
    pub fn totals(&self) -> (f64, f64) {
        (
            self.up.iter().fold(0.0, |acc, t| acc + t.amount),
            self.down.iter().fold(0.0, |acc, t| acc + t.amount),
        )
    }
}
