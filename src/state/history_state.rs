//! Settled trade history.

use super::open_trades_state::UNKNOWN_USER;
use super::{Direction, ViewMeta};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a settled bet ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeResult {
    Win,
    Loss,
    /// Any result this client does not know about.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for TradeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A settled bet. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Who placed the bet.
    #[serde(default)]
    pub username: Option<String>,
    /// Stake.
    pub amount: f64,
    /// Side of the bet.
    pub direction: Direction,
    /// Settlement result.
    pub result: TradeResult,
    /// Signed payout: positive on a win, the lost stake as a negative on a loss.
    pub profit_amount: f64,
}

impl HistoryEntry {
    /// Display name, falling back to `Unknown`.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(UNKNOWN_USER)
    }

    /// One list row, e.g. `alice: $10 (UP) - win (9.5)`.
    pub fn display_line(&self) -> String {
        format!(
            "{}: ${} ({}) - {} ({})",
            self.username(),
            self.amount,
            self.direction,
            self.result,
            self.profit_amount
        )
    }

    /// Check if the bet won.
    pub fn is_win(&self) -> bool {
        self.result == TradeResult::Win
    }
}

/// History view state.
#[derive(Debug, Default, Clone)]
pub struct HistoryState {
    /// Settled bets, newest first as served.
    pub entries: Vec<HistoryEntry>,
    /// Refresh bookkeeping.
    pub meta: ViewMeta,
}

impl HistoryState {
    pub(crate) fn replace(&mut self, entries: Vec<HistoryEntry>) {
        self.entries = entries;
    }

    /// Net profit across the listed entries.
    pub fn net_profit(&self) -> f64 {
        self.entries.iter().fold(0.0, |acc, e| acc + e.profit_amount)
    }
}
