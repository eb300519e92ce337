//! State management for Tradepulse.
//!
//! All view state lives in a single [`Store`]. Refresh tasks never touch it
//! directly; they send [`Action`]s over a channel and the owner of the store
//! reduces them one at a time, so every view is a full replace of the latest
//! accepted server response.

mod app_state;
mod balance_state;
mod history_state;
mod open_trades_state;
mod price_state;

pub use app_state::{AppState, InputMode};
pub use balance_state::BalanceState;
pub use history_state::{HistoryEntry, HistoryState, TradeResult};
pub use open_trades_state::{OpenTrade, OpenTradesState};
pub use price_state::{ChartSeries, PriceState};

use crate::api::{BalanceResponse, OpenTradesResponse, PriceResponse, TradeRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "UP"),
            Self::Down => write!(f, "DOWN"),
        }
    }
}

/// One of the independently refreshed server views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Balance,
    Price,
    OpenTrades,
    History,
}

impl ViewKind {
    /// Every view, in initial-load order.
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Balance,
        ViewKind::Price,
        ViewKind::OpenTrades,
        ViewKind::History,
    ];

    /// Views refreshed on every scheduler tick. Balance only refreshes at
    /// startup and after a successful mutation.
    pub const POLLED: [ViewKind; 3] = [ViewKind::Price, ViewKind::OpenTrades, ViewKind::History];

    /// Stable index, used for per-view counters.
    pub fn index(self) -> usize {
        match self {
            Self::Balance => 0,
            Self::Price => 1,
            Self::OpenTrades => 2,
            Self::History => 3,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balance => write!(f, "balance"),
            Self::Price => write!(f, "price"),
            Self::OpenTrades => write!(f, "open-trades"),
            Self::History => write!(f, "history"),
        }
    }
}

/// Outcome of the most recent refresh applied to a view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewStatus {
    /// Nothing has resolved yet.
    #[default]
    Idle,
    /// The view shows the latest accepted response.
    Ready,
    /// The last refresh failed; the previous rendering is kept.
    Failed(String),
}

/// Bookkeeping shared by every refreshed view.
#[derive(Debug, Clone, Default)]
pub struct ViewMeta {
    /// Status of the latest applied refresh.
    pub status: ViewStatus,
    /// Sequence number of the payload currently rendered (0 = none).
    pub applied_seq: u64,
    /// When the rendered payload was applied.
    pub last_updated: Option<DateTime<Utc>>,
}

impl ViewMeta {
    /// Whether the view has ever rendered a server payload.
    pub fn has_data(&self) -> bool {
        self.applied_seq > 0
    }

    /// The failure message, if the last refresh failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ViewStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    fn mark_ready(&mut self, seq: u64) {
        self.status = ViewStatus::Ready;
        self.applied_seq = seq;
        self.last_updated = Some(Utc::now());
    }

    fn mark_failed(&mut self, error: String) {
        self.status = ViewStatus::Failed(error);
    }
}

/// A parsed response for one view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPayload {
    Balance(BalanceResponse),
    Price(PriceResponse),
    OpenTrades(OpenTradesResponse),
    History(Vec<HistoryEntry>),
}

impl ViewPayload {
    /// The view this payload renders into.
    pub fn view(&self) -> ViewKind {
        match self {
            Self::Balance(_) => ViewKind::Balance,
            Self::Price(_) => ViewKind::Price,
            Self::OpenTrades(_) => ViewKind::OpenTrades,
            Self::History(_) => ViewKind::History,
        }
    }
}

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Input
    SetInputMode(InputMode),
    InputChar(char),
    InputBackspace,

    // Data refresh
    RefreshAll,
    ViewLoaded { seq: u64, payload: ViewPayload },
    ViewFailed { view: ViewKind, seq: u64, error: String },

    // Mutations
    PlaceTrade(Direction),
    TopUp,
    TradePlaced(TradeRequest),
    TradeFailed(String),
    TopUpCompleted(f64),
    TopUpFailed(String),

    // UI actions
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,
    Tick,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration_secs: 3,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration_secs: 3,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration_secs: 5,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            duration_secs: 10,
        }
    }
}

/// The client state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Account balance.
    pub balance: BalanceState,
    /// Price series.
    pub price: PriceState,
    /// Open bets, split by direction.
    pub open_trades: OpenTradesState,
    /// Settled trade history.
    pub history: HistoryState,
    /// Drop payloads older than the one already rendered.
    discard_stale: bool,
}

impl Store {
    /// Create a new store.
    pub fn new(discard_stale: bool) -> Self {
        Self {
            app: AppState::new(),
            balance: BalanceState::default(),
            price: PriceState::default(),
            open_trades: OpenTradesState::default(),
            history: HistoryState::default(),
            discard_stale,
        }
    }

    /// Bookkeeping for one view.
    pub fn meta(&self, view: ViewKind) -> &ViewMeta {
        match view {
            ViewKind::Balance => &self.balance.meta,
            ViewKind::Price => &self.price.meta,
            ViewKind::OpenTrades => &self.open_trades.meta,
            ViewKind::History => &self.history.meta,
        }
    }

    fn meta_mut(&mut self, view: ViewKind) -> &mut ViewMeta {
        match view {
            ViewKind::Balance => &mut self.balance.meta,
            ViewKind::Price => &mut self.price.meta,
            ViewKind::OpenTrades => &mut self.open_trades.meta,
            ViewKind::History => &mut self.history.meta,
        }
    }

    /// Whether a result tagged `seq` may still be applied to `view`.
    fn accepts(&self, view: ViewKind, seq: u64) -> bool {
        !self.discard_stale || seq > self.meta(view).applied_seq
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Input
            Action::SetInputMode(mode) => self.app.input_mode = mode,
            Action::InputChar(c) => self.app.push_char(c),
            Action::InputBackspace => self.app.pop_char(),

            // Data refresh
            Action::ViewLoaded { seq, payload } => {
                let view = payload.view();
                if !self.accepts(view, seq) {
                    tracing::debug!(%view, seq, "discarding stale response");
                    return;
                }
                self.meta_mut(view).mark_ready(seq);
                match payload {
                    ViewPayload::Balance(response) => self.balance.replace(response),
                    ViewPayload::Price(response) => self.price.replace(response),
                    ViewPayload::OpenTrades(response) => self.open_trades.replace(response),
                    ViewPayload::History(entries) => self.history.replace(entries),
                }
            }
            Action::ViewFailed { view, seq, error } => {
                if !self.accepts(view, seq) {
                    tracing::debug!(%view, seq, "ignoring failure older than rendered data");
                    return;
                }
                self.meta_mut(view).mark_failed(error);
            }

            // Mutations
            Action::PlaceTrade(_) | Action::TopUp => self.app.pending_mutations += 1,
            Action::TradePlaced(_) => {
                self.app.finish_mutation();
                self.app.notify(Notification::success("Trade placed!"));
            }
            Action::TradeFailed(error) => {
                self.app.finish_mutation();
                self.app
                    .notify(Notification::error(format!("Trade failed: {error}")));
            }
            Action::TopUpCompleted(amount) => {
                self.app.finish_mutation();
                self.app
                    .notify(Notification::success(format!("Added ${amount} to balance")));
            }
            Action::TopUpFailed(error) => {
                self.app.finish_mutation();
                self.app
                    .notify(Notification::error(format!("Top up failed: {error}")));
            }

            // UI actions
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => self.app.notify(notification),
            Action::DismissNotification => self.app.dismiss_notification(),
            Action::Tick => self.app.expire_notification(),
            Action::RefreshAll => {}

            // Quit
            Action::Quit => self.app.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn balance(seq: u64, amount: f64) -> Action {
        Action::ViewLoaded {
            seq,
            payload: ViewPayload::Balance(BalanceResponse { balance: amount }),
        }
    }

    fn price(seq: u64, history: Vec<f64>) -> Action {
        Action::ViewLoaded {
            seq,
            payload: ViewPayload::Price(PriceResponse {
                price: history.last().copied(),
                history,
            }),
        }
    }

    #[test]
    fn test_balance_renders_loaded_amount() {
        let mut store = Store::new(true);
        assert_eq!(store.balance.display_text(), "Balance: --");

        store.reduce(balance(1, 850.0));

        assert_eq!(store.balance.display_text(), "Balance: $850");
        assert_eq!(store.meta(ViewKind::Balance).status, ViewStatus::Ready);
    }

    #[test]
    fn test_price_payload_feeds_chart_series() {
        let mut store = Store::new(true);
        store.reduce(price(1, vec![1.0, 2.0, 3.0]));

        assert_eq!(store.price.series.labels(), &[0, 1, 2]);
        assert_eq!(store.price.series.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut store = Store::new(true);
        store.reduce(price(2, vec![5.0, 6.0]));
        store.reduce(price(1, vec![1.0]));

        assert_eq!(store.price.series.values(), &[5.0, 6.0]);
        assert_eq!(store.meta(ViewKind::Price).applied_seq, 2);
    }

    #[test]
    fn test_last_to_resolve_wins_when_stale_kept() {
        let mut store = Store::new(false);
        store.reduce(price(2, vec![5.0, 6.0]));
        store.reduce(price(1, vec![1.0]));

        assert_eq!(store.price.series.values(), &[1.0]);
    }

    #[test]
    fn test_failure_keeps_previous_rendering() {
        let mut store = Store::new(true);
        store.reduce(price(1, vec![1.0, 2.0]));
        store.reduce(Action::ViewFailed {
            view: ViewKind::Price,
            seq: 2,
            error: "/api/price API failed: 502".to_string(),
        });

        assert_eq!(store.price.series.values(), &[1.0, 2.0]);
        assert_eq!(
            store.meta(ViewKind::Price).error(),
            Some("/api/price API failed: 502")
        );

        // A later success clears the flag.
        store.reduce(price(3, vec![4.0]));
        assert_eq!(store.meta(ViewKind::Price).status, ViewStatus::Ready);
    }

    #[test]
    fn test_failure_older_than_rendered_data_is_ignored() {
        let mut store = Store::new(true);
        store.reduce(balance(3, 10.0));
        store.reduce(Action::ViewFailed {
            view: ViewKind::Balance,
            seq: 2,
            error: "timeout".to_string(),
        });

        assert_eq!(store.meta(ViewKind::Balance).status, ViewStatus::Ready);
    }

    #[test]
    fn test_failure_does_not_block_newer_late_success() {
        let mut store = Store::new(true);
        store.reduce(Action::ViewFailed {
            view: ViewKind::History,
            seq: 3,
            error: "boom".to_string(),
        });
        store.reduce(Action::ViewLoaded {
            seq: 2,
            payload: ViewPayload::History(Vec::new()),
        });

        assert_eq!(store.meta(ViewKind::History).applied_seq, 2);
        assert_eq!(store.meta(ViewKind::History).status, ViewStatus::Ready);
    }

    #[test]
    fn test_failed_trade_leaves_balance_untouched() {
        let mut store = Store::new(true);
        store.reduce(balance(1, 1000.0));
        store.reduce(Action::PlaceTrade(Direction::Up));
        store.reduce(Action::TradeFailed("Trade API failed: 500".to_string()));

        assert_eq!(store.balance.amount, Some(1000.0));
        assert_eq!(store.app.pending_mutations, 0);
        let notification = store.app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.message, "Trade failed: Trade API failed: 500");
    }

    #[test]
    fn test_trade_placed_shows_confirmation() {
        let mut store = Store::new(true);
        store.reduce(Action::PlaceTrade(Direction::Down));
        assert_eq!(store.app.pending_mutations, 1);

        store.reduce(Action::TradePlaced(TradeRequest::new(
            10.0,
            Direction::Down,
        )));

        assert_eq!(store.app.pending_mutations, 0);
        assert_eq!(
            store.app.notification,
            Some(Notification::success("Trade placed!"))
        );
    }

    #[test]
    fn test_direction_wire_format() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"UP\"");
        assert_eq!(
            serde_json::from_str::<Direction>("\"DOWN\"").unwrap(),
            Direction::Down
        );
    }
}
