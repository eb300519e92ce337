//! TUI widgets.

mod bet_panel;
mod help;
mod notifications;
mod price_chart;
mod status_bar;
mod trade_lists;

pub use bet_panel::{AmountInput, BalanceLine};
pub use help::{HelpBar, HelpPanel};
pub use notifications::render_notification;
pub use price_chart::PriceChart;
pub use status_bar::StatusBar;
pub use trade_lists::{HistoryList, OpenTradesList};
