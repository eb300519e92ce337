//! UI rendering using ratatui.
//!
//! Rendering is a pure function of the [`Store`]; nothing here mutates state.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{
    AmountInput, BalanceLine, HelpBar, HelpPanel, HistoryList, OpenTradesList, PriceChart,
    StatusBar,
};

use crate::config::{KeyBindings, UiConfig};
use crate::state::Store;
use ratatui::{Frame, style::Color};
use std::str::FromStr;

/// Main UI renderer.
pub struct Ui {
    chart_color: Color,
    show_help_bar: bool,
    keybindings: KeyBindings,
}

impl Ui {
    /// Create a renderer. An unparseable chart color falls back to green.
    pub fn new(config: &UiConfig, keybindings: KeyBindings) -> Self {
        let chart_color = Color::from_str(&config.chart_color).unwrap_or_else(|_| {
            tracing::warn!(color = %config.chart_color, "Unrecognised chart color");
            Color::Green
        });
        Self {
            chart_color,
            show_help_bar: config.show_help_bar,
            keybindings,
        }
    }

    /// Render the entire UI.
    pub fn render(&self, frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area(), self.show_help_bar);

        StatusBar::render(frame, layout.status_area, store, &self.keybindings.help);
        BalanceLine::render(frame, layout.balance_area, store);
        PriceChart::render(frame, layout.chart_area, store, self.chart_color);
        OpenTradesList::render(frame, layout.up_area, layout.down_area, store);
        HistoryList::render(frame, layout.history_area, store);
        AmountInput::render(
            frame,
            layout.input_area,
            store,
            &self.keybindings.edit_amount,
        );

        if self.show_help_bar {
            HelpBar::render(frame, layout.help_area, &self.keybindings);
        }

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), &self.keybindings);
        }

        // Render notification if present
        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BalanceResponse, OpenTradesResponse, PriceResponse};
    use crate::state::{Action, OpenTrade, ViewKind, ViewPayload};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(store: &Store) -> String {
        draw_with(store, KeyBindings::default())
    }

    fn draw_with(store: &Store, keybindings: KeyBindings) -> String {
        let ui = Ui::new(&UiConfig::default(), keybindings);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| ui.render(frame, store)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_placeholder_before_first_load() {
        let store = Store::new(true);
        let screen = draw(&store);
        assert!(screen.contains("Balance: --"));
        assert!(screen.contains("Loading price..."));
    }

    #[test]
    fn test_loaded_views_render() {
        let mut store = Store::new(true);
        store.reduce(Action::ViewLoaded {
            seq: 1,
            payload: ViewPayload::Balance(BalanceResponse {
                balance: 1000.0,
            }),
        });
        store.reduce(Action::ViewLoaded {
            seq: 1,
            payload: ViewPayload::Price(PriceResponse {
                price: Some(101.5),
                history: vec![100.0, 101.0, 101.5],
            }),
        });
        store.reduce(Action::ViewLoaded {
            seq: 1,
            payload: ViewPayload::OpenTrades(OpenTradesResponse {
                up: vec![OpenTrade {
                    username: Some("alice".to_string()),
                    amount: 25.0,
                }],
                down: vec![OpenTrade {
                    username: None,
                    amount: 5.0,
                }],
            }),
        });

        let screen = draw(&store);
        assert!(screen.contains("Balance: $1000"));
        assert!(screen.contains("101.50"));
        assert!(screen.contains("alice: $25"));
        assert!(screen.contains("Unknown: $5"));
    }

    #[test]
    fn test_failed_view_is_flagged() {
        let mut store = Store::new(true);
        store.reduce(Action::ViewFailed {
            view: ViewKind::Balance,
            seq: 1,
            error: "balance API failed: 500".to_string(),
        });

        let screen = draw(&store);
        assert!(screen.contains("Balance: Error loading"));
        assert!(screen.contains("Failing: balance"));
    }

    #[test]
    fn test_hints_follow_key_bindings() {
        let keybindings = KeyBindings {
            help: "h".to_string(),
            edit_amount: "e".to_string(),
            ..KeyBindings::default()
        };
        let screen = draw_with(&Store::new(true), keybindings);
        assert!(screen.contains("Press h for help"));
        assert!(screen.contains("e to edit"));
        assert!(!screen.contains("Press ? for help"));
    }

    #[test]
    fn test_history_title_shows_net_profit() {
        let mut store = Store::new(true);
        store.reduce(Action::ViewLoaded {
            seq: 1,
            payload: ViewPayload::History(
                serde_json::from_str(
                    r#"[
                        {"username": "alice", "amount": 10, "direction": "UP", "result": "win", "profit_amount": 9.5},
                        {"username": "bob", "amount": 4, "direction": "DOWN", "result": "loss", "profit_amount": -4}
                    ]"#,
                )
                .unwrap(),
            ),
        });

        let screen = draw(&store);
        assert!(screen.contains("History (2) net 5.5"));
        assert!(screen.contains("alice: $10 (UP) - win (9.5)"));
    }

    #[test]
    fn test_bad_chart_color_falls_back() {
        let config = UiConfig {
            chart_color: "not-a-color".to_string(),
            ..UiConfig::default()
        };
        let ui = Ui::new(&config, KeyBindings::default());
        assert_eq!(ui.chart_color, Color::Green);
    }
}
