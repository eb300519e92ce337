//! Open trades and history lists.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::state::{OpenTrade, Store, ViewMeta};

/// One side of the open bets.
pub struct OpenTradesList;

impl OpenTradesList {
    /// Render the UP and DOWN columns.
    pub fn render(frame: &mut Frame, up_area: Rect, down_area: Rect, store: &Store) {
        let trades = &store.open_trades;
        let (up_total, down_total) = trades.totals();

        Self::render_side(
            frame,
            up_area,
            &format!(" UP ${up_total} "),
            &trades.up,
            Color::Green,
            &trades.meta,
        );
        Self::render_side(
            frame,
            down_area,
            &format!(" DOWN ${down_total} "),
            &trades.down,
            Color::Red,
            &trades.meta,
        );
    }

    fn render_side(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        trades: &[OpenTrade],
        color: Color,
        meta: &ViewMeta,
    ) {
        let items: Vec<ListItem> = trades
            .iter()
            .map(|t| ListItem::new(t.display_line()))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(Line::from(vec![
                    Span::styled(
                        title.to_string(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    stale_marker(meta),
                ]))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

        frame.render_widget(list, area);
    }
}

/// Settled bets.
pub struct HistoryList;

impl HistoryList {
    /// Render the history list.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let history = &store.history;

        let items: Vec<ListItem> = history
            .entries
            .iter()
            .map(|entry| {
                let style = if entry.is_win() {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                };
                ListItem::new(entry.display_line()).style(style)
            })
            .collect();

        let net = history.net_profit();
        let net_color = if net >= 0.0 { Color::Green } else { Color::Red };
        let title = Line::from(vec![
            Span::raw(format!(" History ({}) ", history.entries.len())),
            Span::styled(format!("net {net} "), Style::default().fg(net_color)),
            stale_marker(&history.meta),
        ]);

        let list = List::new(items).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(list, area);
    }
}

fn stale_marker(meta: &ViewMeta) -> Span<'static> {
    if meta.error().is_some() {
        Span::styled("(stale) ", Style::default().fg(Color::Red))
    } else {
        Span::raw("")
    }
}
