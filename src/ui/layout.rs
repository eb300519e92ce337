//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Balance line.
    pub balance_area: Rect,
    /// Price chart.
    pub chart_area: Rect,
    /// Open UP bets.
    pub up_area: Rect,
    /// Open DOWN bets.
    pub down_area: Rect,
    /// Settled trades.
    pub history_area: Rect,
    /// Amount input box.
    pub input_area: Rect,
    /// Key hints (bottom). Zero height when hidden.
    pub help_area: Rect,
    /// Notification area (overlaid).
    pub notification_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, show_help_bar: bool) -> Self {
        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                              // Status bar
                Constraint::Length(1),                              // Balance
                Constraint::Min(0),                                 // Body
                Constraint::Length(3),                              // Amount input
                Constraint::Length(if show_help_bar { 1 } else { 0 }), // Help bar
            ])
            .split(area);

        let body = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[2]);

        let side = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(body[1]);

        let open_trades = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(side[0]);

        let notification_area = centered_rect(50, 20, area);

        Self {
            status_area: rows[0],
            balance_area: rows[1],
            chart_area: body[0],
            up_area: open_trades[0],
            down_area: open_trades[1],
            history_area: side[1],
            input_area: rows[3],
            help_area: rows[4],
            notification_area,
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
