//! Balance line and amount input.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::Store;

/// The balance line.
pub struct BalanceLine;

impl BalanceLine {
    /// Render the balance line.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let balance = &store.balance;
        let style = if balance.meta.error().is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let paragraph = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(balance.display_text(), style),
        ]));
        frame.render_widget(paragraph, area);
    }
}

/// The bet amount field.
pub struct AmountInput;

impl AmountInput {
    /// Render the amount field, placing the cursor while editing.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, edit_key: &str) {
        let app = &store.app;
        let (border, hint) = if app.is_editing() {
            (Color::Yellow, " Enter/Esc to finish ".to_string())
        } else {
            (Color::Gray, format!(" {edit_key} to edit "))
        };

        let text = if app.input_buffer.is_empty() && !app.is_editing() {
            Span::styled("amount", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(app.input_buffer.as_str())
        };

        let paragraph = Paragraph::new(Line::from(vec![Span::raw("$ "), text])).block(
            Block::default()
                .title(" Amount ")
                .title_bottom(hint)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(paragraph, area);

        if app.is_editing() {
            let typed = app.input_buffer[..app.cursor_position].chars().count() as u16;
            frame.set_cursor_position(Position::new(area.x + 3 + typed, area.y + 1));
        }
    }
}
