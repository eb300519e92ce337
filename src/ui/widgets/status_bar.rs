//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{Store, ViewKind};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, help_key: &str) {
        let failing: Vec<String> = ViewKind::ALL
            .iter()
            .filter(|view| store.meta(**view).error().is_some())
            .map(ToString::to_string)
            .collect();

        let health = if failing.is_empty() {
            Span::styled("● Live", Style::default().fg(Color::Green))
        } else {
            Span::styled(
                format!("○ Failing: {}", failing.join(", ")),
                Style::default().fg(Color::Red),
            )
        };

        let pending = if store.app.pending_mutations > 0 {
            Span::styled(
                format!(" Sending {}... ", store.app.pending_mutations),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw("")
        };

        let updated = store
            .price
            .meta
            .last_updated
            .map(|t| format!(" Updated {} ", t.format("%H:%M:%S")))
            .unwrap_or_default();
        let help_hint = Span::styled(
            format!("{updated} Press {help_key} for help "),
            Style::default().fg(Color::Gray),
        );

        let status_line = Line::from(vec![
            Span::styled(
                " Tradepulse ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            health,
            pending,
        ]);

        // Calculate padding for right-aligned help hint
        let left_len: usize = status_line.spans.iter().map(|s| s.content.chars().count()).sum();
        let right_len = help_hint.content.chars().count();
        let padding = area
            .width
            .saturating_sub(left_len as u16 + right_len as u16);

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding as usize)));
        full_line.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}
