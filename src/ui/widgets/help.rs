//! Help panel and key hint bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::KeyBindings;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings) {
        let popup_area = centered_rect(60, 70, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let mut help_text = vec![section("Betting"), Line::from("")];
        help_text.push(entry(&keys.edit_amount, "Edit amount"));
        help_text.push(entry(&keys.bet_up, "Bet UP"));
        help_text.push(entry(&keys.bet_down, "Bet DOWN"));
        help_text.push(entry(&keys.top_up, "Top up balance by amount"));
        help_text.push(Line::from(""));
        help_text.push(section("Editing"));
        help_text.push(Line::from(""));
        help_text.push(entry("Enter", "Finish editing"));
        help_text.push(entry("Esc", "Finish editing / dismiss"));
        help_text.push(Line::from(""));
        help_text.push(section("General"));
        help_text.push(Line::from(""));
        help_text.push(entry(&keys.refresh, "Refresh all views"));
        help_text.push(entry(&keys.help, "Toggle help"));
        help_text.push(entry(&keys.quit, "Quit"));

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}

/// One-line key hints along the bottom edge.
pub struct HelpBar;

impl HelpBar {
    /// Render the hint bar.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings) {
        let hints = [
            (&keys.edit_amount, "amount"),
            (&keys.bet_up, "up"),
            (&keys.bet_down, "down"),
            (&keys.top_up, "top up"),
            (&keys.refresh, "refresh"),
            (&keys.quit, "quit"),
        ];

        let spans: Vec<Span> = hints
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {key} "), Style::default().fg(Color::Cyan)),
                    Span::styled(format!("{label} "), Style::default().fg(Color::Gray)),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn entry(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<6}"), Style::default().fg(Color::Cyan)),
        Span::raw(description.to_string()),
    ])
}
