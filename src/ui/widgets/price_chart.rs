//! Price chart widget.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::state::Store;

/// Line chart of the recent price history.
pub struct PriceChart;

impl PriceChart {
    /// Render the chart.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, color: Color) {
        let price = &store.price;
        let block = Block::default()
            .title(Self::title(store))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if price.meta.error().is_some() {
                Color::Red
            } else {
                Color::Cyan
            }));

        let Some(y_bounds) = price.series.y_bounds() else {
            let text = if price.meta.error().is_some() {
                "Price unavailable"
            } else {
                "Loading price..."
            };
            let empty = Paragraph::new(text)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(empty, area);
            return;
        };

        let x_bounds = price.series.x_bounds();
        let x_labels = vec![
            Span::raw(format!("{}", x_bounds[0] as usize)),
            Span::raw(format!("{}", x_bounds[1] as usize)),
        ];
        let y_labels = vec![
            Span::styled(
                format!("{:.2}", y_bounds[0]),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{:.2}", f64::midpoint(y_bounds[0], y_bounds[1]))),
            Span::styled(
                format!("{:.2}", y_bounds[1]),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(price.series.points());

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .labels(x_labels)
                    .bounds(x_bounds),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .labels(y_labels)
                    .bounds(y_bounds),
            );

        frame.render_widget(chart, area);
    }

    fn title(store: &Store) -> Line<'static> {
        let mut spans = vec![Span::raw(" Price ")];
        if let Some(current) = store.price.current {
            spans.push(Span::styled(
                format!("{current:.2} "),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if store.price.meta.error().is_some() {
            spans.push(Span::styled("(stale) ", Style::default().fg(Color::Red)));
        }
        Line::from(spans)
    }
}
